use crate::{Metadata, Service, State};
use infraguard_types::{Provider, ids};

#[derive(Clone, Debug, Default)]
pub struct Vpc {
    /// Default VPCs declared in the configuration.
    pub default_vpcs: Vec<DefaultVpc>,
}

impl Service for Vpc {
    const PROVIDER: Provider = Provider::Aws;
    const NAME: &'static str = ids::SERVICE_VPC;

    fn select(state: &State) -> &Self {
        &state.aws.vpc
    }
}

#[derive(Clone, Debug, Default)]
pub struct DefaultVpc {
    pub metadata: Metadata,
}
