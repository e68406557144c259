use crate::{BoolValue, Metadata, Service, State};
use infraguard_types::{Provider, ids};

#[derive(Clone, Debug, Default)]
pub struct Mq {
    pub brokers: Vec<Broker>,
}

impl Service for Mq {
    const PROVIDER: Provider = Provider::Aws;
    const NAME: &'static str = ids::SERVICE_MQ;

    fn select(state: &State) -> &Self {
        &state.aws.mq
    }
}

#[derive(Clone, Debug, Default)]
pub struct Broker {
    pub metadata: Metadata,
    pub public_access: BoolValue,
    pub logging: Logging,
}

impl Broker {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            public_access: BoolValue::default_from(false, &metadata),
            logging: Logging::new(metadata.defaulted()),
            metadata,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Logging {
    pub metadata: Metadata,
    pub general: BoolValue,
    pub audit: BoolValue,
}

impl Logging {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            general: BoolValue::default_from(false, &metadata),
            audit: BoolValue::default_from(false, &metadata),
            metadata,
        }
    }
}
