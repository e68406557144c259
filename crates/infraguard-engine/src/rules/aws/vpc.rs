use crate::registry::{Registry, RegistryError};
use crate::results::Results;
use crate::rule::RuleDescriptor;
use infraguard_state::aws::vpc::Vpc;
use infraguard_types::{Provider, Severity, ids};

pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.try_register::<Vpc, _>(no_default_vpc(), check_no_default_vpc)?;
    Ok(())
}

fn no_default_vpc() -> RuleDescriptor {
    RuleDescriptor {
        provider: Provider::Aws,
        service: ids::SERVICE_VPC.to_string(),
        short_code: "no-default-vpc".to_string(),
        summary: "AWS best practice to not use the default VPC for workflows".to_string(),
        impact: "The default VPC does not have critical security features applied".to_string(),
        resolution: "Create a non-default vpc for resources to be created in".to_string(),
        explanation: "Default VPC does not have a lot of the critical security features that \
                      standard VPC comes with, new resources should not be created in the \
                      default VPC and it should not be present in the Terraform."
            .to_string(),
        links: vec!["https://docs.aws.amazon.com/vpc/latest/userguide/default-vpc.html".to_string()],
        severity: Severity::High,
    }
}

fn check_no_default_vpc(vpc: &Vpc, results: &mut Results) {
    for default_vpc in &vpc.default_vpcs {
        results.add_resource("Default VPC is used.", &default_vpc.metadata);
    }
}
