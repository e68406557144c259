use crate::registry::{Registry, RegistryError};
use crate::results::Results;
use crate::rule::RuleDescriptor;
use infraguard_state::aws::mq::Mq;
use infraguard_types::{Provider, Severity, ids};

pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.try_register::<Mq, _>(enable_audit_logging(), check_audit_logging)?;
    Ok(())
}

fn enable_audit_logging() -> RuleDescriptor {
    RuleDescriptor {
        provider: Provider::Aws,
        service: ids::SERVICE_MQ.to_string(),
        short_code: "enable-audit-logging".to_string(),
        summary: "MQ Broker should have audit logging enabled".to_string(),
        impact: "Without audit logging it is difficult to trace activity in the MQ broker"
            .to_string(),
        resolution: "Enable audit logging".to_string(),
        explanation: "Logging should be enabled to allow tracing of issues and activity to be \
                      investigated more fully. Logs provide additional information and context \
                      which is often invaluable during investigation"
            .to_string(),
        links: vec![
            "https://docs.aws.amazon.com/amazon-mq/latest/developer-guide/configure-logging-monitoring-activemq.html"
                .to_string(),
        ],
        severity: Severity::Medium,
    }
}

fn check_audit_logging(mq: &Mq, results: &mut Results) {
    for broker in &mq.brokers {
        let audit = &broker.logging.audit;
        if audit.is_false() {
            results.add(
                "Broker does not have audit logging enabled.",
                audit.metadata(),
                *audit.value(),
            );
        } else {
            results.add_passed(&broker.metadata);
        }
    }
}
