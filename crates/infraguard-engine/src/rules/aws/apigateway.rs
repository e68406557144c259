use crate::registry::{Registry, RegistryError};
use crate::results::Results;
use crate::rule::RuleDescriptor;
use infraguard_state::aws::apigateway::ApiGateway;
use infraguard_types::{Provider, Severity, ids};

pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.try_register::<ApiGateway, _>(
        enable_cache_encryption(),
        check_cache_encryption,
    )?;
    Ok(())
}

fn enable_cache_encryption() -> RuleDescriptor {
    RuleDescriptor {
        provider: Provider::Aws,
        service: ids::SERVICE_API_GATEWAY.to_string(),
        short_code: "enable-cache-encryption".to_string(),
        summary: "API Gateway must have cache encryption enabled".to_string(),
        impact: "Data stored in the cache that is unencrypted may be vulnerable to compromise"
            .to_string(),
        resolution: "Enable cache encryption".to_string(),
        explanation: "Method cache encryption ensures that any sensitive data in the cache is \
                      not vulnerable to compromise in the event of interception"
            .to_string(),
        links: vec![
            "https://docs.aws.amazon.com/apigateway/latest/developerguide/api-gateway-caching.html"
                .to_string(),
        ],
        severity: Severity::Medium,
    }
}

// Only REST APIs have method-level cache settings; an uncached stage has nothing to encrypt.
fn check_cache_encryption(gateway: &ApiGateway, results: &mut Results) {
    for api in gateway.apis.iter().filter(|api| api.is_rest()) {
        for stage in &api.stages {
            let settings = &stage.rest_method_settings;
            if settings.cache_enabled.is_false() {
                continue;
            }
            if settings.cache_data_encrypted.is_false() {
                results.add(
                    "Cache data is not encrypted.",
                    settings.cache_data_encrypted.metadata(),
                    *settings.cache_data_encrypted.value(),
                );
            } else {
                results.add_passed(&settings.metadata);
            }
        }
    }
}
