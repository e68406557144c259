//! Service sections of the state tree.
//!
//! A rule declared for `provider/service` may only read that service's section. Checks are
//! written against `&S` for some `S: Service`, so the section a check reads is part of its type
//! and can be compared with the rule's declared identity at registration time.

use crate::State;
use infraguard_types::Provider;
use std::fmt;

pub trait Service: Send + Sync + 'static {
    const PROVIDER: Provider;
    const NAME: &'static str;

    /// Borrow this service's section out of the whole state.
    fn select(state: &State) -> &Self;

    fn key() -> ServiceKey {
        ServiceKey {
            provider: Self::PROVIDER,
            service: Self::NAME,
        }
    }
}

/// `provider/service` pair identifying one section of the state tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceKey {
    pub provider: Provider,
    pub service: &'static str,
}

impl ServiceKey {
    pub fn matches(&self, provider: Provider, service: &str) -> bool {
        self.provider == provider && self.service == service
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.provider, self.service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aws::{apigateway::ApiGateway, mq::Mq, s3::S3, vpc::Vpc};
    use crate::azure::keyvault::KeyVault;

    #[test]
    fn service_keys_are_distinct() {
        let mut keys = vec![
            S3::key(),
            ApiGateway::key(),
            Mq::key(),
            Vpc::key(),
            KeyVault::key(),
        ];
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 5);
        assert_eq!(S3::key().to_string(), "aws/s3");
        assert_eq!(KeyVault::key().to_string(), "azure/keyvault");
    }

    #[test]
    fn select_borrows_the_matching_section() {
        let state = State::default();
        assert!(std::ptr::eq(S3::select(&state), &state.aws.s3));
        assert!(std::ptr::eq(KeyVault::select(&state), &state.azure.key_vault));
    }
}
