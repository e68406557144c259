use crate::{BoolValue, IntValue, Metadata, Service, State, StringValue};
use infraguard_types::{Provider, ids};

pub const DEFAULT_ACTION_ALLOW: &str = "Allow";
pub const DEFAULT_ACTION_DENY: &str = "Deny";

#[derive(Clone, Debug, Default)]
pub struct KeyVault {
    pub vaults: Vec<Vault>,
}

impl Service for KeyVault {
    const PROVIDER: Provider = Provider::Azure;
    const NAME: &'static str = ids::SERVICE_KEY_VAULT;

    fn select(state: &State) -> &Self {
        &state.azure.key_vault
    }
}

#[derive(Clone, Debug, Default)]
pub struct Vault {
    pub metadata: Metadata,
    pub purge_protection_enabled: BoolValue,
    pub soft_delete_retention_days: IntValue,
    pub network_acls: NetworkAcl,
}

impl Vault {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            purge_protection_enabled: BoolValue::default_from(false, &metadata),
            soft_delete_retention_days: IntValue::default_from(90, &metadata),
            network_acls: NetworkAcl::new(metadata.defaulted()),
            metadata,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct NetworkAcl {
    pub metadata: Metadata,
    pub default_action: StringValue,
}

impl NetworkAcl {
    /// An absent ACL block lets all traffic through.
    pub fn new(metadata: Metadata) -> Self {
        Self {
            default_action: StringValue::default_from(DEFAULT_ACTION_ALLOW.to_string(), &metadata),
            metadata,
        }
    }
}
