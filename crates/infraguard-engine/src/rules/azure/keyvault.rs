use crate::registry::{Registry, RegistryError};
use crate::results::Results;
use crate::rule::RuleDescriptor;
use infraguard_state::azure::keyvault::{DEFAULT_ACTION_DENY, KeyVault};
use infraguard_types::{Provider, Severity, ids};

pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.try_register::<KeyVault, _>(specify_network_acl(), check_network_acl)?;
    Ok(())
}

fn specify_network_acl() -> RuleDescriptor {
    RuleDescriptor {
        provider: Provider::Azure,
        service: ids::SERVICE_KEY_VAULT.to_string(),
        short_code: "specify-network-acl".to_string(),
        summary: "Key vault should have the network acl block specified".to_string(),
        impact: "Without a network ACL the key vault is freely accessible".to_string(),
        resolution: "Set a network ACL for the key vault".to_string(),
        explanation: "Network ACLs allow you to reduce your exposure to risk by limiting what \
                      can access your key vault.\n\nThe default action of the Network ACL should \
                      be set to deny for when IPs are not matched. Azure services can be allowed \
                      to bypass."
            .to_string(),
        links: vec![
            "https://docs.microsoft.com/en-us/azure/key-vault/general/network-security"
                .to_string(),
        ],
        severity: Severity::Critical,
    }
}

fn check_network_acl(key_vault: &KeyVault, results: &mut Results) {
    for vault in &key_vault.vaults {
        let action = &vault.network_acls.default_action;
        if action.equal_to(DEFAULT_ACTION_DENY) {
            results.add_passed(&vault.network_acls.metadata);
        } else {
            results.add(
                "Vault network ACL does not block access by default.",
                action.metadata(),
                action.as_str(),
            );
        }
    }
}
