//! Azure section of the state tree.

pub mod keyvault;

#[derive(Clone, Debug, Default)]
pub struct Azure {
    pub key_vault: keyvault::KeyVault,
}
