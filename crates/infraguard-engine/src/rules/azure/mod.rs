use crate::registry::{Registry, RegistryError};

pub(crate) mod keyvault;

pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    keyvault::register(registry)?;
    Ok(())
}
