//! Built-in rule catalog.
//!
//! Rules live under `<provider>/<service>` and are written against their service's state
//! section, so a rule can only read the resources its identity declares.

use crate::registry::{Registry, RegistryError};

mod aws;
mod azure;


/// Register every built-in rule. This is the single composition point for the catalog.
pub fn register_builtin(registry: &mut Registry) -> Result<(), RegistryError> {
    aws::register(registry)?;
    azure::register(registry)?;
    Ok(())
}
