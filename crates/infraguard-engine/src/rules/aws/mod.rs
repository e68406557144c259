use crate::registry::{Registry, RegistryError};

pub(crate) mod apigateway;
pub(crate) mod mq;
pub(crate) mod s3;
pub(crate) mod vpc;

pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    apigateway::register(registry)?;
    mq::register(registry)?;
    s3::register(registry)?;
    vpc::register(registry)?;
    Ok(())
}
