use crate::{BoolValue, IntValue, Metadata, Service, State, StringValue, find_or_default};
use infraguard_types::{Provider, ids};
use std::borrow::Cow;

pub const PROTOCOL_TYPE_REST: &str = "REST";
pub const PROTOCOL_TYPE_HTTP: &str = "HTTP";
pub const PROTOCOL_TYPE_WEBSOCKET: &str = "WEBSOCKET";

#[derive(Clone, Debug, Default)]
pub struct ApiGateway {
    pub apis: Vec<Api>,
}

impl ApiGateway {
    pub fn api(&self, name: &str) -> Cow<'_, Api> {
        find_or_default(&self.apis, |a| a.name.equal_to(name))
    }
}

impl Service for ApiGateway {
    const PROVIDER: Provider = Provider::Aws;
    const NAME: &'static str = ids::SERVICE_API_GATEWAY;

    fn select(state: &State) -> &Self {
        &state.aws.api_gateway
    }
}

#[derive(Clone, Debug, Default)]
pub struct Api {
    pub metadata: Metadata,
    pub name: StringValue,
    pub protocol_type: StringValue,
    pub stages: Vec<Stage>,
}

impl Api {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            name: StringValue::default_from(String::new(), &metadata),
            protocol_type: StringValue::default_from(PROTOCOL_TYPE_REST.to_string(), &metadata),
            stages: Vec::new(),
            metadata,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.protocol_type.equal_to_ignore_case(PROTOCOL_TYPE_REST)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Stage {
    pub metadata: Metadata,
    pub name: StringValue,
    pub version: IntValue,
    pub rest_method_settings: RestMethodSettings,
}

impl Stage {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            name: StringValue::default_from(String::new(), &metadata),
            version: IntValue::default_from(1, &metadata),
            rest_method_settings: RestMethodSettings::new(metadata.defaulted()),
            metadata,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RestMethodSettings {
    pub metadata: Metadata,
    pub cache_enabled: BoolValue,
    pub cache_data_encrypted: BoolValue,
}

impl RestMethodSettings {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            cache_enabled: BoolValue::default_from(false, &metadata),
            cache_data_encrypted: BoolValue::default_from(false, &metadata),
            metadata,
        }
    }
}
