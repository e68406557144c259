//! Stable identifiers for built-in rules and engine-level result codes.
//!
//! A rule's `LongId` is `provider/service/short-code`. Service names are lowercase short names,
//! short codes are kebab-case and unique within their provider and service.

// Services
pub const SERVICE_S3: &str = "s3";
pub const SERVICE_API_GATEWAY: &str = "apigateway";
pub const SERVICE_MQ: &str = "mq";
pub const SERVICE_VPC: &str = "vpc";
pub const SERVICE_KEY_VAULT: &str = "keyvault";

// Rules: aws/s3
pub const RULE_S3_ENABLE_BUCKET_ENCRYPTION: &str = "aws/s3/enable-bucket-encryption";
pub const RULE_S3_SPECIFY_PUBLIC_ACCESS_BLOCK: &str = "aws/s3/specify-public-access-block";

// Rules: aws/apigateway
pub const RULE_API_GATEWAY_ENABLE_CACHE_ENCRYPTION: &str = "aws/apigateway/enable-cache-encryption";

// Rules: aws/mq
pub const RULE_MQ_ENABLE_AUDIT_LOGGING: &str = "aws/mq/enable-audit-logging";

// Rules: aws/vpc
pub const RULE_VPC_NO_DEFAULT_VPC: &str = "aws/vpc/no-default-vpc";

// Rules: azure/keyvault
pub const RULE_KEY_VAULT_SPECIFY_NETWORK_ACL: &str = "azure/keyvault/specify-network-acl";

// Fault codes of synthetic results (see `receipt::Fault`).
pub const CODE_INTERNAL_ERROR: &str = "internal_error";
pub const CODE_DEADLINE_EXCEEDED: &str = "deadline_exceeded";
