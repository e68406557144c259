use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `infraguard.toml` schema v1.
///
/// A user-facing model: every field is optional and unknown values are reported at
/// resolution time, not parse time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InfraguardConfigV1 {
    /// Optional schema string for tooling (`infraguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from: `default`, `strict` or `critical`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Restrict the scan to these providers (`aws`, `azure`, ...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub providers: Vec<String>,

    /// Restrict the scan to these services (`s3`, `keyvault`, ...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,

    /// Skip rules below this severity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_severity: Option<String>,

    /// Glob patterns over rule ids; when set, only matching rules run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    /// Glob patterns over rule ids that never run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Lowest severity of a failure that fails the verdict.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,

    /// Per-rule deadline in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_timeout_ms: Option<u64>,

    /// Map of rule id -> config.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,

    #[serde(default, rename = "ignore")]
    pub ignores: Vec<IgnoreConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Override the preset's enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// `[[ignore]]` entry: failures of matching rules on matching resources become `Ignored`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IgnoreConfig {
    /// Glob over rule ids.
    pub rule: String,

    /// Glob over resource references (`aws_s3_bucket.logs`); omitted matches any resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}
