use crate::{LongId, Metadata, Range, Severity, ids};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for infraguard scan reports.
pub const SCHEMA_REPORT_V1: &str = "infraguard.report.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Failed,
    Ignored,
}

/// Back-reference from a result to the rule that produced it.
///
/// Carries what downstream filtering and deduplication need without a registry lookup.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct RuleRef {
    pub long_id: LongId,
    pub severity: Severity,
}

/// Why the engine replaced a rule's output with a single synthetic failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Fault {
    /// The rule panicked.
    InternalError,
    /// The rule did not finish within its deadline.
    DeadlineExceeded,
}

impl Fault {
    pub fn code(self) -> &'static str {
        match self {
            Fault::InternalError => ids::CODE_INTERNAL_ERROR,
            Fault::DeadlineExceeded => ids::CODE_DEADLINE_EXCEEDED,
        }
    }
}

/// Outcome of one rule against one fragment of state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScanResult {
    pub status: Status,
    pub rule: RuleRef,
    pub description: String,
    pub metadata: Metadata,

    /// The offending (or inspected) attribute value, when there is one.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub value: JsonValue,

    /// Stable identifier intended for dedup and trending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Set only on the synthetic result standing in for a faulted rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault: Option<Fault>,
}

impl ScanResult {
    pub fn is_failed(&self) -> bool {
        self.status == Status::Failed
    }

    pub fn is_fault(&self) -> bool {
        self.fault.is_some()
    }

    pub fn location(&self) -> Option<&Range> {
        self.metadata.range()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StatusCounts {
    pub passed: u32,
    pub failed: u32,
    pub ignored: u32,
}

/// Counts of `Failed` results per rule severity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeverityCounts {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
    pub critical: u32,
}

/// Scan summary payload for the report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScanData {
    pub profile: String,
    pub rules_evaluated: u32,
    pub results: StatusCounts,
    pub failed_by_severity: SeverityCounts,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScanReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub findings: Vec<ScanResult>,
    pub data: ScanData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Provider, Range};
    use serde_json::json;

    #[test]
    fn result_serializes_without_empty_optionals() {
        let result = ScanResult {
            status: Status::Failed,
            rule: RuleRef {
                long_id: LongId::new(Provider::Aws, "s3", "enable-bucket-encryption"),
                severity: Severity::High,
            },
            description: "Bucket does not have encryption enabled".to_string(),
            metadata: Metadata::new(Range::new("main.tf", 2, 8), "aws_s3_bucket.logs"),
            value: JsonValue::Null,
            fingerprint: None,
            fault: None,
        };

        let v = serde_json::to_value(&result).unwrap();
        assert_eq!(v["status"], json!("failed"));
        assert_eq!(v["rule"]["long_id"], json!("aws/s3/enable-bucket-encryption"));
        assert_eq!(v["rule"]["severity"], json!("HIGH"));
        assert_eq!(v["metadata"]["range"]["start_line"], json!(2));
        assert!(v.get("value").is_none());
        assert!(v.get("fingerprint").is_none());
        assert!(v.get("fault").is_none());
    }

    #[test]
    fn fault_serializes_as_its_code() {
        for fault in [Fault::InternalError, Fault::DeadlineExceeded] {
            assert_eq!(serde_json::to_value(fault).unwrap(), json!(fault.code()));
        }
    }
}
