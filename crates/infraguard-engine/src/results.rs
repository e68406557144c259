use crate::fingerprint::fingerprint_for_result;
use crate::rule::Rule;
use infraguard_types::{Metadata, ScanResult, Status};
use serde_json::Value as JsonValue;

/// Rule-local, write-only accumulator of results.
///
/// A fresh builder is handed to every evaluation; it cannot be read from, so a rule never
/// observes anyone's output, including its own.
#[derive(Debug, Default)]
pub struct Results {
    entries: Vec<Entry>,
}

#[derive(Debug)]
struct Entry {
    status: Status,
    description: String,
    metadata: Metadata,
    value: JsonValue,
}

impl Results {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a failure on an attribute, keeping the offending value.
    ///
    /// An empty description falls back to the rule's summary.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        metadata: &Metadata,
        value: impl Into<JsonValue>,
    ) {
        self.push(Status::Failed, description.into(), metadata, value.into());
    }

    /// Records a failure on a whole resource (e.g. a missing sub-resource).
    pub fn add_resource(&mut self, description: impl Into<String>, metadata: &Metadata) {
        self.push(Status::Failed, description.into(), metadata, JsonValue::Null);
    }

    pub fn add_passed(&mut self, metadata: &Metadata) {
        self.push(Status::Passed, String::new(), metadata, JsonValue::Null);
    }

    pub fn add_ignored(&mut self, description: impl Into<String>, metadata: &Metadata) {
        self.push(Status::Ignored, description.into(), metadata, JsonValue::Null);
    }

    fn push(&mut self, status: Status, description: String, metadata: &Metadata, value: JsonValue) {
        self.entries.push(Entry {
            status,
            description,
            metadata: metadata.clone(),
            value,
        });
    }

    pub(crate) fn finish(self, rule: &Rule) -> Vec<ScanResult> {
        let rule_ref = rule.rule_ref();
        self.entries
            .into_iter()
            .map(|e| {
                let description = if e.description.is_empty() {
                    rule.descriptor().summary.clone()
                } else {
                    e.description
                };
                let fingerprint = fingerprint_for_result(rule.long_id(), &description, &e.metadata);
                ScanResult {
                    status: e.status,
                    rule: rule_ref.clone(),
                    description,
                    metadata: e.metadata,
                    value: e.value,
                    fingerprint: Some(fingerprint),
                    fault: None,
                }
            })
            .collect()
    }
}
