//! Provenance metadata carried by every state attribute and resource.

use crate::SourcePath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Line range of a configuration fragment within a source file.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Range {
    pub path: SourcePath,
    pub start_line: u32,
    pub end_line: u32,
}

impl Range {
    pub fn new(path: impl Into<SourcePath>, start_line: u32, end_line: u32) -> Self {
        Self {
            path: path.into(),
            start_line,
            end_line: end_line.max(start_line),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_line == self.end_line {
            write!(f, "{}:{}", self.path, self.start_line)
        } else {
            write!(f, "{}:{}-{}", self.path, self.start_line, self.end_line)
        }
    }
}

/// Where a value came from, and whether the configuration set it explicitly.
///
/// Metadata is never absent. A value that does not exist in the scanned configuration carries
/// either its enclosing resource's location (see [`Metadata::defaulted`]) or the synthetic
/// "not found" marker from [`Metadata::not_found`]. Fields are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    explicit: bool,
}

impl Metadata {
    /// Metadata for a value set explicitly at `range`, inside the resource named `reference`.
    pub fn new(range: Range, reference: impl Into<String>) -> Self {
        Self {
            range: Some(range),
            reference: Some(reference.into()),
            explicit: true,
        }
    }

    /// The synthetic marker for something absent from the scanned configuration.
    pub fn not_found() -> Self {
        Self {
            range: None,
            reference: None,
            explicit: false,
        }
    }

    /// Fixed, explicit metadata for unit tests of rules.
    pub fn test() -> Self {
        Self::new(Range::new("test.tf", 123, 123), "test")
    }

    /// Same location and reference, but marked as not explicitly set.
    ///
    /// Used for defaults of fields the configuration omitted: findings still point at the
    /// enclosing resource.
    pub fn defaulted(&self) -> Self {
        Self {
            range: self.range.clone(),
            reference: self.reference.clone(),
            explicit: false,
        }
    }

    pub fn range(&self) -> Option<&Range> {
        self.range.as_ref()
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// `true` when the metadata points at a real source location.
    pub fn is_resolved(&self) -> bool {
        self.range.is_some()
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::not_found()
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.range, &self.reference) {
            (Some(range), Some(reference)) => write!(f, "{reference} ({range})"),
            (Some(range), None) => write!(f, "{range}"),
            (None, Some(reference)) => f.write_str(reference),
            (None, None) => f.write_str("<not found>"),
        }
    }
}
