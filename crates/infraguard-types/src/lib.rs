//! Stable DTOs and IDs used across the infraguard workspace.
//!
//! This crate is intentionally boring:
//! - rule identity (`Provider`, `Severity`, `LongId`)
//! - provenance metadata attached to every state attribute
//! - canonical source path handling
//! - data types for the emitted scan report

#![forbid(unsafe_code)]

pub mod ids;
pub mod location;
pub mod path;
pub mod receipt;
pub mod rule;

pub use location::{Metadata, Range};
pub use path::SourcePath;
pub use receipt::{
    Fault, RuleRef, SCHEMA_REPORT_V1, ScanData, ScanReport, ScanResult, SeverityCounts, Status,
    StatusCounts, ToolMeta, Verdict,
};
pub use rule::{LongId, Provider, Severity};
