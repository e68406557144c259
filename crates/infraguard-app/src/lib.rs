//! Use case orchestration for infraguard.
//!
//! This crate is the application layer: use cases that coordinate settings, the engine and
//! report serialization. It is thin and delegates evaluation to the engine.
//!
//! An embedding binary depends on this; it only builds the state tree, handles arguments and
//! installs a tracing subscriber.

#![forbid(unsafe_code)]

mod config;
mod explain;
mod list;
mod report;
mod scan;

pub use config::read_config_text;
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use list::{RuleListing, format_rule_list, run_list_rules};
pub use report::{serialize_report, write_report};
pub use scan::{ScanInput, ScanOutput, run_scan, verdict_exit_code};
