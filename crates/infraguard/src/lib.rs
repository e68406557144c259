//! Policy-as-code rule registration and evaluation.
//!
//! Adapters build a [`State`]; rules are registered once into a [`Registry`]; a [`Scanner`]
//! evaluates the selected rules and returns [`ScanResult`]s that point back at source
//! locations.

#![forbid(unsafe_code)]

pub use infraguard_engine::{
    AllRules, Registry, RegistryError, Results, Rule, RuleDescriptor, RuleFilter, ScanOptions,
    Scanner, Selector, evaluate, fingerprint_for_fault, fingerprint_for_result, policy, report,
    rules, scan_with_policy,
};
pub use infraguard_state::{
    Attr, BoolValue, IntValue, Service, ServiceKey, State, StringSetValue, StringValue, aws,
    azure,
};
pub use infraguard_types::{
    Fault, LongId, Metadata, Provider, Range, RuleRef, ScanReport, ScanResult, Severity,
    SourcePath, Status, Verdict, ids,
};
