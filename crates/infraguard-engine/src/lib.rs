//! Rule registration and pure policy evaluation (no IO).
//!
//! Input: a state tree constructed elsewhere and a registry built at the composition root.
//! Output: ordered results, each traceable to a rule and a source location.

#![forbid(unsafe_code)]

pub mod policy;
pub mod report;
pub mod rules;

mod engine;
mod fingerprint;
mod registry;
mod results;
mod rule;
mod selector;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{ScanOptions, Scanner, evaluate};
pub use fingerprint::{fingerprint_for_fault, fingerprint_for_result};
pub use registry::{Registry, RegistryError};
pub use results::Results;
pub use rule::{Rule, RuleDescriptor};
pub use selector::{AllRules, RuleFilter, Selector};

use infraguard_state::State;
use policy::EffectiveConfig;
use report::DomainReport;

/// Scan `state` with the rules `cfg` selects, then apply ignores and compute the verdict.
pub fn scan_with_policy(registry: &Registry, state: &State, cfg: &EffectiveConfig) -> DomainReport {
    let scanner = Scanner::new(registry).with_options(cfg.options.clone());
    let rules_evaluated = scanner.select(&cfg.filter).len() as u32;

    let mut results = scanner.scan(state, &cfg.filter);
    policy::apply_ignores(&mut results, &cfg.ignores);

    DomainReport {
        verdict: report::compute_verdict(&results, cfg.fail_on),
        rules_evaluated,
        status_counts: report::count_statuses(&results),
        failed_by_severity: report::count_failed_by_severity(&results),
        results,
    }
}
