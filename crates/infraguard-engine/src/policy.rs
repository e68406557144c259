use crate::engine::ScanOptions;
use crate::selector::RuleFilter;
use globset::GlobMatcher;
use infraguard_types::{ScanResult, Severity, Status};

/// Suppresses matching failures: they are kept, with status `Ignored`.
#[derive(Clone, Debug)]
pub struct IgnoreRule {
    /// Matched against the result's `LongId`.
    pub rule: GlobMatcher,
    /// Matched against the resource reference; `None` matches any resource.
    pub resource: Option<GlobMatcher>,
}

impl IgnoreRule {
    pub fn matches(&self, result: &ScanResult) -> bool {
        if !self.rule.is_match(result.rule.long_id.as_str()) {
            return false;
        }
        match (&self.resource, result.metadata.reference()) {
            (None, _) => true,
            (Some(pattern), Some(reference)) => pattern.is_match(reference),
            (Some(_), None) => false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub filter: RuleFilter,
    /// Lowest severity at which a failure fails the verdict.
    pub fail_on: Severity,
    pub options: ScanOptions,
    pub ignores: Vec<IgnoreRule>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            filter: RuleFilter::default(),
            fail_on: Severity::Low,
            options: ScanOptions::default(),
            ignores: Vec::new(),
        }
    }
}

/// Downgrade failures matched by any ignore rule to `Ignored`.
///
/// Faults are never suppressed. Returns how many results were downgraded.
pub fn apply_ignores(results: &mut [ScanResult], ignores: &[IgnoreRule]) -> usize {
    if ignores.is_empty() {
        return 0;
    }

    let mut ignored = 0;
    for result in results.iter_mut() {
        if result.status != Status::Failed || result.is_fault() {
            continue;
        }
        if ignores.iter().any(|ig| ig.matches(result)) {
            result.status = Status::Ignored;
            ignored += 1;
        }
    }
    ignored
}
