//! Choosing which registered rules a scan runs.

use crate::rule::RuleDescriptor;
use globset::GlobSet;
use infraguard_types::{Provider, Severity};
use std::collections::BTreeSet;

/// Predicate over rule descriptors.
pub trait Selector: Sync {
    fn select(&self, descriptor: &RuleDescriptor) -> bool;
}

impl<F> Selector for F
where
    F: Fn(&RuleDescriptor) -> bool + Sync,
{
    fn select(&self, descriptor: &RuleDescriptor) -> bool {
        self(descriptor)
    }
}

/// Selects every registered rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllRules;

impl Selector for AllRules {
    fn select(&self, _descriptor: &RuleDescriptor) -> bool {
        true
    }
}

/// Declarative selection built from configuration.
///
/// Empty restrictions select everything; each populated restriction narrows the set.
/// `exclude` and `disabled` win over `include`.
#[derive(Clone, Debug, Default)]
pub struct RuleFilter {
    pub providers: BTreeSet<Provider>,
    pub services: BTreeSet<String>,
    pub min_severity: Option<Severity>,
    /// Glob patterns over `LongId`.
    pub include: Option<GlobSet>,
    pub exclude: Option<GlobSet>,
    /// Exact `LongId`s switched off.
    pub disabled: BTreeSet<String>,
}

impl RuleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provider(mut self, provider: Provider) -> Self {
        self.providers.insert(provider);
        self
    }

    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.services.insert(service.into());
        self
    }

    pub fn min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = Some(severity);
        self
    }

    pub fn disable(mut self, long_id: impl Into<String>) -> Self {
        self.disabled.insert(long_id.into());
        self
    }
}

impl Selector for RuleFilter {
    fn select(&self, d: &RuleDescriptor) -> bool {
        if !self.providers.is_empty() && !self.providers.contains(&d.provider) {
            return false;
        }
        if !self.services.is_empty() && !self.services.contains(&d.service) {
            return false;
        }
        if self.min_severity.is_some_and(|min| d.severity < min) {
            return false;
        }

        let long_id = d.long_id();
        let id = long_id.as_str();
        if self.disabled.contains(id) {
            return false;
        }
        if self.exclude.as_ref().is_some_and(|set| set.is_match(id)) {
            return false;
        }
        self.include.as_ref().is_none_or(|set| set.is_match(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::descriptor;
    use globset::{Glob, GlobSetBuilder};

    fn globs(patterns: &[&str]) -> GlobSet {
        let mut builder = GlobSetBuilder::new();
        for p in patterns {
            builder.add(Glob::new(p).unwrap());
        }
        builder.build().unwrap()
    }

    #[test]
    fn empty_filter_selects_everything() {
        let d = descriptor(Provider::Azure, "keyvault", "x", Severity::Low);
        assert!(RuleFilter::new().select(&d));
        assert!(AllRules.select(&d));
    }

    #[test]
    fn provider_service_and_severity_narrow() {
        let filter = RuleFilter::new()
            .provider(Provider::Aws)
            .service("s3")
            .min_severity(Severity::High);

        assert!(filter.select(&descriptor(Provider::Aws, "s3", "a", Severity::High)));
        assert!(filter.select(&descriptor(Provider::Aws, "s3", "a", Severity::Critical)));
        assert!(!filter.select(&descriptor(Provider::Aws, "s3", "a", Severity::Medium)));
        assert!(!filter.select(&descriptor(Provider::Aws, "mq", "a", Severity::High)));
        assert!(!filter.select(&descriptor(Provider::Azure, "s3", "a", Severity::High)));
    }

    #[test]
    fn exclude_and_disabled_win_over_include() {
        let filter = RuleFilter {
            include: Some(globs(&["aws/s3/*"])),
            exclude: Some(globs(&["aws/s3/specify-*"])),
            ..RuleFilter::default()
        }
        .disable("aws/s3/enable-versioning");

        assert!(filter.select(&descriptor(Provider::Aws, "s3", "enable-bucket-encryption", Severity::Low)));
        assert!(!filter.select(&descriptor(Provider::Aws, "s3", "specify-public-access-block", Severity::Low)));
        assert!(!filter.select(&descriptor(Provider::Aws, "s3", "enable-versioning", Severity::Low)));
        assert!(!filter.select(&descriptor(Provider::Aws, "mq", "enable-audit-logging", Severity::Low)));
    }

    #[test]
    fn closures_are_selectors() {
        let only_short_code = |d: &RuleDescriptor| d.short_code == "wanted";
        assert!(only_short_code.select(&descriptor(Provider::Aws, "s3", "wanted", Severity::Low)));
        assert!(!only_short_code.select(&descriptor(Provider::Aws, "s3", "other", Severity::Low)));
    }
}
