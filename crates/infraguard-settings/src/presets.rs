use infraguard_engine::policy::EffectiveConfig;
use infraguard_engine::{RuleFilter, ScanOptions};
use infraguard_types::Severity;

pub const PROFILES: [&str; 3] = ["default", "strict", "critical"];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex belongs in repo config.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    match profile {
        "default" => Some(default_profile()),
        "strict" => Some(strict_profile()),
        "critical" => Some(critical_profile()),
        _ => None,
    }
}

/// Every rule runs; only high and critical failures fail the verdict.
fn default_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "default".to_string(),
        filter: RuleFilter::default(),
        fail_on: Severity::High,
        options: ScanOptions::default(),
        ignores: Vec::new(),
    }
}

/// Every rule runs and any failure fails the verdict.
fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: Severity::Low,
        ..default_profile()
    }
}

/// Only critical rules run.
fn critical_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "critical".to_string(),
        filter: RuleFilter::new().min_severity(Severity::Critical),
        fail_on: Severity::Critical,
        ..default_profile()
    }
}
