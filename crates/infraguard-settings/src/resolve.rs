use crate::{model::InfraguardConfigV1, presets};
use anyhow::Context;
use globset::{Glob, GlobSet, GlobSetBuilder};
use infraguard_engine::policy::{EffectiveConfig, IgnoreRule};
use infraguard_types::{Provider, Severity};
use std::time::Duration;

/// Values that win over both the preset and the config file (e.g. from a command line).
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub min_severity: Option<String>,
    pub parallel: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: InfraguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "default".to_string());

    let mut effective = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected {})",
            presets::PROFILES.join("|")
        )
    })?;

    // Selection
    for name in &cfg.providers {
        let provider = parse_provider(name)?;
        effective.filter.providers.insert(provider);
    }
    for service in &cfg.services {
        let valid = !service.is_empty()
            && service
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        if !valid {
            anyhow::bail!("invalid service name: {service:?} (expected lowercase alphanumerics)");
        }
        effective.filter.services.insert(service.clone());
    }
    if let Some(sev) = overrides.min_severity.as_deref().or(cfg.min_severity.as_deref()) {
        effective.filter.min_severity =
            Some(parse_severity(sev).context("invalid min_severity")?);
    }
    if !cfg.include.is_empty() {
        effective.filter.include = Some(build_globset("include", &cfg.include)?);
    }
    if !cfg.exclude.is_empty() {
        effective.filter.exclude = Some(build_globset("exclude", &cfg.exclude)?);
    }

    // per-rule toggles
    for (rule_id, rc) in cfg.rules.iter() {
        validate_rule_id(rule_id)?;
        match rc.enabled {
            Some(false) => {
                effective.filter.disabled.insert(rule_id.clone());
            }
            Some(true) => {
                effective.filter.disabled.remove(rule_id);
            }
            None => {}
        }
    }

    // Verdict and execution
    if let Some(fail_on) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_severity(fail_on).context("invalid fail_on")?;
    }
    if let Some(parallel) = overrides.parallel.or(cfg.parallel) {
        effective.options.parallel = parallel;
    }
    if let Some(ms) = cfg.rule_timeout_ms {
        if ms == 0 {
            anyhow::bail!("rule_timeout_ms must be greater than zero");
        }
        effective.options.rule_timeout = Some(Duration::from_millis(ms));
    }

    for (i, ignore) in cfg.ignores.iter().enumerate() {
        let rule = Glob::new(&ignore.rule)
            .with_context(|| format!("invalid rule glob in ignore #{i}: {}", ignore.rule))?
            .compile_matcher();
        let resource = match ignore.resource.as_deref() {
            Some(pattern) => Some(
                Glob::new(pattern)
                    .with_context(|| format!("invalid resource glob in ignore #{i}: {pattern}"))?
                    .compile_matcher(),
            ),
            None => None,
        };
        effective.ignores.push(IgnoreRule { rule, resource });
    }

    Ok(ResolvedConfig { effective })
}

fn build_globset(field: &str, patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("invalid {field} glob: {pattern}"))?;
        builder.add(glob);
    }
    builder
        .build()
        .with_context(|| format!("failed to build {field} globs"))
}

fn validate_rule_id(rule_id: &str) -> anyhow::Result<()> {
    let segments: Vec<&str> = rule_id.split('/').collect();
    if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
        anyhow::bail!(
            "invalid rule id in [rules]: {rule_id} (expected provider/service/short-code)"
        );
    }
    parse_provider(segments[0])
        .with_context(|| format!("invalid rule id in [rules]: {rule_id}"))?;
    Ok(())
}

fn parse_provider(v: &str) -> anyhow::Result<Provider> {
    Provider::from_name(v).with_context(|| {
        let known: Vec<&str> = Provider::ALL.iter().map(|p| p.as_str()).collect();
        format!("unknown provider: {v} (expected {})", known.join("|"))
    })
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v.to_ascii_lowercase().as_str() {
        "low" => Ok(Severity::Low),
        "medium" => Ok(Severity::Medium),
        "high" => Ok(Severity::High),
        "critical" => Ok(Severity::Critical),
        _ => anyhow::bail!("unknown severity: {v} (expected low|medium|high|critical)"),
    }
}
