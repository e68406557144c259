//! The `scan` use case: resolve policy, evaluate rules and produce a report.

use anyhow::Context;
use infraguard_engine::Registry;
use infraguard_settings::{InfraguardConfigV1, Overrides, ResolvedConfig};
use infraguard_state::State;
use infraguard_types::{SCHEMA_REPORT_V1, ScanData, ScanReport, ToolMeta, Verdict};
use time::OffsetDateTime;
use tracing::info;

/// Input for the scan use case.
#[derive(Clone, Debug)]
pub struct ScanInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Caller overrides (command line or embedding code).
    pub overrides: Overrides,
    /// The state tree produced by an adapter.
    pub state: &'a State,
    pub registry: &'a Registry,
}

/// Output from the scan use case.
#[derive(Clone, Debug)]
pub struct ScanOutput {
    pub report: ScanReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the scan use case: parse config, resolve policy, evaluate, produce report.
pub fn run_scan(input: ScanInput<'_>) -> anyhow::Result<ScanOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        InfraguardConfigV1::default()
    } else {
        infraguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        infraguard_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let domain =
        infraguard_engine::scan_with_policy(input.registry, input.state, &resolved.effective);
    let finished_at = OffsetDateTime::now_utc();

    info!(
        profile = %resolved.effective.profile,
        rules_evaluated = domain.rules_evaluated,
        failed = domain.status_counts.failed,
        passed = domain.status_counts.passed,
        ignored = domain.status_counts.ignored,
        verdict = ?domain.verdict,
        "scan finished"
    );

    let report = ScanReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "infraguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain.verdict,
        findings: domain.results,
        data: ScanData {
            profile: resolved.effective.profile.clone(),
            rules_evaluated: domain.rules_evaluated,
            results: domain.status_counts,
            failed_by_severity: domain.failed_by_severity,
        },
    };

    Ok(ScanOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
