use infraguard_types::{ScanResult, Severity, SeverityCounts, Status, StatusCounts, Verdict};

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub results: Vec<ScanResult>,
    pub rules_evaluated: u32,
    pub status_counts: StatusCounts,
    pub failed_by_severity: SeverityCounts,
}

pub fn count_statuses(results: &[ScanResult]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for r in results {
        match r.status {
            Status::Passed => counts.passed += 1,
            Status::Failed => counts.failed += 1,
            Status::Ignored => counts.ignored += 1,
        }
    }
    counts
}

pub fn count_failed_by_severity(results: &[ScanResult]) -> SeverityCounts {
    let mut counts = SeverityCounts::default();
    for r in results.iter().filter(|r| r.is_failed()) {
        match r.rule.severity {
            Severity::Low => counts.low += 1,
            Severity::Medium => counts.medium += 1,
            Severity::High => counts.high += 1,
            Severity::Critical => counts.critical += 1,
        }
    }
    counts
}

/// `Fail` when any failure reaches `fail_on`, or when any rule faulted.
///
/// A faulted rule never yields a passing verdict, whatever its severity.
pub fn compute_verdict(results: &[ScanResult], fail_on: Severity) -> Verdict {
    let failing = results
        .iter()
        .filter(|r| r.is_failed())
        .any(|r| r.rule.severity >= fail_on || r.is_fault());
    if failing { Verdict::Fail } else { Verdict::Pass }
}
