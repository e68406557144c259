//! Property-based tests for the engine crate.
//!
//! These tests use proptest to verify invariants around:
//! - Scan determinism (parallel vs sequential, repeated scans)
//! - Registry enumeration order
//! - Fault isolation when arbitrary rules panic
//! - Verdict monotonicity in the `fail_on` threshold

use crate::engine::{ScanOptions, Scanner};
use crate::policy::EffectiveConfig;
use crate::registry::Registry;
use crate::results::Results;
use crate::selector::AllRules;
use crate::test_support::{bucket, descriptor, state_with_buckets};
use infraguard_state::State;
use infraguard_state::aws::s3::S3;
use infraguard_types::{Provider, Severity, Verdict, ids};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies
// ============================================================================

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Low),
        Just(Severity::Medium),
        Just(Severity::High),
        Just(Severity::Critical),
    ]
}

/// Buckets named `b0..bN` with arbitrary encryption flags.
fn arb_state() -> impl Strategy<Value = State> {
    prop::collection::vec(any::<bool>(), 0..12).prop_map(|flags| {
        state_with_buckets(
            flags
                .into_iter()
                .enumerate()
                .map(|(i, encrypted)| bucket(&format!("b{i}"), encrypted))
                .collect(),
        )
    })
}

/// Distinct kebab-case short codes.
fn arb_short_codes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z][a-z0-9]{0,7}(-[a-z0-9]{1,5}){0,2}", 1..10)
        .prop_map(|set| set.into_iter().collect())
}

fn flag_unencrypted(s3: &S3, results: &mut Results) {
    for bucket in &s3.buckets {
        if bucket.encryption.enabled.is_false() {
            results.add("", bucket.encryption.enabled.metadata(), false);
        } else {
            results.add_passed(&bucket.metadata);
        }
    }
}

/// One rule per `(code, severity, panics)`, all flagging unencrypted buckets.
fn registry_of(rules: &[(String, Severity, bool)]) -> Registry {
    let mut registry = Registry::new();
    for (code, severity, panics) in rules {
        let panics = *panics;
        let label = code.clone();
        registry.register(
            descriptor(Provider::Aws, ids::SERVICE_S3, code, *severity),
            move |s3: &S3, results: &mut Results| {
                flag_unencrypted(s3, results);
                if panics {
                    panic!("rule {label} blew up");
                }
            },
        );
    }
    registry
}

fn arb_rules() -> impl Strategy<Value = Vec<(String, Severity, bool)>> {
    arb_short_codes().prop_flat_map(|codes| {
        let n = codes.len();
        (
            Just(codes),
            prop::collection::vec(arb_severity(), n),
            prop::collection::vec(any::<bool>(), n),
        )
            .prop_map(|(codes, severities, panics)| {
                codes
                    .into_iter()
                    .zip(severities)
                    .zip(panics)
                    .map(|((code, severity), panics)| (code, severity, panics))
                    .collect()
            })
    })
}

fn sequential() -> ScanOptions {
    ScanOptions {
        parallel: false,
        ..ScanOptions::default()
    }
}

// ============================================================================
// Property tests: determinism
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Parallel and sequential scans produce identical, identically ordered output.
    #[test]
    fn parallel_scan_matches_sequential(state in arb_state(), rules in arb_rules()) {
        let registry = registry_of(&rules);
        let parallel = Scanner::new(&registry).scan(&state, &AllRules);
        let serial = Scanner::new(&registry).with_options(sequential()).scan(&state, &AllRules);
        prop_assert_eq!(parallel, serial);
    }

    /// Scanning the same state twice gives the same results.
    #[test]
    fn scan_is_repeatable(state in arb_state(), rules in arb_rules()) {
        let registry = registry_of(&rules);
        let scanner = Scanner::new(&registry);
        prop_assert_eq!(scanner.scan(&state, &AllRules), scanner.scan(&state, &AllRules));
    }

    /// Enumeration is sorted by LongID no matter the registration order.
    #[test]
    fn enumeration_ignores_registration_order(
        rules in arb_rules().prop_flat_map(|r| Just(r).prop_shuffle())
    ) {
        let registry = registry_of(&rules);
        let listed: Vec<String> = registry
            .enumerate()
            .map(|r| r.long_id().to_string())
            .collect();
        let mut expected: Vec<String> = rules
            .iter()
            .map(|(code, _, _)| format!("aws/s3/{code}"))
            .collect();
        expected.sort();
        prop_assert_eq!(listed, expected);
    }

    /// Results from one rule never interleave with another's.
    #[test]
    fn results_are_grouped_by_rule(state in arb_state(), rules in arb_rules()) {
        let registry = registry_of(&rules);
        let results = Scanner::new(&registry).scan(&state, &AllRules);
        let mut seen = BTreeSet::new();
        let mut current: Option<String> = None;
        for r in &results {
            let id = r.rule.long_id.to_string();
            if current.as_deref() != Some(id.as_str()) {
                prop_assert!(seen.insert(id.clone()), "rule {} appears twice", id);
                current = Some(id);
            }
        }
    }
}

// ============================================================================
// Property tests: fault isolation and verdict
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A panicking rule yields exactly one fault result; healthy rules keep their output.
    #[test]
    fn panicking_rules_are_contained(state in arb_state(), rules in arb_rules()) {
        let registry = registry_of(&rules);
        let results = Scanner::new(&registry).scan(&state, &AllRules);
        let per_bucket = state.aws.s3.buckets.len();

        for (code, _, panics) in &rules {
            let long_id = format!("aws/s3/{code}");
            let own: Vec<_> = results
                .iter()
                .filter(|r| r.rule.long_id == long_id.as_str())
                .collect();
            if *panics {
                prop_assert_eq!(own.len(), 1);
                prop_assert!(own[0].is_fault());
                prop_assert!(own[0].fingerprint.is_some());
            } else {
                prop_assert_eq!(own.len(), per_bucket);
                prop_assert!(own.iter().all(|r| !r.is_fault()));
            }
        }
    }

    /// Raising `fail_on` can only turn a failing verdict into a passing one.
    #[test]
    fn verdict_is_monotonic_in_fail_on(
        state in arb_state(),
        rules in arb_rules(),
        lower in arb_severity(),
        higher in arb_severity(),
    ) {
        prop_assume!(lower <= higher);
        let registry = registry_of(&rules);
        let cfg = |fail_on| EffectiveConfig { fail_on, ..EffectiveConfig::default() };

        let strict = crate::scan_with_policy(&registry, &state, &cfg(lower));
        let lax = crate::scan_with_policy(&registry, &state, &cfg(higher));
        if strict.verdict == Verdict::Pass {
            prop_assert_eq!(lax.verdict, Verdict::Pass);
        }
    }

    /// Any fault fails the verdict, whatever the threshold.
    #[test]
    fn faults_always_fail_the_verdict(state in arb_state(), rules in arb_rules()) {
        prop_assume!(rules.iter().any(|(_, _, panics)| *panics));
        let registry = registry_of(&rules);
        let cfg = EffectiveConfig {
            fail_on: Severity::Critical,
            ..EffectiveConfig::default()
        };
        let report = crate::scan_with_policy(&registry, &state, &cfg);
        prop_assert_eq!(report.verdict, Verdict::Fail);
    }
}
