use crate::fingerprint::fingerprint_for_fault;
use crate::registry::Registry;
use crate::rule::Rule;
use crate::selector::Selector;
use infraguard_state::State;
use infraguard_types::{Fault, Metadata, ScanResult, Status};
use rayon::prelude::*;
use serde_json::json;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Run a single rule against `state` and return its results unchanged.
///
/// This is the primitive for unit-testing one rule: a panicking check propagates.
pub fn evaluate(rule: &Rule, state: &State) -> Vec<ScanResult> {
    rule.evaluate(state)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Evaluate selected rules on the rayon pool.
    pub parallel: bool,
    /// Wall-clock budget per rule. With a budget set, each rule runs on its own worker thread;
    /// a rule that has not reported when the budget runs out contributes a single synthetic
    /// failure and the scan moves on. The worker is left to finish and its output is dropped.
    pub rule_timeout: Option<Duration>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            rule_timeout: None,
        }
    }
}

/// Drives registered rules over a state tree with per-rule fault isolation.
///
/// Panics raised by a check are caught and turned into fault results, but the process-wide
/// panic hook still runs first, so with the default hook each caught panic prints a
/// `thread '...' panicked at` message to stderr. Embedders that want a quiet scan install
/// their own hook with [`std::panic::set_hook`] before scanning.
#[derive(Clone, Debug)]
pub struct Scanner<'r> {
    registry: &'r Registry,
    options: ScanOptions,
}

impl<'r> Scanner<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            options: ScanOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// The rules `selector` picks, in registry enumeration order.
    pub fn select<S: Selector + ?Sized>(&self, selector: &S) -> Vec<&'r Rule> {
        self.select_shared(selector)
            .into_iter()
            .map(|rule| rule.as_ref())
            .collect()
    }

    fn select_shared<S: Selector + ?Sized>(&self, selector: &S) -> Vec<&'r Arc<Rule>> {
        self.registry
            .enumerate_shared()
            .filter(|rule| selector.select(rule.descriptor()))
            .collect()
    }

    /// Evaluate every selected rule and concatenate results in enumeration order.
    ///
    /// A rule that panics or overruns its deadline contributes exactly one `Failed` result
    /// describing the fault; the other rules are unaffected. A rule with no results simply
    /// contributes nothing.
    ///
    /// With [`ScanOptions::rule_timeout`] set, rule workers outlive the call, so `state` is
    /// cloned once into an [`Arc`]. Callers that already hold one use [`Scanner::scan_shared`].
    pub fn scan<S: Selector + ?Sized>(&self, state: &State, selector: &S) -> Vec<ScanResult> {
        if self.options.rule_timeout.is_some() {
            return self.scan_shared(Arc::new(state.clone()), selector);
        }

        let rules = self.select(selector);
        self.collect_in_order(&rules, |rule| evaluate_isolated(rule, state))
    }

    /// [`Scanner::scan`] over a state the caller already shares.
    pub fn scan_shared<S: Selector + ?Sized>(
        &self,
        state: Arc<State>,
        selector: &S,
    ) -> Vec<ScanResult> {
        let rules = self.select_shared(selector);
        match self.options.rule_timeout {
            Some(limit) => {
                self.collect_in_order(&rules, |rule| evaluate_with_deadline(rule, &state, limit))
            }
            None => self.collect_in_order(&rules, |rule| evaluate_isolated(rule, &state)),
        }
    }

    fn collect_in_order<R, F>(&self, rules: &[R], run: F) -> Vec<ScanResult>
    where
        R: Sync,
        F: Fn(&R) -> Vec<ScanResult> + Sync,
    {
        // Indexed collect keeps enumeration order regardless of completion order.
        let per_rule: Vec<Vec<ScanResult>> = if self.options.parallel {
            rules.par_iter().map(&run).collect()
        } else {
            rules.iter().map(&run).collect()
        };

        per_rule.into_iter().flatten().collect()
    }
}

type Outcome = Result<Vec<ScanResult>, String>;

fn run_caught(rule: &Rule, state: &State) -> Outcome {
    panic::catch_unwind(AssertUnwindSafe(|| rule.evaluate(state)))
        .map_err(|payload| panic_message(payload.as_ref()))
}

fn evaluate_isolated(rule: &Rule, state: &State) -> Vec<ScanResult> {
    settle(rule, run_caught(rule, state))
}

fn evaluate_with_deadline(
    rule: &Arc<Rule>,
    state: &Arc<State>,
    limit: Duration,
) -> Vec<ScanResult> {
    let (tx, rx) = mpsc::channel::<Outcome>();
    let worker_rule = Arc::clone(rule);
    let worker_state = Arc::clone(state);
    let started = Instant::now();

    let spawned = thread::Builder::new()
        .name(format!("infraguard-rule-{}", rule.long_id()))
        .spawn(move || {
            // Fails only when the caller already gave up on this rule.
            let _ = tx.send(run_caught(&worker_rule, &worker_state));
        });
    if let Err(err) = spawned {
        warn!(long_id = %rule.long_id(), error = %err, "failed to start rule worker");
        return vec![fault_result(
            rule,
            Cause::Internal(format!("failed to start rule worker: {err}")),
        )];
    }

    match rx.recv_timeout(limit) {
        Ok(outcome) => settle(rule, outcome),
        Err(RecvTimeoutError::Timeout) => {
            let elapsed = started.elapsed();
            warn!(
                long_id = %rule.long_id(),
                elapsed_ms = elapsed.as_millis() as u64,
                limit_ms = limit.as_millis() as u64,
                "rule exceeded its deadline"
            );
            vec![fault_result(rule, Cause::DeadlineExceeded { elapsed, limit })]
        }
        Err(RecvTimeoutError::Disconnected) => {
            warn!(long_id = %rule.long_id(), "rule worker exited without reporting");
            vec![fault_result(
                rule,
                Cause::Internal("rule worker exited without reporting".to_string()),
            )]
        }
    }
}

fn settle(rule: &Rule, outcome: Outcome) -> Vec<ScanResult> {
    match outcome {
        Ok(results) => {
            debug!(long_id = %rule.long_id(), results = results.len(), "rule evaluated");
            results
        }
        Err(message) => {
            warn!(long_id = %rule.long_id(), reason = %message, "rule evaluation panicked");
            vec![fault_result(rule, Cause::Internal(message))]
        }
    }
}

enum Cause {
    Internal(String),
    DeadlineExceeded { elapsed: Duration, limit: Duration },
}

/// The single synthetic result standing in for a faulted rule. Only this function sets
/// [`ScanResult::fault`].
fn fault_result(rule: &Rule, cause: Cause) -> ScanResult {
    let long_id = rule.long_id();
    let (kind, description, value) = match cause {
        Cause::Internal(message) => (
            Fault::InternalError,
            format!("internal error while evaluating rule {long_id}: {message}"),
            json!({
                "code": Fault::InternalError.code(),
                "message": message,
            }),
        ),
        Cause::DeadlineExceeded { elapsed, limit } => (
            Fault::DeadlineExceeded,
            format!(
                "internal error: rule {long_id} exceeded its deadline of {}ms",
                limit.as_millis()
            ),
            json!({
                "code": Fault::DeadlineExceeded.code(),
                "elapsed_ms": elapsed.as_millis() as u64,
                "limit_ms": limit.as_millis() as u64,
            }),
        ),
    };

    ScanResult {
        status: Status::Failed,
        rule: rule.rule_ref(),
        description,
        metadata: Metadata::not_found(),
        value,
        fingerprint: Some(fingerprint_for_fault(long_id, kind)),
        fault: Some(kind),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
