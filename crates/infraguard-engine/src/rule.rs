use crate::results::Results;
use infraguard_state::{Service, ServiceKey, State};
use infraguard_types::{LongId, Provider, RuleRef, ScanResult, Severity};
use std::fmt;
use std::marker::PhantomData;

/// Immutable identity and documentation of a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleDescriptor {
    pub provider: Provider,
    /// Lowercase short service name, e.g. `s3`.
    pub service: String,
    /// Kebab-case identifier, unique within provider and service.
    pub short_code: String,
    pub summary: String,
    pub impact: String,
    pub resolution: String,
    pub explanation: String,
    pub links: Vec<String>,
    pub severity: Severity,
}

impl RuleDescriptor {
    pub fn long_id(&self) -> LongId {
        LongId::new(self.provider, &self.service, &self.short_code)
    }
}

/// The evaluation half of a rule.
///
/// The only implementation is [`ServiceCheck`], so every registered check sees exactly one
/// service section and writes only to its own [`Results`].
pub(crate) trait Check: Send + Sync {
    fn evaluate(&self, state: &State, results: &mut Results);

    /// The state section this check reads.
    fn scope(&self) -> ServiceKey;
}

/// A check written against one service section (`&S`) instead of the whole state.
pub(crate) struct ServiceCheck<S, F> {
    f: F,
    _service: PhantomData<fn(&S)>,
}

impl<S, F> ServiceCheck<S, F>
where
    S: Service,
    F: Fn(&S, &mut Results) + Send + Sync,
{
    pub(crate) fn new(f: F) -> Self {
        Self {
            f,
            _service: PhantomData,
        }
    }
}

impl<S, F> Check for ServiceCheck<S, F>
where
    S: Service,
    F: Fn(&S, &mut Results) + Send + Sync,
{
    fn evaluate(&self, state: &State, results: &mut Results) {
        (self.f)(S::select(state), results)
    }

    fn scope(&self) -> ServiceKey {
        S::key()
    }
}

/// A registered rule: descriptor plus check.
pub struct Rule {
    descriptor: RuleDescriptor,
    long_id: LongId,
    check: Box<dyn Check>,
}

impl Rule {
    pub(crate) fn new(descriptor: RuleDescriptor, check: Box<dyn Check>) -> Self {
        Self {
            long_id: descriptor.long_id(),
            descriptor,
            check,
        }
    }

    pub fn descriptor(&self) -> &RuleDescriptor {
        &self.descriptor
    }

    pub fn long_id(&self) -> &LongId {
        &self.long_id
    }

    pub fn severity(&self) -> Severity {
        self.descriptor.severity
    }

    /// The service section the rule's check reads; always the descriptor's own.
    pub fn scope(&self) -> ServiceKey {
        self.check.scope()
    }

    pub fn rule_ref(&self) -> RuleRef {
        RuleRef {
            long_id: self.long_id.clone(),
            severity: self.descriptor.severity,
        }
    }

    /// Runs the check against `state` and stamps every result with this rule.
    ///
    /// No fault isolation happens here; see [`crate::Scanner`].
    pub fn evaluate(&self, state: &State) -> Vec<ScanResult> {
        let mut results = Results::new();
        self.check.evaluate(state, &mut results);
        results.finish(self)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("long_id", &self.long_id)
            .field("severity", &self.descriptor.severity)
            .field("scope", &self.scope())
            .finish()
    }
}
