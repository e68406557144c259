//! The rule catalog.
//!
//! Rules join the registry at process composition and are never removed. Enumeration is
//! ordered by `LongId`, so scan output does not depend on registration order.
//!
//! A check is always written against one service section (`Fn(&S, &mut Results)` for some
//! `S: Service`); there is no way to register a check over the whole state. The registry
//! rejects a check whose service differs from the descriptor's `provider/service`.

use crate::results::Results;
use crate::rule::{Check, Rule, RuleDescriptor, ServiceCheck};
use infraguard_state::{Service, ServiceKey};
use infraguard_types::{LongId, RuleRef};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Composition-time programming errors. None of these are recoverable at scan time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate rule id: {0}")]
    DuplicateRule(LongId),

    #[error("invalid {field} '{value}' for rule {long_id}: expected {expected}")]
    InvalidIdentifier {
        long_id: LongId,
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("rule {long_id} is declared for {declared} but its check reads {reads}")]
    ServiceMismatch {
        long_id: LongId,
        declared: String,
        reads: ServiceKey,
    },
}

#[derive(Debug, Default)]
pub struct Registry {
    rules: BTreeMap<LongId, Arc<Rule>>,
}

impl Registry {
    /// An empty registry. Tests build their own instead of sharing a process-wide one.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in rule.
    pub fn with_builtin() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        crate::rules::register_builtin(&mut registry)?;
        Ok(registry)
    }

    /// Adds a rule whose check reads only the `S` section of the state.
    ///
    /// # Panics
    ///
    /// Panics when the rule cannot be registered (duplicate `LongId`, malformed identifiers,
    /// or a check that reads another service). These are programming errors and surface at
    /// startup, before any scan runs. Use [`Registry::try_register`] to handle them instead.
    pub fn register<S, F>(&mut self, descriptor: RuleDescriptor, check: F) -> RuleRef
    where
        S: Service,
        F: Fn(&S, &mut Results) + Send + Sync + 'static,
    {
        match self.try_register(descriptor, check) {
            Ok(rule_ref) => rule_ref,
            Err(err) => panic!("rule registration failed: {err}"),
        }
    }

    pub fn try_register<S, F>(
        &mut self,
        descriptor: RuleDescriptor,
        check: F,
    ) -> Result<RuleRef, RegistryError>
    where
        S: Service,
        F: Fn(&S, &mut Results) + Send + Sync + 'static,
    {
        self.insert(descriptor, Box::new(ServiceCheck::<S, F>::new(check)))
    }

    fn insert(
        &mut self,
        descriptor: RuleDescriptor,
        check: Box<dyn Check>,
    ) -> Result<RuleRef, RegistryError> {
        let long_id = descriptor.long_id();
        validate_descriptor(&long_id, &descriptor)?;

        let reads = check.scope();
        if !reads.matches(descriptor.provider, &descriptor.service) {
            return Err(RegistryError::ServiceMismatch {
                declared: format!("{}/{}", descriptor.provider, descriptor.service),
                long_id,
                reads,
            });
        }

        if self.rules.contains_key(&long_id) {
            return Err(RegistryError::DuplicateRule(long_id));
        }

        let rule = Rule::new(descriptor, check);
        let rule_ref = rule.rule_ref();
        self.rules.insert(long_id, Arc::new(rule));
        Ok(rule_ref)
    }

    /// All rules, ordered by `LongId`.
    pub fn enumerate(&self) -> impl Iterator<Item = &Rule> + '_ {
        self.rules.values().map(|rule| rule.as_ref())
    }

    /// Shared handles in enumeration order, for evaluation on worker threads.
    pub(crate) fn enumerate_shared(&self) -> impl Iterator<Item = &Arc<Rule>> + '_ {
        self.rules.values()
    }

    pub fn lookup(&self, long_id: &str) -> Option<&Rule> {
        self.rules.get(long_id).map(|rule| rule.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn validate_descriptor(long_id: &LongId, d: &RuleDescriptor) -> Result<(), RegistryError> {
    let service_ok = !d.service.is_empty()
        && d
            .service
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    if !service_ok {
        return Err(RegistryError::InvalidIdentifier {
            long_id: long_id.clone(),
            field: "service",
            value: d.service.clone(),
            expected: "a lowercase alphanumeric name",
        });
    }

    let code_ok = !d.short_code.is_empty()
        && !d.short_code.starts_with('-')
        && !d.short_code.ends_with('-')
        && !d.short_code.contains("--")
        && d
            .short_code
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !code_ok {
        return Err(RegistryError::InvalidIdentifier {
            long_id: long_id.clone(),
            field: "short_code",
            value: d.short_code.clone(),
            expected: "a kebab-case identifier",
        });
    }

    Ok(())
}
