use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Cloud or platform provider a rule belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Aws,
    Azure,
    Google,
    Kubernetes,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::Aws,
        Provider::Azure,
        Provider::Google,
        Provider::Kubernetes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Aws => "aws",
            Provider::Azure => "azure",
            Provider::Google => "google",
            Provider::Kubernetes => "kubernetes",
        }
    }

    pub fn from_name(name: &str) -> Option<Provider> {
        Provider::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule severity. Ordering follows impact: `Low < Medium < High < Critical`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Globally unique rule identifier: `provider/service/short-code`.
///
/// This is the join key for deduplication, filtering and reporting, so its ordering is the
/// enumeration order of the registry.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct LongId(String);

impl LongId {
    pub fn new(provider: Provider, service: &str, short_code: &str) -> Self {
        Self(format!("{}/{}/{}", provider.as_str(), service, short_code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the identifier back into `(provider, service, short_code)`.
    pub fn parts(&self) -> (&str, &str, &str) {
        let mut it = self.0.splitn(3, '/');
        let provider = it.next().unwrap_or_default();
        let service = it.next().unwrap_or_default();
        let short_code = it.next().unwrap_or_default();
        (provider, service, short_code)
    }
}

impl fmt::Display for LongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LongId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LongId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LongId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LongId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
