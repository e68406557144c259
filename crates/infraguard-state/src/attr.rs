use infraguard_types::Metadata;

/// A scalar value together with where it came from.
///
/// Construction never fails and metadata is always present. An attribute the configuration
/// never specified is built with [`Attr::default_from`] (points at the enclosing resource) or
/// via `Default` (zero value, synthetic "not found" location); both report
/// `is_explicit() == false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attr<T> {
    value: T,
    metadata: Metadata,
}

pub type BoolValue = Attr<bool>;
pub type IntValue = Attr<i64>;
pub type StringValue = Attr<String>;
pub type StringSetValue = Attr<Vec<String>>;

impl<T> Attr<T> {
    pub fn new(value: T, metadata: Metadata) -> Self {
        Self { value, metadata }
    }

    /// A default for a field the configuration omitted, located at its enclosing resource.
    pub fn default_from(value: T, parent: &Metadata) -> Self {
        Self {
            value,
            metadata: parent.defaulted(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn is_explicit(&self) -> bool {
        self.metadata.is_explicit()
    }
}

impl<T: Default> Default for Attr<T> {
    fn default() -> Self {
        Self {
            value: T::default(),
            metadata: Metadata::not_found(),
        }
    }
}

impl Attr<bool> {
    pub fn is_true(&self) -> bool {
        self.value
    }

    /// `true` for an explicit `false` and for an unset attribute defaulted to `false`.
    ///
    /// Rules that must tell the two apart check [`Attr::is_explicit`].
    pub fn is_false(&self) -> bool {
        !self.value
    }
}

impl Attr<i64> {
    pub fn equal_to(&self, other: i64) -> bool {
        self.value == other
    }

    pub fn less_than(&self, other: i64) -> bool {
        self.value < other
    }

    pub fn greater_than(&self, other: i64) -> bool {
        self.value > other
    }
}

impl Attr<String> {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn equal_to(&self, other: &str) -> bool {
        self.value == other
    }

    /// Case-insensitive comparison, for provider enums written in mixed case.
    pub fn equal_to_ignore_case(&self, other: &str) -> bool {
        self.value.eq_ignore_ascii_case(other)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.value.starts_with(prefix)
    }

    pub fn is_one_of(&self, options: &[&str]) -> bool {
        options.iter().any(|o| self.value == *o)
    }
}

impl Attr<Vec<String>> {
    pub fn contains(&self, item: &str) -> bool {
        self.value.iter().any(|v| v == item)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
