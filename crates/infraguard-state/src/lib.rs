//! The state tree every rule reads.
//!
//! Input: built by external adapters (config-language loaders, template loaders, ...).
//! Output: an immutable snapshot of `provider -> service -> resource -> attribute`.
//!
//! Every scalar is an [`Attr`], so a missing field still yields a well-formed value with
//! metadata and rule code never needs a null check.

#![forbid(unsafe_code)]

pub mod attr;
pub mod aws;
pub mod azure;
pub mod service;

pub use attr::{Attr, BoolValue, IntValue, StringSetValue, StringValue};
pub use infraguard_types::{Metadata, Range};
pub use service::{Service, ServiceKey};

use std::borrow::Cow;

/// Root aggregate, one per scan.
///
/// Read-only for the duration of evaluation and shared across rule evaluations by reference.
#[derive(Clone, Debug, Default)]
pub struct State {
    pub aws: aws::Aws,
    pub azure: azure::Azure,
}

/// Returns the first item matching `pred`, or a zero-value resource when there is none.
pub(crate) fn find_or_default<'a, R, F>(items: &'a [R], pred: F) -> Cow<'a, R>
where
    R: Clone + Default,
    F: Fn(&R) -> bool,
{
    match items.iter().find(|item| pred(item)) {
        Some(item) => Cow::Borrowed(item),
        None => Cow::Owned(R::default()),
    }
}
