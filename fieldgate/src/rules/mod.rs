//! Rule kinds and the predicate contract.
//!
//! A [`RuleKind`] is a tag naming a validation predicate. The mapping from
//! tag to implementation lives in a [`PredicateSet`], which ships with the
//! built-in kinds resolvable out of the box and is open to caller-supplied
//! `Custom` predicates.

mod builtin;
mod predicates;

pub use builtin::{AlphanumericString, NonEmptyString, PositiveNumber, Required};
pub use predicates::PredicateSet;

use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag identifying a validation predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Value is numeric and strictly greater than zero.
    PositiveNumber,
    /// Value is a non-empty ASCII-alphanumeric string.
    AlphanumericString,
    /// Value is present (not `Missing`).
    Required,
    /// Value is a string with non-whitespace content.
    NonEmptyString,
    /// A caller-registered predicate, resolved by name.
    Custom(String),
}

impl RuleKind {
    /// Creates a custom rule kind with the given name.
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositiveNumber => write!(f, "positive_number"),
            Self::AlphanumericString => write!(f, "alphanumeric_string"),
            Self::Required => write!(f, "required"),
            Self::NonEmptyString => write!(f, "non_empty_string"),
            Self::Custom(name) => write!(f, "custom:{name}"),
        }
    }
}

/// A validation predicate evaluated against a single field value.
///
/// Predicates are pure and side-effect-free; evaluation order across rules
/// is not observable.
pub trait Predicate: Send + Sync {
    /// Returns true when the value satisfies the predicate.
    fn check(&self, value: &FieldValue) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&FieldValue) -> bool + Send + Sync,
{
    fn check(&self, value: &FieldValue) -> bool {
        self(value)
    }
}
