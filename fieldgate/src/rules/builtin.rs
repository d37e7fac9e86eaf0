//! Built-in predicate implementations.

use super::Predicate;
use crate::value::FieldValue;
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z0-9]+$").expect("pattern is valid"));

/// Numeric value strictly greater than zero. Zero and negatives fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveNumber;

impl Predicate for PositiveNumber {
    fn check(&self, value: &FieldValue) -> bool {
        value.as_f64().is_some_and(|v| v > 0.0)
    }
}

/// String consisting entirely of ASCII letters and digits.
///
/// The empty string fails: there is no character to match. Non-string
/// values fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphanumericString;

impl Predicate for AlphanumericString {
    fn check(&self, value: &FieldValue) -> bool {
        value.as_str().is_some_and(|s| ALPHANUMERIC.is_match(s))
    }
}

/// Value is present, whatever it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Predicate for Required {
    fn check(&self, value: &FieldValue) -> bool {
        !value.is_missing()
    }
}

/// String with at least one non-whitespace character.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmptyString;

impl Predicate for NonEmptyString {
    fn check(&self, value: &FieldValue) -> bool {
        value.as_str().is_some_and(|s| !s.trim().is_empty())
    }
}
