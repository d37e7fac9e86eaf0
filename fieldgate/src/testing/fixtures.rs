//! Reusable fixtures for exercising the validation framework.

use crate::registry::RuleRegistry;
use crate::rules::RuleKind;
use std::sync::Arc;

/// Sample type mirroring a course-catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    /// Course title; expected to be alphanumeric.
    pub title: String,
    /// Course price; expected to be strictly positive.
    pub price: f64,
}

impl Course {
    /// Creates a course fixture.
    #[must_use]
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            price,
        }
    }
}

/// Builds a registry with the standard course rules applied:
/// `title` must be alphanumeric and `price` strictly positive.
#[must_use]
#[allow(clippy::expect_used)]
pub fn course_registry() -> Arc<RuleRegistry> {
    let registry = Arc::new(RuleRegistry::new());
    registry
        .register::<Course, _>("title", RuleKind::AlphanumericString, |c| {
            c.title.clone().into()
        })
        .expect("built-in kind is known");
    registry
        .register::<Course, _>("price", RuleKind::PositiveNumber, |c| c.price.into())
        .expect("built-in kind is known");
    registry
}
