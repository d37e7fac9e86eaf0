//! # Fieldgate
//!
//! A declarative field-validation framework.
//!
//! Fieldgate associates validation rules with specific fields of specific
//! types at setup time, then evaluates those rules against live instances
//! on demand:
//!
//! - **Rule registry**: a process-wide, append-only store keyed by type
//!   identity, populated once during setup and read-only afterwards
//! - **Typed accessors**: each rule captures a closure reading its field,
//!   so evaluation never does name-based field lookup
//! - **Pluggable predicates**: built-in rule kinds plus caller-registered
//!   `Custom` predicates, resolved through an open predicate set
//! - **Permissive by default**: a type with no registered rules is
//!   vacuously valid; rule failures are `false` results, never errors
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldgate::prelude::*;
//! use std::sync::Arc;
//!
//! struct Course {
//!     title: String,
//!     price: f64,
//! }
//!
//! let registry = Arc::new(RuleRegistry::new());
//! registry
//!     .register::<Course, _>("title", RuleKind::AlphanumericString, |c| {
//!         c.title.clone().into()
//!     })?;
//! registry.register::<Course, _>("price", RuleKind::PositiveNumber, |c| c.price.into())?;
//! registry.seal();
//!
//! let engine = Engine::new(registry);
//! assert!(engine.validate(&Course { title: "Go101".into(), price: 49.0 }));
//! assert!(!engine.validate(&Course { title: "Go 101!".into(), price: 49.0 }));
//! # Ok::<(), fieldgate::FieldgateError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod engine;
pub mod errors;
pub mod observability;
pub mod registry;
pub mod rules;
pub mod testing;
pub mod value;

pub use errors::FieldgateError;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::engine::{
        evaluate, validate, Engine, NoOpSink, RuleViolation, TracingSink, ValidationReport,
        ValidationSink,
    };
    pub use crate::errors::FieldgateError;
    pub use crate::registry::{register, RegisteredField, RuleRegistry, TypeRuleSummary};
    pub use crate::rules::{
        AlphanumericString, NonEmptyString, PositiveNumber, Predicate, PredicateSet, Required,
        RuleKind,
    };
    pub use crate::value::FieldValue;
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn prelude_exposes_working_set() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(RuleKind::PositiveNumber.to_string(), "positive_number");
        assert!(FieldValue::Missing.as_f64().is_none());
    }
}
