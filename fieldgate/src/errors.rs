//! Error types for the fieldgate framework.
//!
//! Only structural misuse is an error: unknown rule kinds, duplicate
//! predicate registrations, and writes to a sealed registry. A field value
//! failing a rule is a normal `false` result, never an `Err`.

use crate::rules::RuleKind;
use thiserror::Error;

/// Configuration errors raised at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldgateError {
    /// No predicate is registered for the given rule kind.
    #[error("no predicate registered for rule kind '{kind}'")]
    UnknownRuleKind {
        /// The unresolved rule kind.
        kind: RuleKind,
    },

    /// A predicate is already registered for the given rule kind.
    #[error("a predicate for rule kind '{kind}' is already registered")]
    DuplicatePredicate {
        /// The conflicting rule kind.
        kind: RuleKind,
    },

    /// The registry has been sealed; the setup phase is over.
    #[error("registry is sealed; rules can only be registered during setup")]
    RegistrySealed,
}

impl FieldgateError {
    /// Creates an unknown-rule-kind error.
    #[must_use]
    pub fn unknown_kind(kind: RuleKind) -> Self {
        Self::UnknownRuleKind { kind }
    }

    /// Creates a duplicate-predicate error.
    #[must_use]
    pub fn duplicate_predicate(kind: RuleKind) -> Self {
        Self::DuplicatePredicate { kind }
    }
}
