//! Open predicate table mapping rule kinds to implementations.

use super::builtin::{AlphanumericString, NonEmptyString, PositiveNumber, Required};
use super::{Predicate, RuleKind};
use crate::errors::FieldgateError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Resolves rule kinds to predicate implementations.
///
/// The built-in kinds are installed at construction; `Custom` kinds resolve
/// only after an explicit [`PredicateSet::register`] call. Each kind maps to
/// exactly one predicate, so re-registering an occupied kind is a
/// configuration error.
pub struct PredicateSet {
    entries: RwLock<HashMap<RuleKind, Arc<dyn Predicate>>>,
}

impl PredicateSet {
    /// Creates a set with the built-in predicates installed.
    #[must_use]
    pub fn new() -> Self {
        let mut entries: HashMap<RuleKind, Arc<dyn Predicate>> = HashMap::new();
        entries.insert(RuleKind::PositiveNumber, Arc::new(PositiveNumber));
        entries.insert(RuleKind::AlphanumericString, Arc::new(AlphanumericString));
        entries.insert(RuleKind::Required, Arc::new(Required));
        entries.insert(RuleKind::NonEmptyString, Arc::new(NonEmptyString));
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Creates a set with no predicates installed, not even the built-ins.
    ///
    /// Useful for exercising the unknown-kind path in the engine.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a predicate for a rule kind.
    ///
    /// # Errors
    ///
    /// Returns [`FieldgateError::DuplicatePredicate`] when the kind already
    /// resolves to a predicate.
    pub fn register(
        &self,
        kind: RuleKind,
        predicate: Arc<dyn Predicate>,
    ) -> Result<(), FieldgateError> {
        let mut entries = self.entries.write();
        if entries.contains_key(&kind) {
            return Err(FieldgateError::duplicate_predicate(kind));
        }
        entries.insert(kind, predicate);
        Ok(())
    }

    /// Resolves a kind to its predicate, if one is registered.
    #[must_use]
    pub fn resolve(&self, kind: &RuleKind) -> Option<Arc<dyn Predicate>> {
        self.entries.read().get(kind).cloned()
    }

    /// True when the kind resolves to a predicate.
    #[must_use]
    pub fn knows(&self, kind: &RuleKind) -> bool {
        self.entries.read().contains_key(kind)
    }

    /// Returns the number of registered predicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when no predicates are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for PredicateSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PredicateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateSet")
            .field("predicate_count", &self.entries.read().len())
            .finish()
    }
}
