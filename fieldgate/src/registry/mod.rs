//! Process-wide rule registry.
//!
//! The registry maps a type's identity to the rules registered against its
//! fields. It is populated during a setup phase (conventionally module or
//! application initialization), optionally sealed once setup ends, and read
//! by the engine from then on. Entries are append-only; nothing is ever
//! removed in normal operation.
//!
//! Each registration captures a typed accessor alongside the rule kind, so
//! the engine never performs dynamic-name field lookup at evaluation time:
//! a field that does not exist on the type is unrepresentable.

use crate::errors::FieldgateError;
use crate::rules::{PredicateSet, RuleKind};
use crate::value::FieldValue;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, LazyLock};
use tracing::debug;

/// Type-erased accessor reading one field from an instance.
///
/// Returns `None` only when the instance is not of the type the accessor
/// was registered for; keyed lookup by `TypeId` makes that unreachable in
/// normal use.
pub(crate) type ErasedAccessor = Arc<dyn Fn(&dyn Any) -> Option<FieldValue> + Send + Sync>;

/// A rule kind bound to the accessor captured at registration.
#[derive(Clone)]
pub(crate) struct BoundRule {
    pub(crate) kind: RuleKind,
    pub(crate) accessor: ErasedAccessor,
}

/// All rules registered against one type.
#[derive(Clone)]
pub(crate) struct TypeRules {
    pub(crate) type_name: &'static str,
    pub(crate) registered_at: DateTime<Utc>,
    pub(crate) fields: HashMap<String, Vec<BoundRule>>,
}

impl TypeRules {
    fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            registered_at: Utc::now(),
            fields: HashMap::new(),
        }
    }
}

/// Read-only summary of the rule kinds registered for one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeRuleSummary {
    /// Name of the registered type.
    pub type_name: String,
    /// Rule kinds per field, in registration order within each field.
    pub fields: HashMap<String, Vec<RuleKind>>,
}

/// One registered field as reported by [`RuleRegistry::list`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredField {
    /// Name of the registered type.
    pub type_name: String,
    /// The field the rules apply to.
    pub field: String,
    /// Rule kinds in registration order.
    pub kinds: Vec<RuleKind>,
    /// When the type's first rule was registered.
    pub registered_at: DateTime<Utc>,
}

/// In-memory registry of per-field validation rules, keyed by type.
pub struct RuleRegistry {
    predicates: Arc<PredicateSet>,
    entries: RwLock<HashMap<TypeId, TypeRules>>,
    sealed: AtomicBool,
}

impl RuleRegistry {
    /// Creates an empty registry with the built-in predicate set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_predicates(Arc::new(PredicateSet::new()))
    }

    /// Creates an empty registry resolving kinds through the given set.
    #[must_use]
    pub fn with_predicates(predicates: Arc<PredicateSet>) -> Self {
        Self {
            predicates,
            entries: RwLock::new(HashMap::new()),
            sealed: AtomicBool::new(false),
        }
    }

    /// Returns the predicate set this registry resolves kinds against.
    #[must_use]
    pub fn predicates(&self) -> Arc<PredicateSet> {
        Arc::clone(&self.predicates)
    }

    /// Registers a rule for a field of `T`.
    ///
    /// The accessor is captured now and invoked at validation time to read
    /// the field's current value. Repeated registrations for the same
    /// `(type, field)` pair append; duplicates are not deduplicated, and
    /// registration order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`FieldgateError::UnknownRuleKind`] when the kind has no
    /// predicate in this registry's set, and
    /// [`FieldgateError::RegistrySealed`] after [`RuleRegistry::seal`].
    pub fn register<T, F>(
        &self,
        field: impl Into<String>,
        kind: RuleKind,
        accessor: F,
    ) -> Result<(), FieldgateError>
    where
        T: Any,
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        if self.sealed.load(Ordering::Acquire) {
            return Err(FieldgateError::RegistrySealed);
        }
        if !self.predicates.knows(&kind) {
            return Err(FieldgateError::unknown_kind(kind));
        }

        let field = field.into();
        let erased: ErasedAccessor =
            Arc::new(move |instance: &dyn Any| instance.downcast_ref::<T>().map(&accessor));

        let mut entries = self.entries.write();
        let entry = entries
            .entry(TypeId::of::<T>())
            .or_insert_with(|| TypeRules::new(std::any::type_name::<T>()));
        debug!(
            r#type = entry.type_name,
            field = %field,
            kind = %kind,
            "registered validation rule"
        );
        entry
            .fields
            .entry(field)
            .or_default()
            .push(BoundRule { kind, accessor: erased });
        Ok(())
    }

    /// Ends the setup phase; later registrations fail.
    ///
    /// Sealing is optional: validation works against an unsealed registry.
    /// It exists so callers can make the "writes finish before reads begin"
    /// discipline explicit and testable.
    pub fn seal(&self) {
        self.sealed.store(true, Ordering::Release);
        debug!("rule registry sealed");
    }

    /// True once [`RuleRegistry::seal`] has been called.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::Acquire)
    }

    /// Returns the registered rule kinds for `T`, or `None` when `T` was
    /// never registered. Absence is an expected outcome, not an error.
    #[must_use]
    pub fn lookup<T: Any>(&self) -> Option<TypeRuleSummary> {
        let entries = self.entries.read();
        let rules = entries.get(&TypeId::of::<T>())?;
        Some(TypeRuleSummary {
            type_name: rules.type_name.to_string(),
            fields: rules
                .fields
                .iter()
                .map(|(field, bound)| {
                    (
                        field.clone(),
                        bound.iter().map(|rule| rule.kind.clone()).collect(),
                    )
                })
                .collect(),
        })
    }

    /// Snapshot of the bound rules for a type, for the engine.
    pub(crate) fn rules_for(&self, type_id: TypeId) -> Option<TypeRules> {
        self.entries.read().get(&type_id).cloned()
    }

    /// Returns every registered field, sorted by type name then field name.
    #[must_use]
    pub fn list(&self) -> Vec<RegisteredField> {
        let entries = self.entries.read();
        let mut result: Vec<RegisteredField> = entries
            .values()
            .flat_map(|rules| {
                rules.fields.iter().map(|(field, bound)| RegisteredField {
                    type_name: rules.type_name.to_string(),
                    field: field.clone(),
                    kinds: bound.iter().map(|rule| rule.kind.clone()).collect(),
                    registered_at: rules.registered_at,
                })
            })
            .collect();
        result.sort_by(|a, b| (&a.type_name, &a.field).cmp(&(&b.type_name, &b.field)));
        result
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when no type has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Removes all entries and reopens the registry (primarily for tests).
    pub fn clear(&self) {
        self.entries.write().clear();
        self.sealed.store(false, Ordering::Release);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("type_count", &self.entries.read().len())
            .field("sealed", &self.is_sealed())
            .finish()
    }
}

/// Global rule registry backing the free-function API.
pub static REGISTRY: LazyLock<Arc<RuleRegistry>> =
    LazyLock::new(|| Arc::new(RuleRegistry::new()));

/// Registers a rule in the global registry.
///
/// # Errors
///
/// Propagates the same configuration errors as [`RuleRegistry::register`].
pub fn register<T, F>(
    field: impl Into<String>,
    kind: RuleKind,
    accessor: F,
) -> Result<(), FieldgateError>
where
    T: Any,
    F: Fn(&T) -> FieldValue + Send + Sync + 'static,
{
    REGISTRY.register::<T, F>(field, kind, accessor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct Course {
        title: String,
        price: f64,
    }

    #[derive(Debug)]
    struct Unregistered;

    fn course_rules(registry: &RuleRegistry) {
        registry
            .register::<Course, _>("title", RuleKind::AlphanumericString, |c| {
                c.title.clone().into()
            })
            .unwrap();
        registry
            .register::<Course, _>("price", RuleKind::PositiveNumber, |c| c.price.into())
            .unwrap();
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = RuleRegistry::new();
        course_rules(&registry);

        let summary = registry.lookup::<Course>().unwrap();
        assert!(summary.type_name.ends_with("Course"));
        assert_eq!(
            summary.fields["title"],
            vec![RuleKind::AlphanumericString]
        );
        assert_eq!(summary.fields["price"], vec![RuleKind::PositiveNumber]);
    }

    #[test]
    fn test_lookup_unregistered_type_is_absent() {
        let registry = RuleRegistry::new();
        course_rules(&registry);
        assert!(registry.lookup::<Unregistered>().is_none());
    }

    #[test]
    fn test_repeated_registration_appends_without_dedup() {
        let registry = RuleRegistry::new();
        registry
            .register::<Course, _>("title", RuleKind::AlphanumericString, |c| {
                c.title.clone().into()
            })
            .unwrap();
        registry
            .register::<Course, _>("title", RuleKind::AlphanumericString, |c| {
                c.title.clone().into()
            })
            .unwrap();
        registry
            .register::<Course, _>("title", RuleKind::NonEmptyString, |c| {
                c.title.clone().into()
            })
            .unwrap();

        let summary = registry.lookup::<Course>().unwrap();
        assert_eq!(
            summary.fields["title"],
            vec![
                RuleKind::AlphanumericString,
                RuleKind::AlphanumericString,
                RuleKind::NonEmptyString,
            ]
        );
    }

    #[test]
    fn test_unknown_kind_fails_at_registration() {
        let registry = RuleRegistry::new();
        let result = registry.register::<Course, _>("title", RuleKind::custom("nope"), |c| {
            c.title.clone().into()
        });
        assert_eq!(
            result,
            Err(FieldgateError::unknown_kind(RuleKind::custom("nope")))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_seal_rejects_further_registration() {
        let registry = RuleRegistry::new();
        course_rules(&registry);
        registry.seal();
        assert!(registry.is_sealed());

        let result = registry
            .register::<Course, _>("price", RuleKind::Required, |c| c.price.into());
        assert_eq!(result, Err(FieldgateError::RegistrySealed));

        // Sealed registries still serve lookups.
        assert!(registry.lookup::<Course>().is_some());
    }

    #[test]
    fn test_list_is_sorted_and_complete() {
        let registry = RuleRegistry::new();
        course_rules(&registry);

        let listed = registry.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].field, "price");
        assert_eq!(listed[1].field, "title");
        assert!(listed.iter().all(|f| f.type_name.ends_with("Course")));
    }

    #[test]
    fn test_clear_reopens_registry() {
        let registry = RuleRegistry::new();
        course_rules(&registry);
        registry.seal();

        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.is_sealed());
        course_rules(&registry);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_custom_kind_registrable_after_predicate() {
        let registry = RuleRegistry::new();
        registry
            .predicates()
            .register(
                RuleKind::custom("even"),
                Arc::new(|value: &FieldValue| value.as_f64().is_some_and(|v| v % 2.0 == 0.0)),
            )
            .unwrap();

        registry
            .register::<Course, _>("price", RuleKind::custom("even"), |c| c.price.into())
            .unwrap();
        let summary = registry.lookup::<Course>().unwrap();
        assert_eq!(summary.fields["price"], vec![RuleKind::custom("even")]);
    }

    #[test]
    fn test_global_registry_accessible() {
        // Keyed by TypeId, so a test-local type cannot collide with other
        // tests sharing the global registry.
        #[derive(Debug)]
        struct GlobalProbe {
            name: String,
        }

        register::<GlobalProbe, _>("name", RuleKind::NonEmptyString, |p| {
            p.name.clone().into()
        })
        .unwrap();

        let summary = REGISTRY.lookup::<GlobalProbe>().unwrap();
        assert_eq!(summary.fields["name"], vec![RuleKind::NonEmptyString]);
    }
}
