//! Stateless rule evaluation over live instances.
//!
//! The engine resolves an instance's type identity, fetches the registered
//! rules for it, reads each field through the accessor captured at
//! registration, and AND-combines the predicate results. A type with no
//! registered rules is vacuously valid.

mod report;
mod sink;

pub use report::{RuleViolation, ValidationReport};
pub use sink::{NoOpSink, TracingSink, ValidationSink};

use crate::registry::{RuleRegistry, REGISTRY};
use crate::rules::PredicateSet;
use std::any::{Any, TypeId};
use std::sync::{Arc, LazyLock};
use tracing::{debug, error};

/// Evaluates registered rules against instances.
///
/// The engine holds no per-instance state; it only borrows the registry and
/// the predicate set, so it is cheap to share and safe to call from
/// multiple threads once registration is complete.
pub struct Engine {
    registry: Arc<RuleRegistry>,
    predicates: Arc<PredicateSet>,
    sink: Arc<dyn ValidationSink>,
}

impl Engine {
    /// Creates an engine over the given registry, resolving kinds through
    /// the registry's own predicate set.
    #[must_use]
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        let predicates = registry.predicates();
        Self {
            registry,
            predicates,
            sink: Arc::new(NoOpSink),
        }
    }

    /// Replaces the sink notified on rule failures.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn ValidationSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Overrides the predicate set used for resolution.
    ///
    /// Kinds the override cannot resolve are configuration errors at
    /// evaluation time: the check fails and the miss is logged, never
    /// silently passed.
    #[must_use]
    pub fn with_predicates(mut self, predicates: Arc<PredicateSet>) -> Self {
        self.predicates = predicates;
        self
    }

    /// Validates an instance against every rule registered for its type.
    ///
    /// Returns true iff all rules pass, or vacuously when the type has no
    /// registered rules. Never panics and never errors for business-rule
    /// failures.
    #[must_use]
    pub fn validate<T: Any>(&self, instance: &T) -> bool {
        self.evaluate(instance).passed()
    }

    /// Evaluates every registered rule, collecting per-rule violations.
    #[must_use]
    pub fn evaluate<T: Any>(&self, instance: &T) -> ValidationReport {
        let Some(rules) = self.registry.rules_for(TypeId::of::<T>()) else {
            debug!(
                r#type = std::any::type_name::<T>(),
                "no rules registered; vacuous pass"
            );
            return ValidationReport::vacuous(std::any::type_name::<T>());
        };

        let mut checked = 0usize;
        let mut violations = Vec::new();
        for (field, bound) in &rules.fields {
            for rule in bound {
                checked += 1;
                let passed = match (rule.accessor)(instance) {
                    Some(value) => match self.predicates.resolve(&rule.kind) {
                        Some(predicate) => predicate.check(&value),
                        None => {
                            error!(
                                r#type = rules.type_name,
                                field = %field,
                                kind = %rule.kind,
                                "no predicate registered for rule kind"
                            );
                            false
                        }
                    },
                    // Accessor registered for a different type; unreachable
                    // through keyed lookup.
                    None => {
                        error!(
                            r#type = rules.type_name,
                            field = %field,
                            "accessor could not read instance"
                        );
                        false
                    }
                };
                if !passed {
                    self.sink.rule_failed(rules.type_name, field, &rule.kind);
                    violations.push(RuleViolation {
                        field: field.clone(),
                        kind: rule.kind.clone(),
                    });
                }
            }
        }

        ValidationReport {
            type_name: rules.type_name.to_string(),
            rules_checked: checked,
            violations,
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("registry", &self.registry)
            .field("predicates", &self.predicates)
            .finish()
    }
}

/// Global engine bound to the global registry.
static ENGINE: LazyLock<Engine> = LazyLock::new(|| Engine::new(Arc::clone(&REGISTRY)));

/// Validates an instance against the global registry.
#[must_use]
pub fn validate<T: Any>(instance: &T) -> bool {
    ENGINE.validate(instance)
}

/// Evaluates an instance against the global registry, with per-rule detail.
#[must_use]
pub fn evaluate<T: Any>(instance: &T) -> ValidationReport {
    ENGINE.evaluate(instance)
}
