//! Sinks notified of rule failures during evaluation.

use crate::rules::RuleKind;
use tracing::debug;

/// Receives a notification for every rule that fails.
///
/// Sinks must never panic; evaluation treats them as fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait ValidationSink: Send + Sync {
    /// Called once per failed (field, rule) evaluation.
    fn rule_failed(&self, type_name: &str, field: &str, kind: &RuleKind);
}

/// Discards all notifications. Default when no sink is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl ValidationSink for NoOpSink {
    fn rule_failed(&self, _type_name: &str, _field: &str, _kind: &RuleKind) {
        // Intentionally empty.
    }
}

/// Logs failures through the tracing framework.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ValidationSink for TracingSink {
    fn rule_failed(&self, type_name: &str, field: &str, kind: &RuleKind) {
        debug!(
            r#type = %type_name,
            field = %field,
            kind = %kind,
            "validation rule failed"
        );
    }
}
