//! Evaluation outcome reporting.

use crate::rules::RuleKind;
use serde::Serialize;

/// A single failed (field, rule) evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleViolation {
    /// The field whose value failed the rule.
    pub field: String,
    /// The rule kind that failed.
    pub kind: RuleKind,
}

/// Outcome of evaluating every registered rule against one instance.
///
/// The boolean contract of [`crate::engine::Engine::validate`] is
/// `violations.is_empty()`; the report adds per-rule detail for callers
/// that want diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Name of the validated type.
    pub type_name: String,
    /// Total number of (field, rule) evaluations performed.
    pub rules_checked: usize,
    /// The evaluations that failed.
    pub violations: Vec<RuleViolation>,
}

impl ValidationReport {
    /// Creates a report for a type with no registered rules.
    #[must_use]
    pub fn vacuous(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            rules_checked: 0,
            violations: Vec::new(),
        }
    }

    /// True when every evaluated rule passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// True when the pass carries no information because nothing was
    /// registered for the type.
    #[must_use]
    pub fn is_vacuous(&self) -> bool {
        self.rules_checked == 0
    }

    /// Human readable summary string.
    #[must_use]
    pub fn summary(&self) -> String {
        let status = if self.passed() { "valid" } else { "invalid" };
        format!(
            "Validation of {}: {} ({} rules checked, {} violations)",
            self.type_name,
            status,
            self.rules_checked,
            self.violations.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vacuous_report_passes() {
        let report = ValidationReport::vacuous("demo::Thing");
        assert!(report.passed());
        assert!(report.is_vacuous());
    }

    #[test]
    fn test_summary_mentions_status() {
        let mut report = ValidationReport::vacuous("demo::Thing");
        assert!(report.summary().contains("valid"));

        report.rules_checked = 2;
        report.violations.push(RuleViolation {
            field: "title".to_string(),
            kind: RuleKind::AlphanumericString,
        });
        assert!(report.summary().contains("invalid"));
        assert!(report.summary().contains("1 violations"));
    }
}
