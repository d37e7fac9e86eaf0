//! Assertion helpers for validation reports.

use crate::engine::ValidationReport;
use crate::rules::RuleKind;

/// Asserts that the report passed.
pub fn assert_passed(report: &ValidationReport) {
    assert!(
        report.passed(),
        "Expected validation to pass, got violations: {:?}",
        report.violations
    );
}

/// Asserts that the report failed.
pub fn assert_failed(report: &ValidationReport) {
    assert!(
        !report.passed(),
        "Expected validation to fail, but all {} rules passed",
        report.rules_checked
    );
}

/// Asserts that the report contains a violation for the given field and kind.
pub fn assert_violates(report: &ValidationReport, field: &str, kind: &RuleKind) {
    assert!(
        report
            .violations
            .iter()
            .any(|v| v.field == field && &v.kind == kind),
        "Expected a violation of '{}' on field '{}', got: {:?}",
        kind,
        field,
        report.violations
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::testing::{course_registry, Course};

    #[test]
    fn test_assertions_on_course_fixture() {
        let engine = Engine::new(course_registry());

        assert_passed(&engine.evaluate(&Course::new("Go101", 49.0)));

        let report = engine.evaluate(&Course::new("Go 101!", 0.0));
        assert_failed(&report);
        assert_violates(&report, "title", &RuleKind::AlphanumericString);
        assert_violates(&report, "price", &RuleKind::PositiveNumber);
    }
}
