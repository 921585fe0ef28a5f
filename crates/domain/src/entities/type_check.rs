//! Outcome of the external type-check run

use serde::{Deserialize, Serialize};

/// Email subject used when the type check passed
pub const SUBJECT_CHECK_PASSED: &str = "✅ Type check passed";

/// Email subject used when the type check failed
pub const SUBJECT_CHECK_FAILED: &str = "❌ Type check failed - fixes required";

/// Result of running the external type checker
///
/// `passed` mirrors the checker's exit status and is the sole determinant
/// of the notify pipeline's exit code and of the email subject line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCheckOutcome {
    /// Whether the checker exited with status zero
    pub passed: bool,
    /// Captured diagnostic output (or the invocation error text)
    pub report: String,
}

impl TypeCheckOutcome {
    /// Outcome for a clean run
    pub fn passed(report: impl Into<String>) -> Self {
        Self {
            passed: true,
            report: report.into(),
        }
    }

    /// Outcome for a failed run or a checker that could not be invoked
    pub fn failed(report: impl Into<String>) -> Self {
        Self {
            passed: false,
            report: report.into(),
        }
    }

    /// Subject line for the notification email
    pub const fn subject_line(&self) -> &'static str {
        if self.passed {
            SUBJECT_CHECK_PASSED
        } else {
            SUBJECT_CHECK_FAILED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passed_outcome_uses_success_subject() {
        let outcome = TypeCheckOutcome::passed("Success: no issues found");
        assert!(outcome.passed);
        assert_eq!(outcome.subject_line(), SUBJECT_CHECK_PASSED);
    }

    #[test]
    fn failed_outcome_uses_failure_subject() {
        let outcome = TypeCheckOutcome::failed("app.py:3: error: bad type");
        assert!(!outcome.passed);
        assert_eq!(outcome.subject_line(), SUBJECT_CHECK_FAILED);
    }

    #[test]
    fn subject_ignores_report_contents() {
        // The flag alone decides, never the text
        let odd = TypeCheckOutcome::passed("error: this is only informational");
        assert_eq!(odd.subject_line(), SUBJECT_CHECK_PASSED);

        let empty = TypeCheckOutcome::failed("");
        assert_eq!(empty.subject_line(), SUBJECT_CHECK_FAILED);
    }
}
