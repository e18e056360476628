//! Error capture: run an action and inspect what it raised as a value.

use crate::error::{raise_usage, UsageError};
use crate::report::FailureReport;
use crate::sink::Sink;
use crate::subject::Subject;
use regex::Regex;
use std::any::type_name;
use std::error::Error;
use std::fmt;

/// What a captured action produced: nothing, or an error value.
///
/// Capture itself never fails; assertions against `Empty` fail with a
/// dedicated "no error was raised" report.
#[derive(Debug)]
pub enum CapturedOutcome {
    /// The action returned normally.
    Empty,
    /// The action returned an error, held here for inspection.
    Raised(Box<dyn Error + 'static>),
}

impl CapturedOutcome {
    /// Whether an error was captured.
    pub fn is_raised(&self) -> bool {
        matches!(self, CapturedOutcome::Raised(_))
    }
}

/// Run `action` and capture its error, if any, as a value.
///
/// # Example
///
/// ```rust,ignore
/// let outcome = capture_error(|| "abc".parse::<i32>());
///
/// assert_that(outcome)
///     .is_instance_of::<std::num::ParseIntError>()
///     .has_message_containing("invalid digit");
/// ```
pub fn capture_error<T, E>(action: impl FnOnce() -> Result<T, E>) -> CapturedOutcome
where
    E: Into<Box<dyn Error + 'static>>,
{
    match action() {
        Ok(_) => CapturedOutcome::Empty,
        Err(e) => CapturedOutcome::Raised(e.into()),
    }
}

/// Assertion chain over a captured outcome.
///
/// Every check against [`CapturedOutcome::Empty`] fails, reporting that no
/// error was raised.
#[derive(Debug)]
pub struct CapturedAssertion {
    outcome: CapturedOutcome,
    label: Option<String>,
    sink: Sink,
}

impl CapturedAssertion {
    pub(crate) fn new(outcome: CapturedOutcome, sink: Sink) -> Self {
        Self {
            outcome,
            label: None,
            sink,
        }
    }

    /// The captured outcome under test.
    pub fn subject(&self) -> &CapturedOutcome {
        &self.outcome
    }

    /// Attach a label to the next check's failure report.
    pub fn described_as(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    // =========================================================================
    // Checks (chainable)
    // =========================================================================

    /// Check the captured error downcasts to `K`.
    pub fn is_instance_of<K: Error + 'static>(self) -> Self {
        let kind = type_name::<K>();
        let (passed, actual) = match &self.outcome {
            CapturedOutcome::Empty => (false, NO_ERROR.to_string()),
            CapturedOutcome::Raised(err) => {
                (err.downcast_ref::<K>().is_some(), render(err.as_ref()))
            }
        };
        self.check(
            passed,
            format!("raised an error of type {kind}"),
            format!("an error of type {kind}"),
            actual,
        )
    }

    /// Check the captured error's message equals `expected` exactly.
    ///
    /// Build parameterized messages with `format!` at the call site.
    pub fn has_message(self, expected: impl AsRef<str>) -> Self {
        let expected = expected.as_ref();
        let (passed, actual) = match &self.outcome {
            CapturedOutcome::Empty => (false, NO_ERROR.to_string()),
            CapturedOutcome::Raised(err) => {
                let message = err.to_string();
                (message == expected, format!("{message:?}"))
            }
        };
        self.check(
            passed,
            format!("has message {expected:?}"),
            format!("{expected:?}"),
            actual,
        )
    }

    /// Check the captured error's message contains `substr`.
    pub fn has_message_containing(self, substr: &str) -> Self {
        let (passed, actual) = match &self.outcome {
            CapturedOutcome::Empty => (false, NO_ERROR.to_string()),
            CapturedOutcome::Raised(err) => {
                let message = err.to_string();
                (message.contains(substr), format!("{message:?}"))
            }
        };
        self.check(
            passed,
            format!("has message containing {substr:?}"),
            format!("a message containing {substr:?}"),
            actual,
        )
    }

    /// Check the captured error's message matches a regex pattern.
    pub fn has_message_matching(self, pattern: &str) -> Self {
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(e) => raise_usage(UsageError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }),
        };
        let (passed, actual) = match &self.outcome {
            CapturedOutcome::Empty => (false, NO_ERROR.to_string()),
            CapturedOutcome::Raised(err) => {
                let message = err.to_string();
                (re.is_match(&message), format!("{message:?}"))
            }
        };
        self.check(
            passed,
            format!("has message matching /{pattern}/"),
            format!("a message matching /{pattern}/"),
            actual,
        )
    }

    /// Check the captured error has no underlying cause.
    pub fn with_no_cause(self) -> Self {
        let (passed, actual) = match &self.outcome {
            CapturedOutcome::Empty => (false, NO_ERROR.to_string()),
            CapturedOutcome::Raised(err) => match err.source() {
                None => (true, render(err.as_ref())),
                Some(cause) => (false, format!("an error caused by: {cause}")),
            },
        };
        self.check(
            passed,
            "has no cause",
            "an error without a cause",
            actual,
        )
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn check(
        mut self,
        passed: bool,
        check: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        let label = self.label.take();
        if !passed {
            self.sink
                .accept(FailureReport::new(label, check, expected, actual));
        }
        self
    }
}

const NO_ERROR: &str = "no error was raised";

fn render(err: &(dyn Error + 'static)) -> String {
    format!("{err:?}")
}

impl fmt::Display for CapturedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapturedOutcome::Empty => write!(f, "{NO_ERROR}"),
            CapturedOutcome::Raised(err) => write!(f, "raised: {err}"),
        }
    }
}

impl Subject for CapturedOutcome {
    type Assertion = CapturedAssertion;

    fn into_assertion(self, sink: Sink) -> CapturedAssertion {
        CapturedAssertion::new(self, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_that;

    #[derive(Debug, thiserror::Error)]
    #[error("cannot divide by zero")]
    struct ArithmeticError;

    #[derive(Debug, thiserror::Error)]
    #[error("calculation failed")]
    struct WrappedError(#[source] ArithmeticError);

    fn divide(a: i32, b: i32) -> Result<i32, ArithmeticError> {
        if b == 0 {
            return Err(ArithmeticError);
        }
        Ok(a / b)
    }

    #[test]
    fn captures_raised_error() {
        let outcome = capture_error(|| divide(1, 0));
        assert!(outcome.is_raised());

        assert_that(outcome)
            .is_instance_of::<ArithmeticError>()
            .has_message("cannot divide by zero")
            .has_message_containing("divide")
            .has_message_matching(r"divide by \w+")
            .with_no_cause();
    }

    #[test]
    fn capture_of_a_normal_return_is_empty() {
        let outcome = capture_error(|| divide(4, 2));
        assert!(!outcome.is_raised());
    }

    #[test]
    #[should_panic(expected = "no error was raised")]
    fn instance_check_against_empty_fails() {
        let outcome = capture_error(|| divide(4, 2));
        assert_that(outcome).is_instance_of::<ArithmeticError>();
    }

    #[test]
    #[should_panic(expected = "an error of type")]
    fn wrong_error_type_fails() {
        let outcome = capture_error(|| divide(1, 0));
        assert_that(outcome).is_instance_of::<WrappedError>();
    }

    #[test]
    #[should_panic(expected = "has no cause")]
    fn cause_chain_is_detected() {
        let outcome = capture_error(|| -> Result<(), WrappedError> {
            Err(WrappedError(ArithmeticError))
        });
        assert_that(outcome).with_no_cause();
    }

    #[test]
    fn boxed_error_subjects_downcast() {
        let outcome = capture_error(|| -> Result<(), Box<dyn std::error::Error>> {
            Err(Box::new(ArithmeticError))
        });
        assert_that(outcome).is_instance_of::<ArithmeticError>();
    }

    #[test]
    fn formatted_message_expectation() {
        let outcome = capture_error(|| divide(1, 0));
        assert_that(outcome).has_message(format!("cannot divide by {}", "zero"));
    }
}
