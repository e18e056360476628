//! Fluent assertions over numeric subjects.

use crate::compare::{self, Number, Tolerance};
use crate::error::raise_usage;
use crate::report::FailureReport;
use crate::sink::Sink;
use crate::subject::Subject;
use std::cmp::Ordering;

/// Assertion chain over a numeric subject.
///
/// Ordering checks go through the comparison kernel, so an unordered operand
/// (NaN) surfaces as a usage error rather than a silent failure.
///
/// # Example
///
/// ```rust,ignore
/// assert_that(3.14)
///     .is_positive()
///     .is_greater_than(3.0)
///     .is_less_than(4.0)
///     .is_close_to(3.1, within(0.1))
///     .is_equal_to(3.14);
/// ```
#[derive(Debug, Clone)]
pub struct NumberAssertion<T: Number> {
    subject: T,
    label: Option<String>,
    sink: Sink,
}

impl<T: Number> NumberAssertion<T> {
    pub(crate) fn new(subject: T, sink: Sink) -> Self {
        Self {
            subject,
            label: None,
            sink,
        }
    }

    /// The number under test.
    pub fn subject(&self) -> T {
        self.subject
    }

    /// Attach a label to the next check's failure report.
    ///
    /// Consumed by exactly one check, then cleared.
    pub fn described_as(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    // =========================================================================
    // Checks (chainable)
    // =========================================================================

    /// Check exact equality with `expected`.
    pub fn is_equal_to(self, expected: T) -> Self {
        let passed = self.ordering_to(expected) == Ordering::Equal;
        let actual = format!("{:?}", self.subject);
        self.check(
            passed,
            format!("is equal to {expected:?}"),
            format!("{expected:?}"),
            actual,
        )
    }

    /// Check equality within a tolerance: `|subject - expected| <= tolerance`.
    ///
    /// A negative tolerance is a usage error and aborts even in soft mode.
    pub fn is_close_to(self, expected: T, tolerance: Tolerance) -> Self {
        let passed =
            match compare::approx_eq(self.subject.as_f64(), expected.as_f64(), tolerance.0) {
                Ok(passed) => passed,
                Err(e) => raise_usage(e),
            };
        let actual = format!("{:?}", self.subject);
        self.check(
            passed,
            format!("is within {} of {expected:?}", tolerance.0),
            format!("{expected:?} within tolerance {}", tolerance.0),
            actual,
        )
    }

    /// Check the subject is strictly greater than `bound`.
    pub fn is_greater_than(self, bound: T) -> Self {
        let passed = self.ordering_to(bound) == Ordering::Greater;
        let actual = format!("{:?}", self.subject);
        self.check(
            passed,
            format!("is greater than {bound:?}"),
            format!("a value > {bound:?}"),
            actual,
        )
    }

    /// Check the subject is strictly less than `bound`.
    pub fn is_less_than(self, bound: T) -> Self {
        let passed = self.ordering_to(bound) == Ordering::Less;
        let actual = format!("{:?}", self.subject);
        self.check(
            passed,
            format!("is less than {bound:?}"),
            format!("a value < {bound:?}"),
            actual,
        )
    }

    /// Check the subject is strictly greater than zero.
    pub fn is_positive(self) -> Self {
        let passed = self.ordering_to(T::ZERO) == Ordering::Greater;
        let actual = format!("{:?}", self.subject);
        self.check(passed, "is positive", "a value > 0", actual)
    }

    /// Check the subject is strictly less than zero.
    pub fn is_negative(self) -> Self {
        let passed = self.ordering_to(T::ZERO) == Ordering::Less;
        let actual = format!("{:?}", self.subject);
        self.check(passed, "is negative", "a value < 0", actual)
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn ordering_to(&self, other: T) -> Ordering {
        match compare::order(&self.subject, &other) {
            Ok(ordering) => ordering,
            Err(e) => raise_usage(e),
        }
    }

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

macro_rules! impl_number_subject {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Subject for $ty {
                type Assertion = NumberAssertion<$ty>;

                fn into_assertion(self, sink: Sink) -> NumberAssertion<$ty> {
                    NumberAssertion::new(self, sink)
                }
            }
        )*
    };
}

impl_number_subject!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(test)]
mod tests {
    use crate::{assert_that, within};

    #[test]
    fn full_numeric_chain() {
        assert_that(3.14_f64)
            .is_positive()
            .is_greater_than(3.0)
            .is_less_than(4.0)
            .is_close_to(3.0, within(1.0))
            .is_close_to(3.1, within(0.1))
            .is_close_to(3.14, within(3.14))
            .is_equal_to(3.14);
    }

    #[test]
    fn integer_subjects() {
        assert_that(10_i32).is_positive().is_less_than(20);
        assert_that(-5_i32).is_negative();
        assert_that(7u32).is_greater_than(3);
    }

    #[test]
    fn chain_preserves_subject() {
        let chain = assert_that(42_i32).is_positive();
        assert_eq!(chain.subject(), 42);
    }

    #[test]
    #[should_panic(expected = "assertion failed: is less than 5")]
    fn less_than_failure_panics() {
        assert_that(20_i32).is_less_than(5);
    }

    #[test]
    #[should_panic(expected = "expected: 100")]
    fn equality_failure_shows_expected_and_actual() {
        assert_that(33_i32).described_as("check1 Hans's age").is_equal_to(100);
    }

    #[test]
    #[should_panic(expected = "invalid assertion: tolerance must be non-negative")]
    fn negative_tolerance_is_usage_error() {
        assert_that(1.0_f64).is_close_to(1.0, within(-0.5));
    }

    #[test]
    #[should_panic(expected = "invalid assertion: values cannot be ordered")]
    fn nan_subject_is_not_comparable() {
        assert_that(f64::NAN).is_greater_than(1.0);
    }

    #[test]
    fn close_to_boundary_is_inclusive() {
        assert_that(3.5_f64).is_close_to(3.0, within(0.5));
    }
}
