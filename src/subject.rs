//! Entry point for building assertion chains.
//!
//! [`assert_that`] dispatches on the subject's type through the [`Subject`]
//! trait: strings get a [`TextAssertion`](crate::TextAssertion), numbers a
//! [`NumberAssertion`](crate::NumberAssertion), record collections a
//! [`RecordsAssertion`](crate::RecordsAssertion), and captured outcomes a
//! [`CapturedAssertion`](crate::CapturedAssertion).

use crate::sink::Sink;

/// A value that can be placed under test.
///
/// Implementations pick the assertion chain type appropriate for the
/// subject. Implemented for `&str`/`String`, the primitive numeric types,
/// `Vec<R>`/`&[R]` of [`Record`](crate::Record)s, and
/// [`CapturedOutcome`](crate::CapturedOutcome).
pub trait Subject {
    /// The chain type produced for this subject.
    type Assertion;

    /// Wrap the subject in a chain wired to the given failure sink.
    fn into_assertion(self, sink: Sink) -> Self::Assertion;
}

/// Begin an eager assertion chain: the first failing check terminates the
/// scenario with a rendered [`FailureReport`](crate::FailureReport).
///
/// # Example
///
/// ```rust
/// use attest::assert_that;
///
/// assert_that("Hello, World!")
///     .is_not_empty()
///     .contains("World")
///     .starts_with("Hello");
///
/// assert_that(3.14_f64).is_positive().is_less_than(4.0);
/// ```
pub fn assert_that<S: Subject>(subject: S) -> S::Assertion {
    subject.into_assertion(Sink::raise())
}
