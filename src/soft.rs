//! Soft assertions: record failures, report them all at once.

use crate::report::{CompositeFailure, FailureReport};
use crate::sink::Sink;
use crate::subject::Subject;
use std::cell::RefCell;
use std::rc::Rc;

/// An accumulating assertion session.
///
/// Chains obtained through [`assert_that`](SoftAssertions::assert_that)
/// record failures instead of raising, so every check in the session runs.
/// [`assert_all`](SoftAssertions::assert_all) then raises a single
/// [`CompositeFailure`] if anything was recorded.
///
/// Usage errors (negative tolerance, unknown field names) are never
/// deferred; they abort immediately even inside a session.
///
/// # Example
///
/// ```rust,ignore
/// let softly = SoftAssertions::new();
/// softly.assert_that(10_i32).described_as("first").is_less_than(20);
/// softly.assert_that(20_i32).described_as("second").is_less_than(5);
/// softly.assert_that("abc").described_as("third").contains("a");
/// softly.assert_all(); // raises one failure, for "second"
/// ```
#[derive(Debug, Default)]
pub struct SoftAssertions {
    outcomes: Rc<RefCell<Vec<FailureReport>>>,
}

impl SoftAssertions {
    /// Begin a fresh session with an empty outcome list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a recording chain over `subject`.
    ///
    /// The chain's failures append to this session in invocation order.
    pub fn assert_that<S: Subject>(&self, subject: S) -> S::Assertion {
        subject.into_assertion(Sink::record(Rc::clone(&self.outcomes)))
    }

    /// Number of failures recorded so far.
    pub fn failure_count(&self) -> usize {
        self.outcomes.borrow().len()
    }

    /// Snapshot of the recorded failures, in invocation order.
    pub fn failures(&self) -> Vec<FailureReport> {
        self.outcomes.borrow().clone()
    }

    /// Raise a [`CompositeFailure`] if any check in the session failed.
    ///
    /// Drains the session: a second call finds nothing recorded and is a
    /// no-op, so finalizing twice never re-raises.
    pub fn assert_all(&self) {
        let failures: Vec<FailureReport> = self.outcomes.take();
        if failures.is_empty() {
            return;
        }
        panic!("{}", CompositeFailure::new(failures))
    }
}
