//! Structured failure reports.
//!
//! Every failing assertion produces a [`FailureReport`]: what was checked,
//! what was expected, and what the subject actually was, plus the optional
//! label attached via `described_as`. Reports render deterministically so a
//! harness can log them verbatim; they also serialize to JSON for
//! machine-readable output.

use serde::Serialize;
use std::fmt;

/// Description of a single failed assertion.
///
/// Immutable once created: a report is either raised immediately (eager
/// mode) or appended to a soft session's outcome list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    /// Label attached with `described_as`, if one was pending.
    pub label: Option<String>,
    /// Human-readable description of the check that failed.
    pub check: String,
    /// Rendered expected value.
    pub expected: String,
    /// Rendered actual value.
    pub actual: String,
}

impl FailureReport {
    pub(crate) fn new(
        label: Option<String>,
        check: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            label,
            check: check.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => writeln!(f, "[{}] {}", label, self.check)?,
            None => writeln!(f, "{}", self.check)?,
        }
        writeln!(f, "  expected: {}", self.expected)?;
        write!(f, "  actual: {}", self.actual)
    }
}

/// Aggregate of every failure recorded by a soft assertion session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositeFailure {
    /// Recorded failures, in assertion invocation order.
    pub failures: Vec<FailureReport>,
}

impl CompositeFailure {
    pub(crate) fn new(failures: Vec<FailureReport>) -> Self {
        Self { failures }
    }
}

impl fmt::Display for CompositeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} soft assertion(s) failed:", self.failures.len())?;
        for (i, report) in self.failures.iter().enumerate() {
            write!(f, "\n{}) {}\n", i + 1, report)?;
        }
        Ok(())
    }
}
