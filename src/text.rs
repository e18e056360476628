//! Fluent assertions over string subjects.

use crate::error::{raise_usage, UsageError};
use crate::report::FailureReport;
use crate::sink::Sink;
use crate::subject::Subject;
use regex::Regex;

/// Assertion chain over a string subject.
///
/// Every method evaluates immediately and returns the chain so further
/// checks can follow. In eager mode a failing check panics with the rendered
/// report; obtained through a soft session it records and keeps going.
///
/// # Example
///
/// ```rust,ignore
/// assert_that("Hello, World! Nice to meet you.")
///     .is_not_empty()
///     .contains("Nice")
///     .does_not_contain("Give Up")
///     .starts_with("Hello")
///     .ends_with("you.")
///     .is_equal_to("Hello, World! Nice to meet you.");
/// ```
#[derive(Debug, Clone)]
pub struct TextAssertion {
    subject: String,
    label: Option<String>,
    sink: Sink,
}

impl TextAssertion {
    pub(crate) fn new(subject: String, sink: Sink) -> Self {
        Self {
            subject,
            label: None,
            sink,
        }
    }

    /// The string under test.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Attach a label to the next check's failure report.
    ///
    /// The label applies to exactly one check and is cleared afterwards,
    /// whether that check passes or fails.
    pub fn described_as(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    // =========================================================================
    // Checks (chainable)
    // =========================================================================

    /// Check the subject equals `expected` exactly.
    pub fn is_equal_to(self, expected: impl AsRef<str>) -> Self {
        let expected = expected.as_ref();
        let passed = self.subject == expected;
        let actual = format!("{:?}", self.subject);
        self.check(
            passed,
            format!("is equal to {expected:?}"),
            format!("{expected:?}"),
            actual,
        )
    }

    /// Check the subject contains `needle` as a substring.
    pub fn contains(self, needle: &str) -> Self {
        let passed = self.subject.contains(needle);
        let actual = format!("{:?}", self.subject);
        self.check(
            passed,
            format!("contains {needle:?}"),
            format!("a string containing {needle:?}"),
            actual,
        )
    }

    /// Check the subject does not contain `needle`.
    pub fn does_not_contain(self, needle: &str) -> Self {
        let passed = !self.subject.contains(needle);
        let actual = format!("{:?}", self.subject);
        self.check(
            passed,
            format!("does not contain {needle:?}"),
            format!("a string without {needle:?}"),
            actual,
        )
    }

    /// Check the subject starts with `prefix`.
    pub fn starts_with(self, prefix: &str) -> Self {
        let passed = self.subject.starts_with(prefix);
        let actual = format!("{:?}", self.subject);
        self.check(
            passed,
            format!("starts with {prefix:?}"),
            format!("a string starting with {prefix:?}"),
            actual,
        )
    }

    /// Check the subject ends with `suffix`.
    pub fn ends_with(self, suffix: &str) -> Self {
        let passed = self.subject.ends_with(suffix);
        let actual = format!("{:?}", self.subject);
        self.check(
            passed,
            format!("ends with {suffix:?}"),
            format!("a string ending with {suffix:?}"),
            actual,
        )
    }

    /// Check the subject is the empty string.
    pub fn is_empty(self) -> Self {
        let passed = self.subject.is_empty();
        let actual = format!("{:?}", self.subject);
        self.check(passed, "is empty", "\"\"", actual)
    }

    /// Check the subject is not empty.
    pub fn is_not_empty(self) -> Self {
        let passed = !self.subject.is_empty();
        let actual = format!("{:?}", self.subject);
        self.check(passed, "is not empty", "a non-empty string", actual)
    }

    /// Check the subject matches a regex pattern.
    ///
    /// An invalid pattern is a usage error, never a deferred failure.
    pub fn matches(self, pattern: &str) -> Self {
        let re = compile(pattern);
        let passed = re.is_match(&self.subject);
        let actual = format!("{:?}", self.subject);
        self.check(
            passed,
            format!("matches /{pattern}/"),
            format!("a string matching /{pattern}/"),
            actual,
        )
    }

    /// Check the subject does not match a regex pattern.
    pub fn does_not_match(self, pattern: &str) -> Self {
        let re = compile(pattern);
        let passed = !re.is_match(&self.subject);
        let actual = format!("{:?}", self.subject);
        self.check(
            passed,
            format!("does not match /{pattern}/"),
            format!("a string not matching /{pattern}/"),
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
        // The pending label is consumed by this check, pass or fail.
        let label = self.label.take();
        if !passed {
            self.sink
                .accept(FailureReport::new(label, check, expected, actual));
        }
        self
    }
}

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => raise_usage(UsageError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        }),
    }
}

impl<'a> Subject for &'a str {
    type Assertion = TextAssertion;

    fn into_assertion(self, sink: Sink) -> TextAssertion {
        TextAssertion::new(self.to_string(), sink)
    }
}

impl Subject for String {
    type Assertion = TextAssertion;

    fn into_assertion(self, sink: Sink) -> TextAssertion {
        TextAssertion::new(self, sink)
    }
}
