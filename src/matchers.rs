//! Field matcher values for filtering record collections.
//!
//! `filtered_on_field` takes an explicit [`FieldMatcher`] value instead of a
//! parsed expression string. Matchers evaluate against the extracted field
//! value and report type misuse (a tolerance matcher on a string field, a
//! substring matcher on a number) as usage errors.

use crate::compare::{approx_eq, value_contains, value_eq};
use crate::error::UsageError;
use glob::Pattern;
use regex::Regex;
use serde_json::Value;
use std::fmt;

/// Predicate over a single record field value.
///
/// Built with the constructor functions in this module:
///
/// ```rust
/// use attest::matchers::{equal_to, not_equal, none_of};
/// use serde_json::json;
///
/// assert!(equal_to(30).matches(&json!(30)).unwrap());
/// assert!(not_equal(30).matches(&json!(10)).unwrap());
/// assert!(none_of([30]).matches(&json!(20)).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FieldMatcher {
    /// Field equals the value (numbers compare numerically).
    EqualTo(Value),
    /// Field differs from the value.
    NotEqualTo(Value),
    /// Field equals one of the values.
    OneOf(Vec<Value>),
    /// Field equals none of the values.
    NoneOf(Vec<Value>),
    /// Numeric field within `tolerance` of `expected`.
    CloseTo { expected: f64, tolerance: f64 },
    /// String field contains the substring (array field contains the value).
    Containing(Value),
    /// String field matches a pattern: glob first, then regex, then exact.
    Matching(String),
}

/// Match fields equal to `value`.
pub fn equal_to(value: impl Into<Value>) -> FieldMatcher {
    FieldMatcher::EqualTo(value.into())
}

/// Match fields different from `value`.
pub fn not_equal(value: impl Into<Value>) -> FieldMatcher {
    FieldMatcher::NotEqualTo(value.into())
}

/// Match fields equal to any of `values`.
pub fn one_of<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> FieldMatcher {
    FieldMatcher::OneOf(values.into_iter().map(Into::into).collect())
}

/// Match fields equal to none of `values`.
pub fn none_of<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> FieldMatcher {
    FieldMatcher::NoneOf(values.into_iter().map(Into::into).collect())
}

/// Match numeric fields within `tolerance` of `expected`.
pub fn close_to(expected: f64, tolerance: f64) -> FieldMatcher {
    FieldMatcher::CloseTo {
        expected,
        tolerance,
    }
}

/// Match string fields containing the substring (or array fields containing
/// the value).
pub fn containing(value: impl Into<Value>) -> FieldMatcher {
    FieldMatcher::Containing(value.into())
}

/// Match string fields against a pattern.
///
/// Tried in order: glob (`*.txt`, `user?`), regex (`^user\d$`), exact.
pub fn matching(pattern: impl Into<String>) -> FieldMatcher {
    FieldMatcher::Matching(pattern.into())
}

impl FieldMatcher {
    /// Evaluate the matcher against a field value.
    pub fn matches(&self, actual: &Value) -> Result<bool, UsageError> {
        match self {
            FieldMatcher::EqualTo(expected) => Ok(value_eq(actual, expected)),
            FieldMatcher::NotEqualTo(expected) => Ok(!value_eq(actual, expected)),
            FieldMatcher::OneOf(values) => Ok(values.iter().any(|v| value_eq(actual, v))),
            FieldMatcher::NoneOf(values) => Ok(!values.iter().any(|v| value_eq(actual, v))),
            FieldMatcher::CloseTo {
                expected,
                tolerance,
            } => {
                let actual = actual.as_f64().ok_or_else(|| UsageError::TypeMismatch {
                    operation: "close_to".to_string(),
                    required: "a numeric field".to_string(),
                    actual: actual.to_string(),
                })?;
                approx_eq(actual, *expected, *tolerance)
            }
            FieldMatcher::Containing(needle) => value_contains(actual, needle),
            FieldMatcher::Matching(pattern) => {
                let text = match actual {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Ok(pattern_matches(pattern, &text))
            }
        }
    }
}

impl fmt::Display for FieldMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldMatcher::EqualTo(v) => write!(f, "= {v}"),
            FieldMatcher::NotEqualTo(v) => write!(f, "!= {v}"),
            FieldMatcher::OneOf(vs) => write!(f, "one of {}", Value::Array(vs.clone())),
            FieldMatcher::NoneOf(vs) => write!(f, "none of {}", Value::Array(vs.clone())),
            FieldMatcher::CloseTo {
                expected,
                tolerance,
            } => write!(f, "within {tolerance} of {expected}"),
            FieldMatcher::Containing(v) => write!(f, "containing {v}"),
            FieldMatcher::Matching(p) => write!(f, "matching '{p}'"),
        }
    }
}

/// Match a string against a pattern, trying glob, then regex, then an exact
/// comparison.
fn pattern_matches(pattern: &str, actual: &str) -> bool {
    // Try glob pattern first
    if let Ok(glob) = Pattern::new(pattern) {
        if glob.matches(actual) {
            return true;
        }
    }

    // Try regex
    if let Ok(re) = Regex::new(pattern) {
        if re.is_match(actual) {
            return true;
        }
    }

    // Exact match fallback
    pattern == actual
}
