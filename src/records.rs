//! Fluent assertions over ordered collections of structured records.
//!
//! Records expose their fields through the [`Record`] trait: a declared
//! registry of field names plus a getter returning the field as a
//! `serde_json::Value`. Field names used in filtering and extraction are
//! validated against the registry up front; an unknown name is a usage
//! error, not a failed assertion.

use crate::error::{raise_usage, UsageError};
use crate::matchers::FieldMatcher;
use crate::report::FailureReport;
use crate::sink::Sink;
use crate::subject::Subject;
use serde_json::Value;
use std::fmt;

/// A structured record whose fields can be read by name.
///
/// Implement with the [`impl_record!`](crate::impl_record) macro:
///
/// ```rust,ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// impl_record!(User { name, age });
/// ```
pub trait Record: Clone + PartialEq + fmt::Debug {
    /// Declared field names, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Read a field by name; `None` for names outside [`Self::FIELDS`].
    fn field(&self, name: &str) -> Option<Value>;
}

/// Implement [`Record`] for a struct by listing its fields.
///
/// Each listed field must be readable and convertible with `serde_json::json!`.
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::Record for $ty {
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),+];

            fn field(&self, name: &str) -> Option<$crate::serde_json::Value> {
                match name {
                    $(stringify!($field) => Some($crate::serde_json::json!(self.$field)),)+
                    _ => None,
                }
            }
        }
    };
}

/// Build a row of extracted values for comparing against `extracting` output.
///
/// Mirrors the shape `extracting` produces: one `serde_json::Value` per
/// requested field, in argument order.
#[macro_export]
macro_rules! tuple {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::serde_json::json!($value)),*]
    };
}

/// Assertion chain over an ordered sequence of records.
///
/// Filtering and extraction return new chains wired to the same failure
/// sink, so the whole pipeline stays eager or soft as a unit.
#[derive(Debug, Clone)]
pub struct RecordsAssertion<R: Record> {
    records: Vec<R>,
    label: Option<String>,
    sink: Sink,
}

impl<R: Record> RecordsAssertion<R> {
    pub(crate) fn new(records: Vec<R>, sink: Sink) -> Self {
        Self {
            records,
            label: None,
            sink,
        }
    }

    /// The records currently in scope (after any filtering).
    pub fn subject(&self) -> &[R] {
        &self.records
    }

    /// Attach a label to the next check's failure report.
    pub fn described_as(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    // =========================================================================
    // Scoping (chainable, not themselves checks)
    // =========================================================================

    /// Narrow the chain to records satisfying the predicate.
    ///
    /// Surviving order is preserved. An empty result is not a failure; only
    /// a later check against it can fail.
    pub fn filtered_on<P: Fn(&R) -> bool>(mut self, predicate: P) -> Self {
        self.records.retain(|record| predicate(record));
        self
    }

    /// Narrow the chain to records whose `field` satisfies the matcher.
    ///
    /// The field name is validated against the record's registry; an
    /// unknown name is a usage error listing the available fields.
    pub fn filtered_on_field(mut self, field: &str, matcher: FieldMatcher) -> Self {
        validate_field::<R>(field);
        self.records.retain(|record| {
            let value = field_value(record, field);
            match matcher.matches(&value) {
                Ok(keep) => keep,
                Err(e) => raise_usage(e),
            }
        });
        self
    }

    /// Project each record onto the named fields.
    ///
    /// Yields one row per record, in record order; row components follow the
    /// argument order.
    pub fn extracting(mut self, fields: &[&str]) -> ExtractedAssertion {
        for field in fields.iter().copied() {
            validate_field::<R>(field);
        }
        let rows = self
            .records
            .iter()
            .map(|record| {
                fields
                    .iter()
                    .map(|&field| field_value(record, field))
                    .collect()
            })
            .collect();
        ExtractedAssertion {
            rows,
            fields: fields.iter().map(|f| f.to_string()).collect(),
            label: self.label.take(),
            sink: self.sink,
        }
    }

    // =========================================================================
    // Checks (chainable)
    // =========================================================================

    /// Check every expected record appears among the subject records.
    ///
    /// Order is irrelevant and duplicate expectations collapse.
    pub fn contains(self, expected: &[R]) -> Self {
        let missing: Vec<&R> = expected
            .iter()
            .filter(|e| !self.records.contains(e))
            .collect();
        let passed = missing.is_empty();
        let actual = format!("{:?}", self.records);
        self.check(
            passed,
            format!("contains {expected:?}"),
            format!("a collection containing {expected:?}"),
            actual,
        )
    }

    /// Check the subject records are exactly the expected set: no extras,
    /// no omissions, multiplicity ignored.
    pub fn contains_only(self, expected: &[R]) -> Self {
        let missing = expected.iter().any(|e| !self.records.contains(e));
        let extra = self.records.iter().any(|r| !expected.contains(r));
        let passed = !missing && !extra;
        let actual = format!("{:?}", self.records);
        self.check(
            passed,
            format!("contains only {expected:?}"),
            format!("exactly the elements {expected:?}"),
            actual,
        )
    }

    /// Check the sequence has exactly `expected` elements.
    pub fn has_size(self, expected: usize) -> Self {
        let passed = self.records.len() == expected;
        let actual = format!("{} element(s): {:?}", self.records.len(), self.records);
        self.check(
            passed,
            format!("has size {expected}"),
            format!("{expected} element(s)"),
            actual,
        )
    }

    /// Check the sequence is empty.
    pub fn is_empty(self) -> Self {
        let passed = self.records.is_empty();
        let actual = format!("{:?}", self.records);
        self.check(passed, "is empty", "an empty collection", actual)
    }

    /// Check the sequence is not empty.
    pub fn is_not_empty(self) -> Self {
        let passed = !self.records.is_empty();
        let actual = format!("{:?}", self.records);
        self.check(passed, "is not empty", "a non-empty collection", actual)
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

fn validate_field<R: Record>(field: &str) {
    if !R::FIELDS.contains(&field) {
        raise_usage(UsageError::NoSuchField {
            field: field.to_string(),
            available: R::FIELDS.iter().map(|f| f.to_string()).collect(),
        });
    }
}

fn field_value<R: Record>(record: &R, field: &str) -> Value {
    match record.field(field) {
        Some(value) => value,
        // The registry declared the field but the getter disagrees.
        None => raise_usage(UsageError::NoSuchField {
            field: field.to_string(),
            available: R::FIELDS.iter().map(|f| f.to_string()).collect(),
        }),
    }
}

/// Assertion chain over rows of values extracted from records.
#[derive(Debug, Clone)]
pub struct ExtractedAssertion {
    rows: Vec<Vec<Value>>,
    fields: Vec<String>,
    label: Option<String>,
    sink: Sink,
}

impl ExtractedAssertion {
    /// The extracted rows, in original record order.
    pub fn subject(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Attach a label to the next check's failure report.
    pub fn described_as(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Check every expected row appears among the extracted rows.
    pub fn contains(self, expected: &[Vec<Value>]) -> Self {
        let missing: Vec<&Vec<Value>> = expected
            .iter()
            .filter(|row| !self.rows.contains(row))
            .collect();
        let passed = missing.is_empty();
        let (check, want, got) = self.render(expected, "contains", "rows containing");
        self.check(passed, check, want, got)
    }

    /// Check the extracted rows are exactly the expected set, order and
    /// multiplicity ignored.
    pub fn contains_only(self, expected: &[Vec<Value>]) -> Self {
        let missing = expected.iter().any(|row| !self.rows.contains(row));
        let extra = self.rows.iter().any(|row| !expected.contains(row));
        let passed = !missing && !extra;
        let (check, want, got) = self.render(expected, "contains only", "exactly the rows");
        self.check(passed, check, want, got)
    }

    /// Check the extracted rows equal the expected rows in order.
    pub fn contains_exactly(self, expected: &[Vec<Value>]) -> Self {
        let passed = self.rows == expected;
        let (check, want, got) = self.render(expected, "contains exactly", "in order, the rows");
        self.check(passed, check, want, got)
    }

    fn render(&self, expected: &[Vec<Value>], verb: &str, kind: &str) -> (String, String, String) {
        let fields = self.fields.join(", ");
        let check = format!("extracted ({fields}) {verb} {}", render_rows(expected));
        let want = format!("{kind} {}", render_rows(expected));
        let got = render_rows(&self.rows);
        (check, want, got)
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

fn render_rows(rows: &[Vec<Value>]) -> String {
    let rendered: Vec<String> = rows
        .iter()
        .map(|row| Value::Array(row.clone()).to_string())
        .collect();
    format!("[{}]", rendered.join(", "))
}

impl<R: Record> Subject for Vec<R> {
    type Assertion = RecordsAssertion<R>;

    fn into_assertion(self, sink: Sink) -> RecordsAssertion<R> {
        RecordsAssertion::new(self, sink)
    }
}

impl<'a, R: Record> Subject for &'a [R] {
    type Assertion = RecordsAssertion<R>;

    fn into_assertion(self, sink: Sink) -> RecordsAssertion<R> {
        RecordsAssertion::new(self.to_vec(), sink)
    }
}

impl<'a, R: Record> Subject for &'a Vec<R> {
    type Assertion = RecordsAssertion<R>;

    fn into_assertion(self, sink: Sink) -> RecordsAssertion<R> {
        RecordsAssertion::new(self.clone(), sink)
    }
}

#[cfg(test)]
mod tests {
    use crate::matchers::{matching, not_equal};
    use crate::{assert_that, tuple};

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        name: String,
        age: u32,
    }

    impl_record!(User { name, age });

    fn user(name: &str, age: u32) -> User {
        User {
            name: name.to_string(),
            age,
        }
    }

    fn users() -> Vec<User> {
        vec![user("admin", 30), user("user0", 10), user("user1", 20)]
    }

    #[test]
    fn filtered_on_predicate_then_contains() {
        assert_that(users())
            .filtered_on(|u| u.name.contains("admin"))
            .contains(&[user("admin", 30)]);
    }

    #[test]
    fn filtered_on_field_then_contains_only() {
        assert_that(users())
            .filtered_on_field("age", not_equal(30))
            .contains_only(&[user("user0", 10), user("user1", 20)]);
    }

    #[test]
    #[should_panic(expected = "assertion failed: contains only")]
    fn contains_only_rejects_omissions() {
        assert_that(users())
            .filtered_on_field("age", not_equal(30))
            .contains_only(&[user("user0", 10)]);
    }

    #[test]
    #[should_panic(expected = "assertion failed: contains only")]
    fn contains_only_rejects_extras() {
        assert_that(users())
            .filtered_on_field("age", not_equal(30))
            .contains_only(&[user("user0", 10), user("user1", 20), user("ghost", 99)]);
    }

    #[test]
    fn filtered_on_field_matching_pattern() {
        assert_that(users())
            .filtered_on_field("name", matching("user*"))
            .has_size(2);
    }

    #[test]
    fn filter_preserves_order() {
        let chain = assert_that(users()).filtered_on(|u| u.age < 25);
        let names: Vec<&str> = chain.subject().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["user0", "user1"]);
    }

    #[test]
    fn filtering_an_empty_sequence_is_not_a_failure() {
        assert_that(Vec::<User>::new())
            .filtered_on(|u| u.age > 100)
            .is_empty();
    }

    #[test]
    #[should_panic(expected = "assertion failed: contains")]
    fn empty_subject_with_expectations_fails() {
        assert_that(Vec::<User>::new()).contains(&[user("admin", 30)]);
    }

    #[test]
    #[should_panic(expected = "invalid assertion: no field named 'height'")]
    fn unknown_field_is_usage_error() {
        assert_that(users()).filtered_on_field("height", not_equal(30));
    }

    #[test]
    fn extracting_single_field() {
        assert_that(users())
            .extracting(&["name"])
            .contains(&[tuple!("admin"), tuple!("user0"), tuple!("user1")]);
    }

    #[test]
    fn extracting_tuples_in_original_order() {
        assert_that(users()).extracting(&["name", "age"]).contains_exactly(&[
            tuple!("admin", 30),
            tuple!("user0", 10),
            tuple!("user1", 20),
        ]);
    }

    #[test]
    #[should_panic(expected = "contains exactly")]
    fn contains_exactly_is_order_sensitive() {
        assert_that(users()).extracting(&["name"]).contains_exactly(&[
            tuple!("user0"),
            tuple!("admin"),
            tuple!("user1"),
        ]);
    }

    #[test]
    fn extracted_contains_only() {
        assert_that(users())
            .filtered_on_field("age", not_equal(30))
            .extracting(&["age"])
            .contains_only(&[tuple!(20), tuple!(10)]);
    }

    #[test]
    #[should_panic(expected = "invalid assertion: no field named 'email'")]
    fn extracting_unknown_field_is_usage_error() {
        assert_that(users()).extracting(&["name", "email"]);
    }

    #[test]
    fn slice_and_borrowed_subjects() {
        let list = users();
        assert_that(&list).has_size(3);
        assert_that(&list[..]).is_not_empty();
    }
}
