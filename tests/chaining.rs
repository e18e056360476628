//! End-to-end chaining scenarios across every assertion kind.

use attest::matchers::{none_of, not_equal};
use attest::{assert_that, capture_error, impl_record, tuple, within, SoftAssertions};
use std::panic::{catch_unwind, AssertUnwindSafe};

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

fn user_list() -> Vec<User> {
    vec![user("admin", 30), user("user0", 10), user("user1", 20)]
}

#[derive(Debug, thiserror::Error)]
#[error("cannot divide by zero")]
struct ArithmeticError;

#[test]
fn chaining_string_subject() {
    assert_that("Hello, World! Nice to meet you.")
        .is_not_empty()
        .contains("Nice")
        .contains("World")
        .does_not_contain("Give Up")
        .starts_with("Hello")
        .ends_with("you.")
        .is_equal_to("Hello, World! Nice to meet you.");
}

#[test]
fn chaining_number_subject() {
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
fn labeled_failure_carries_the_label() {
    let hans = user("Hans", 33);

    let result = catch_unwind(AssertUnwindSafe(|| {
        assert_that(hans.age)
            .described_as(format!("check1 {}'s age", hans.name))
            .is_equal_to(100);
    }));

    let message = *result.unwrap_err().downcast::<String>().unwrap();
    assert!(message.contains("[check1 Hans's age]"));
    assert!(message.contains("expected: 100"));
    assert!(message.contains("actual: 33"));
}

#[test]
fn filtering_with_a_predicate() {
    assert_that(user_list())
        .filtered_on(|u| u.name.contains("admin"))
        .contains(&[user("admin", 30)]);
}

#[test]
fn filtering_on_a_field() {
    assert_that(user_list())
        .filtered_on_field("age", not_equal(30))
        .contains_only(&[user("user0", 10), user("user1", 20)]);

    // notIn-style matcher: exclude a set of values
    assert_that(user_list())
        .filtered_on_field("age", none_of([30]))
        .contains_only(&[user("user0", 10), user("user1", 20)]);
}

#[test]
fn extracting_a_property() {
    assert_that(user_list())
        .extracting(&["name"])
        .contains(&[tuple!("admin"), tuple!("user0"), tuple!("user1")]);
}

#[test]
fn extracting_several_properties_as_tuples() {
    assert_that(user_list())
        .extracting(&["name", "age"])
        .contains(&[
            tuple!("admin", 30),
            tuple!("user0", 10),
            tuple!("user1", 20),
        ])
        .contains_exactly(&[
            tuple!("admin", 30),
            tuple!("user0", 10),
            tuple!("user1", 20),
        ]);
}

#[test]
fn soft_assertions_run_everything_before_reporting() {
    let (num, num2) = (10_i32, 20_i32);
    let text = "abc";

    let softly = SoftAssertions::new();
    softly.assert_that(num).described_as("first").is_less_than(20);
    softly.assert_that(num2).described_as("second").is_less_than(5);
    softly.assert_that(text).described_as("third").contains("a");

    // All three ran; only the second recorded a failure.
    assert_eq!(softly.failure_count(), 1);
    assert_eq!(softly.failures()[0].label.as_deref(), Some("second"));

    let result = catch_unwind(AssertUnwindSafe(|| softly.assert_all()));
    let message = *result.unwrap_err().downcast::<String>().unwrap();
    assert!(message.contains("1 soft assertion(s) failed"));
    assert!(message.contains("[second] is less than 5"));

    // Finalizing an already-drained session is a no-op.
    softly.assert_all();
}

#[test]
fn capturing_a_raised_error() {
    let outcome = capture_error(|| -> Result<i32, ArithmeticError> { Err(ArithmeticError) });

    assert_that(outcome)
        .is_instance_of::<ArithmeticError>()
        .has_message("cannot divide by zero")
        .with_no_cause();
}

#[test]
fn capturing_a_standard_library_error() {
    let input = "abc";
    let outcome = capture_error(|| input[..input.len()].parse::<i32>());

    assert_that(outcome)
        .is_instance_of::<std::num::ParseIntError>()
        .has_message_containing("invalid digit");
}

#[test]
fn formatted_message_expectations() {
    let outcome = capture_error(|| -> Result<(), ArithmeticError> { Err(ArithmeticError) });

    assert_that(outcome)
        .has_message(format!("cannot divide by {}", "zero"))
        .has_message_containing("di")
        .with_no_cause();
}

#[test]
#[should_panic(expected = "no error was raised")]
fn asserting_on_an_empty_capture_fails() {
    let outcome = capture_error(|| -> Result<i32, ArithmeticError> { Ok(42) });
    assert_that(outcome).is_instance_of::<ArithmeticError>();
}

#[test]
fn bdd_style_capture_then_assert() {
    // given
    let boom = || -> Result<(), Box<dyn std::error::Error>> { Err("boom!".into()) };

    // when
    let thrown = capture_error(boom);

    // then
    assert_that(thrown).has_message_containing("boom");
}
