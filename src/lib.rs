//! # attest
//!
//! A fluent assertion library for Rust tests: chainable checks over strings,
//! numbers, record collections, and captured errors, with soft (deferred)
//! assertion sessions and structured failure reports.
//!
//! Assertions evaluate immediately and panic on failure with a rendered
//! report, so they plug straight into `#[test]` functions. Inside a
//! [`SoftAssertions`] session, failures are recorded instead and raised
//! together by `assert_all()`.
//!
//! ## Quick Start
//!
//! ```rust
//! use attest::{assert_that, within};
//!
//! assert_that("Hello, World!")
//!     .is_not_empty()
//!     .contains("World")
//!     .starts_with("Hello");
//!
//! assert_that(3.14_f64)
//!     .is_positive()
//!     .is_greater_than(3.0)
//!     .is_close_to(3.1, within(0.1));
//! ```
//!
//! ## Record collections
//!
//! ```rust,ignore
//! use attest::{assert_that, impl_record, tuple};
//! use attest::matchers::not_equal;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct User { name: String, age: u32 }
//! impl_record!(User { name, age });
//!
//! assert_that(users)
//!     .filtered_on_field("age", not_equal(30))
//!     .contains_only(&[user0, user1]);
//! ```
//!
//! ## Soft assertions
//!
//! ```rust,ignore
//! use attest::SoftAssertions;
//!
//! let softly = SoftAssertions::new();
//! softly.assert_that(num).described_as("num").is_less_than(20);
//! softly.assert_that(text).described_as("text").contains("a");
//! softly.assert_all();
//! ```
//!
//! ## Captured errors
//!
//! ```rust,ignore
//! use attest::{assert_that, capture_error};
//!
//! let outcome = capture_error(|| risky_operation());
//! assert_that(outcome)
//!     .is_instance_of::<MyError>()
//!     .has_message_containing("boom")
//!     .with_no_cause();
//! ```

pub mod capture;
pub mod compare;
pub mod error;
pub mod matchers;
pub mod number;
pub mod records;
pub mod report;
mod sink;
pub mod soft;
pub mod subject;
pub mod text;

// Entry points
pub use capture::{capture_error, CapturedOutcome};
pub use soft::SoftAssertions;
pub use subject::{assert_that, Subject};

// Chain types
pub use capture::CapturedAssertion;
pub use number::NumberAssertion;
pub use records::{ExtractedAssertion, Record, RecordsAssertion};
pub use text::TextAssertion;

// Kernel helpers
pub use compare::{within, Number, Tolerance};

// Reports and errors
pub use error::UsageError;
pub use report::{CompositeFailure, FailureReport};

// Used by the exported macros.
#[doc(hidden)]
pub use serde_json;
