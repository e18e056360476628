//! Usage errors for malformed assertion calls.
//!
//! These signal a mistake in how an assertion was written, not a mismatch in
//! the value under test. They always surface immediately, even inside a soft
//! assertion session, and carry a distinct `invalid assertion:` prefix so a
//! harness can tell misuse apart from genuine assertion failures.

/// Error type for malformed assertion calls.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    /// A tolerance must be a non-negative, finite number.
    #[error("tolerance must be non-negative, got {0}")]
    InvalidTolerance(f64),

    /// The two values have no ordering (e.g. a NaN operand).
    #[error("values cannot be ordered: {0} vs {1}")]
    NotComparable(String, String),

    /// An operation required a different value type than the one supplied.
    #[error("{operation} requires {required}, got {actual}")]
    TypeMismatch {
        operation: String,
        required: String,
        actual: String,
    },

    /// The operation does not apply to this kind of value.
    #[error("'{operation}' is not supported on {actual}")]
    UnsupportedOperation { operation: String, actual: String },

    /// A field name was not found in the record's accessor registry.
    #[error("no field named '{field}'. Available fields: {}", .available.join(", "))]
    NoSuchField {
        field: String,
        available: Vec<String>,
    },

    /// A regex pattern failed to compile.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Abort the current scenario with a usage error.
///
/// Usage errors are never deferred: a malformed call is a bug in the test
/// itself, so it propagates even when the chain records to a soft session.
pub(crate) fn raise_usage(err: UsageError) -> ! {
    panic!("invalid assertion: {err}")
}
