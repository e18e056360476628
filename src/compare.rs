//! Comparison kernel: the primitive checks every assertion builds on.
//!
//! Pure functions over plain values, no chain state. Tolerance and ordering
//! checks report misuse (negative tolerance, unordered operands) as
//! [`UsageError`] so callers can distinguish a malformed assertion from a
//! value mismatch.

use crate::error::UsageError;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// Maximum allowed absolute difference for a tolerant equality check.
///
/// Built with [`within`]; validated (non-negative, finite) when the check
/// runs, not at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(pub(crate) f64);

/// Build a [`Tolerance`] for `is_close_to`.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, within};
///
/// assert_that(3.14_f64).is_close_to(3.1, within(0.1));
/// ```
pub fn within(value: f64) -> Tolerance {
    Tolerance(value)
}

/// Numeric subjects: the primitive integer and float types.
///
/// Gives number assertions a zero to compare against for sign checks and a
/// common representation for tolerance checks.
pub trait Number: Copy + PartialOrd + fmt::Debug {
    /// The additive identity of this type.
    const ZERO: Self;

    /// Widen to `f64` for tolerance arithmetic.
    fn as_f64(self) -> f64;
}

macro_rules! impl_number {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Number for $ty {
                const ZERO: Self = $zero;

                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_number!(
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
);

/// Tolerant equality: `|a - b| <= tolerance`.
///
/// A negative or NaN tolerance is a malformed check, not a failing one.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> Result<bool, UsageError> {
    if !(tolerance >= 0.0) {
        return Err(UsageError::InvalidTolerance(tolerance));
    }
    Ok((a - b).abs() <= tolerance)
}

/// Total-order comparison; `NotComparable` when the operands have no
/// ordering (NaN is the common case).
pub fn order<T: PartialOrd + fmt::Debug>(a: &T, b: &T) -> Result<Ordering, UsageError> {
    a.partial_cmp(b)
        .ok_or_else(|| UsageError::NotComparable(format!("{a:?}"), format!("{b:?}")))
}

/// Structural equality over JSON values, except numbers compare numerically
/// so an integer field equals the float written in the expectation.
pub fn value_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}

/// Containment over JSON values: substring for strings, membership for
/// arrays. Anything else cannot contain.
pub fn value_contains(haystack: &Value, needle: &Value) -> Result<bool, UsageError> {
    match haystack {
        Value::String(s) => match needle {
            Value::String(n) => Ok(s.contains(n.as_str())),
            other => Err(UsageError::TypeMismatch {
                operation: "contains".to_string(),
                required: "a string needle".to_string(),
                actual: other.to_string(),
            }),
        },
        Value::Array(items) => Ok(items.iter().any(|item| value_eq(item, needle))),
        other => Err(UsageError::UnsupportedOperation {
            operation: "contains".to_string(),
            actual: other.to_string(),
        }),
    }
}
