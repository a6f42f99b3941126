//! Error types for coordinate parsing and formatting.
//!
//! The strict operations in this crate return [`OrpResult<T>`]. The fail-soft
//! operations ([`ra_to_decimal`](crate::angle::ra_to_decimal),
//! [`dec_to_decimal`](crate::angle::dec_to_decimal)) are built on top of them
//! and never surface these errors; they hand the input back instead.
//!
//! # Error Categories
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`ParseError`](OrpError::ParseError) | Input does not match the expected notation |
//! | [`MathError`](OrpError::MathError) | Component out of range, non-finite value |
//!
//! ```
//! use orp_core::{MathErrorKind, OrpError};
//!
//! let err = OrpError::math_error("parse_ra", MathErrorKind::OutOfRange, "hours 24 > 23");
//! assert!(err.to_string().contains("OutOfRange"));
//! ```

use thiserror::Error;

/// Classification of numeric failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Result is NaN or infinity.
    NotFinite,
    /// Value outside its valid domain (e.g. declination > 90°).
    OutOfRange,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrpError {
    /// Input text does not follow the expected notation.
    #[error("Parse error in {operation}: cannot parse '{input}' ({message})")]
    ParseError {
        operation: String,
        input: String,
        message: String,
    },

    /// Numeric component failed a range or finiteness check.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, OrpError>`.
pub type OrpResult<T> = Result<T, OrpError>;

impl OrpError {
    /// Creates a [`ParseError`](Self::ParseError).
    pub fn parse_error(operation: &str, input: &str, reason: &str) -> Self {
        Self::ParseError {
            operation: operation.to_string(),
            input: input.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Returns the [`MathErrorKind`] for math errors, `None` for parse errors.
    pub fn math_kind(&self) -> Option<MathErrorKind> {
        match self {
            Self::MathError { kind, .. } => Some(*kind),
            Self::ParseError { .. } => None,
        }
    }
}
