//! Outcome of a fail-soft conversion.
//!
//! Fail-soft conversions never error: when the input does not fit the expected
//! notation they hand it back untouched. [`Parsed`] keeps that contract while
//! letting callers tell a converted value from a pass-through without comparing
//! strings.
//!
//! ```
//! use orp_core::angle::ra_to_decimal;
//!
//! let ok = ra_to_decimal("12:30:00");
//! assert!(ok.is_value());
//! assert_eq!(ok.to_string(), "187.5000000000");
//!
//! let passed = ra_to_decimal("not an angle");
//! assert_eq!(passed.original(), Some("not an angle"));
//! assert_eq!(passed.to_string(), "not an angle");
//! ```

use crate::constants::DECIMAL_DEGREE_DIGITS;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed<'a, T> {
    /// Input matched and converted.
    Value(T),
    /// Input left as-is.
    Original(&'a str),
}

impl<'a, T> Parsed<'a, T> {
    /// Builds a `Parsed` from a strict result, falling back to `original` on error.
    pub fn from_result<E>(result: Result<T, E>, original: &'a str) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(_) => Self::Original(original),
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn is_original(&self) -> bool {
        matches!(self, Self::Original(_))
    }

    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Original(_) => None,
        }
    }

    pub fn original(&self) -> Option<&'a str> {
        match self {
            Self::Value(_) => None,
            Self::Original(s) => Some(s),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Parsed<'a, U> {
        match self {
            Self::Value(v) => Parsed::Value(f(v)),
            Self::Original(s) => Parsed::Original(s),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Parsed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => fmt::Display::fmt(v, f),
            Self::Original(s) => f.write_str(s),
        }
    }
}

/// An angle in decimal degrees.
///
/// `Display` renders fixed-point with 10 fractional digits. Negative zero is
/// rendered unsigned, so `-00:00:00` converts to `0.0000000000`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DecimalDegrees(pub f64);

impl DecimalDegrees {
    pub fn degrees(self) -> f64 {
        self.0
    }
}

impl fmt::Display for DecimalDegrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `-0.0 == 0.0`, so this also strips the sign from negative zero.
        let v = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{:.*}", DECIMAL_DEGREE_DIGITS, v)
    }
}

impl From<DecimalDegrees> for f64 {
    fn from(d: DecimalDegrees) -> Self {
        d.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_degrees_display() {
        assert_eq!(DecimalDegrees(187.5).to_string(), "187.5000000000");
        assert_eq!(DecimalDegrees(-45.5).to_string(), "-45.5000000000");
        assert_eq!(DecimalDegrees(-0.0).to_string(), "0.0000000000");
        assert_eq!(DecimalDegrees(1.0 / 3.0).to_string(), "0.3333333333");
    }

    #[test]
    fn test_from_result() {
        let ok: Parsed<'_, i32> = Parsed::from_result(Ok::<_, ()>(3), "3");
        assert_eq!(ok, Parsed::Value(3));

        let err: Parsed<'_, i32> = Parsed::from_result(Err(()), "three");
        assert_eq!(err, Parsed::Original("three"));
        assert!(err.is_original());
        assert_eq!(err.value(), None);
    }

    #[test]
    fn test_map_and_display() {
        let p: Parsed<'_, f64> = Parsed::Value(2.0);
        assert_eq!(p.map(DecimalDegrees).to_string(), "2.0000000000");

        let o: Parsed<'_, f64> = Parsed::Original("x:y");
        assert_eq!(o.map(DecimalDegrees).to_string(), "x:y");
    }
}
