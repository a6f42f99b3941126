//! Sexagesimal right ascension and declination to decimal degrees.
//!
//! Observation requests carry coordinates as typed by the observer:
//!
//! ```text
//! Right ascension:  HH:MM[.frac][:SS[.frac]]     12:30:00, 5:35.5, 23:59:59.9
//! Declination:     [+-]DD:MM[.frac][:SS[.frac]]  -45:30:00, +05:00, 89:15:30.25
//! ```
//!
//! Accepted ranges:
//!
//! | Field | Right ascension | Declination |
//! |-------|-----------------|-------------|
//! | whole | 0 ≤ HH ≤ 23 | 0 ≤ DD ≤ 90 |
//! | minutes | 0 ≤ MM < 60 | 0 ≤ MM ≤ 59 |
//! | seconds | 0 ≤ SS < 60 | 0 ≤ SS ≤ 59 |
//!
//! Minutes and seconds are read with [`parse_float_prefix`], so a field like
//! `30.5.5` is taken as `30.5`.
//!
//! Two flavours are provided. [`parse_ra`] / [`parse_dec`] return an error that
//! says what was wrong. [`ra_to_decimal`] / [`dec_to_decimal`] never fail: input
//! that does not convert comes back as [`Parsed::Original`].
//!
//! ```
//! use orp_core::angle::{dec_to_decimal, parse_ra, ra_to_decimal};
//!
//! assert_eq!(ra_to_decimal("12:30:00").to_string(), "187.5000000000");
//! assert_eq!(dec_to_decimal("-45:30:00").to_string(), "-45.5000000000");
//! assert_eq!(dec_to_decimal("M31").to_string(), "M31");
//! assert!(parse_ra("24:00:00").is_err());
//! ```

use crate::constants::{
    DEGREES_PER_HOUR, MAX_DEC_DEGREES, MAX_RA_HOURS, MINUTES_PER_UNIT, SECONDS_PER_UNIT,
};
use crate::numeric::parse_float_prefix;
use crate::parsed::{DecimalDegrees, Parsed};
use crate::{MathErrorKind, OrpError, OrpResult};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

static RA_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^
        ([0-9]?[0-9])                    # hours
        :
        ([0-5]?[0-9][.0-9]*)             # minutes, optional fraction
        :?
        ([.0-9]+)?                       # optional seconds
        $
        ",
    )
    .unwrap()
});

static DEC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^
        ([+-])?                          # optional sign
        ([0-9]?[0-9])                    # degrees
        :
        ([0-5]?[0-9][.0-9]*)             # arcminutes, optional fraction
        :?
        ([.0-9]+)?                       # optional arcseconds
        $
        ",
    )
    .unwrap()
});

#[derive(Debug, Clone, Copy)]
struct Fields {
    whole: i64,
    minutes: f64,
    seconds: f64,
}

impl Fields {
    /// Reads the whole/minutes/seconds groups starting at capture `first`.
    fn from_captures(caps: &Captures, first: usize, operation: &str, input: &str) -> OrpResult<Self> {
        let whole = caps
            .get(first)
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .ok_or_else(|| OrpError::parse_error(operation, input, "missing whole field"))?;
        let minutes = caps
            .get(first + 1)
            .and_then(|m| parse_float_prefix(m.as_str()))
            .ok_or_else(|| OrpError::parse_error(operation, input, "missing minutes field"))?;
        let seconds = match caps.get(first + 2) {
            Some(m) => parse_float_prefix(m.as_str()).unwrap_or(f64::NAN),
            None => 0.0,
        };

        Ok(Self {
            whole,
            minutes,
            seconds,
        })
    }

    fn total(&self) -> f64 {
        self.whole as f64 + self.minutes / MINUTES_PER_UNIT + self.seconds / SECONDS_PER_UNIT
    }
}

fn check_component(
    operation: &str,
    name: &str,
    value: f64,
    upper: f64,
    inclusive: bool,
) -> OrpResult<()> {
    if !value.is_finite() {
        return Err(OrpError::math_error(
            operation,
            MathErrorKind::NotFinite,
            &format!("{} is not a number", name),
        ));
    }

    let in_range = value >= 0.0 && if inclusive { value <= upper } else { value < upper };
    if in_range {
        return Ok(());
    }

    let bracket = if inclusive { ']' } else { ')' };
    Err(OrpError::math_error(
        operation,
        MathErrorKind::OutOfRange,
        &format!("{} {} outside [0, {}{}", name, value, upper, bracket),
    ))
}

/// Parses sexagesimal right ascension and returns decimal degrees.
///
/// Computes `15 × (HH + MM/60 + SS/3600)`.
pub fn parse_ra(text: &str) -> OrpResult<f64> {
    const OP: &str = "parse_ra";

    let caps = RA_REGEX
        .captures(text)
        .ok_or_else(|| OrpError::parse_error(OP, text, "expected HH:MM[:SS]"))?;
    let fields = Fields::from_captures(&caps, 1, OP, text)?;

    check_component(OP, "hours", fields.whole as f64, MAX_RA_HOURS as f64, true)?;
    check_component(OP, "minutes", fields.minutes, MINUTES_PER_UNIT, false)?;
    check_component(OP, "seconds", fields.seconds, MINUTES_PER_UNIT, false)?;

    Ok(DEGREES_PER_HOUR * fields.total())
}

/// Parses sexagesimal declination and returns signed decimal degrees.
///
/// Computes `sign × (DD + MM/60 + SS/3600)`; a missing sign means positive.
pub fn parse_dec(text: &str) -> OrpResult<f64> {
    const OP: &str = "parse_dec";

    let caps = DEC_REGEX
        .captures(text)
        .ok_or_else(|| OrpError::parse_error(OP, text, "expected [+-]DD:MM[:SS]"))?;
    let sign = caps
        .get(1)
        .map_or(1.0, |m| if m.as_str() == "-" { -1.0 } else { 1.0 });
    let fields = Fields::from_captures(&caps, 2, OP, text)?;

    check_component(OP, "degrees", fields.whole as f64, MAX_DEC_DEGREES as f64, true)?;
    check_component(OP, "arcminutes", fields.minutes, 59.0, true)?;
    check_component(OP, "arcseconds", fields.seconds, 59.0, true)?;

    Ok(sign * fields.total())
}

/// Fail-soft right ascension conversion.
///
/// Returns [`Parsed::Value`] on success and the untouched input otherwise.
pub fn ra_to_decimal(text: &str) -> Parsed<'_, DecimalDegrees> {
    match parse_ra(text) {
        Ok(degrees) => Parsed::Value(DecimalDegrees(degrees)),
        Err(err) => {
            debug!(input = text, error = %err, "right ascension left unchanged");
            Parsed::Original(text)
        }
    }
}

/// Fail-soft declination conversion.
///
/// Returns [`Parsed::Value`] on success and the untouched input otherwise.
pub fn dec_to_decimal(text: &str) -> Parsed<'_, DecimalDegrees> {
    match parse_dec(text) {
        Ok(degrees) => Parsed::Value(DecimalDegrees(degrees)),
        Err(err) => {
            debug!(input = text, error = %err, "declination left unchanged");
            Parsed::Original(text)
        }
    }
}
