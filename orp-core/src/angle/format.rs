//! Decimal degrees back to colon-separated sexagesimal text.
//!
//! These are the inverse of [`parse_ra`](super::parse_ra) and
//! [`parse_dec`](super::parse_dec), and the notation stored alongside decimal
//! coordinates on an observation request.
//!
//! - Right ascension: `HH:MM:SS.sss`, always positive; input wraps into [0°, 360°).
//! - Declination: `±DD:MM:SS.sss`, sign always shown; input must lie in [-90°, +90°].
//!
//! Seconds are rounded to milliseconds before splitting, so `59.9996` seconds
//! carries into the next minute instead of printing as `60.000`.
//!
//! ```
//! use orp_core::angle::{dec_to_dms, ra_to_hms};
//!
//! assert_eq!(ra_to_hms(187.5).unwrap(), "12:30:00.000");
//! assert_eq!(dec_to_dms(-45.5).unwrap(), "-45:30:00.000");
//! ```

use crate::constants::{
    DEGREES_PER_CIRCLE, DEGREES_PER_HOUR, MAX_DEC_DEGREES, SECONDS_PER_UNIT,
    SEXAGESIMAL_SECOND_DIGITS,
};
use crate::{MathErrorKind, OrpError, OrpResult};

const MILLIS_PER_SECOND: i64 = 1000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_UNIT: i64 = 60 * MILLIS_PER_MINUTE;

/// Splits a non-negative value (hours or degrees) into whole units, minutes
/// and seconds after rounding to the millisecond.
fn split_millis(value: f64) -> (i64, i64, f64) {
    let total = libm::round(value * SECONDS_PER_UNIT * MILLIS_PER_SECOND as f64) as i64;
    let whole = total / MILLIS_PER_UNIT;
    let minutes = (total % MILLIS_PER_UNIT) / MILLIS_PER_MINUTE;
    let seconds = (total % MILLIS_PER_MINUTE) as f64 / MILLIS_PER_SECOND as f64;
    (whole, minutes, seconds)
}

fn require_finite(operation: &str, degrees: f64) -> OrpResult<()> {
    if degrees.is_finite() {
        return Ok(());
    }
    Err(OrpError::math_error(
        operation,
        MathErrorKind::NotFinite,
        &format!("{} is not finite", degrees),
    ))
}

/// Formats right ascension given in decimal degrees as `HH:MM:SS.sss`.
pub fn ra_to_hms(degrees: f64) -> OrpResult<String> {
    require_finite("ra_to_hms", degrees)?;

    let hours = degrees.rem_euclid(DEGREES_PER_CIRCLE) / DEGREES_PER_HOUR;
    let (h, m, s) = split_millis(hours);
    Ok(format!(
        "{:02}:{:02}:{:0width$.prec$}",
        h % 24,
        m,
        s,
        width = SEXAGESIMAL_SECOND_DIGITS + 3,
        prec = SEXAGESIMAL_SECOND_DIGITS
    ))
}

/// Formats declination given in decimal degrees as `±DD:MM:SS.sss`.
pub fn dec_to_dms(degrees: f64) -> OrpResult<String> {
    require_finite("dec_to_dms", degrees)?;

    let limit = MAX_DEC_DEGREES as f64;
    if !(-limit..=limit).contains(&degrees) {
        return Err(OrpError::math_error(
            "dec_to_dms",
            MathErrorKind::OutOfRange,
            &format!("Dec {:.2}° out of range [-90°, +90°]", degrees),
        ));
    }

    let sign = if degrees < 0.0 { '-' } else { '+' };
    let (d, m, s) = split_millis(degrees.abs());
    Ok(format!(
        "{}{:02}:{:02}:{:0width$.prec$}",
        sign,
        d,
        m,
        s,
        width = SEXAGESIMAL_SECOND_DIGITS + 3,
        prec = SEXAGESIMAL_SECOND_DIGITS
    ))
}
