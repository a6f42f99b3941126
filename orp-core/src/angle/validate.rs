use super::format::{dec_to_dms, ra_to_hms};
use super::sexagesimal::{parse_dec, parse_ra};
use crate::constants::DEGREES_PER_CIRCLE;
use crate::numeric::is_numeric;
use crate::{MathErrorKind, OrpError, OrpResult};

/// A coordinate accepted from user input, in both notations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub degrees: f64,
    pub sexagesimal: String,
}

fn parse_decimal(operation: &str, text: &str) -> OrpResult<f64> {
    text.parse::<f64>()
        .map_err(|_| OrpError::parse_error(operation, text, "not a decimal number"))
}

/// Validates right ascension given as decimal degrees or `HH:MM[:SS]`.
///
/// Decimal input must lie in [0°, 360°).
pub fn validate_ra(text: &str) -> OrpResult<Coordinate> {
    let text = text.trim();

    let degrees = if is_numeric(text) {
        let degrees = parse_decimal("validate_ra", text)?;
        if !(0.0..DEGREES_PER_CIRCLE).contains(&degrees) {
            return Err(OrpError::math_error(
                "validate_ra",
                MathErrorKind::OutOfRange,
                &format!("RA {}° out of range [0°, 360°)", degrees),
            ));
        }
        degrees
    } else {
        parse_ra(text)?
    };

    Ok(Coordinate {
        degrees,
        sexagesimal: ra_to_hms(degrees)?,
    })
}

/// Validates declination given as decimal degrees or `[+-]DD:MM[:SS]`.
pub fn validate_dec(text: &str) -> OrpResult<Coordinate> {
    let text = text.trim();

    let degrees = if is_numeric(text) {
        parse_decimal("validate_dec", text)?
    } else {
        parse_dec(text)?
    };

    Ok(Coordinate {
        degrees,
        sexagesimal: dec_to_dms(degrees)?,
    })
}
