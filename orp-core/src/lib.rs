//! Numeric checks and coordinate conversions for observation requests.
//!
//! `orp-core` holds the stateless helpers an observation request portal runs on
//! user-entered fields: is this a number, and what is this sexagesimal right
//! ascension or declination in decimal degrees.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`numeric`] | Finite-number check, lenient leading-number parse |
//! | [`angle`] | Sexagesimal parsing, formatting, validation |
//! | [`parsed`] | [`Parsed`] outcome of fail-soft conversions, [`DecimalDegrees`] |
//! | [`constants`] | Unit conversions and field limits |
//! | [`errors`] | [`OrpError`] and [`OrpResult`] |
//!
//! # Fail-soft vs strict
//!
//! ```
//! use orp_core::angle::{parse_dec, dec_to_decimal};
//!
//! // Strict: tells you what went wrong
//! assert!(parse_dec("95:00:00").is_err());
//!
//! // Fail-soft: hands the input back
//! assert_eq!(dec_to_decimal("95:00:00").to_string(), "95:00:00");
//! ```

pub mod angle;
pub mod constants;
pub mod errors;
pub mod numeric;
pub mod parsed;

pub use errors::{MathErrorKind, OrpError, OrpResult};
pub use numeric::is_numeric;
pub use parsed::{DecimalDegrees, Parsed};
