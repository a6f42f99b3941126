//! Right ascension and declination in sexagesimal and decimal notation.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`sexagesimal`] | `HH:MM:SS` / `±DD:MM:SS` text to decimal degrees |
//! | [`format`] | decimal degrees to `HH:MM:SS.sss` / `±DD:MM:SS.sss` |
//! | [`validate`] | accept either notation from a form field |

pub mod format;
pub mod sexagesimal;
pub mod validate;

pub use format::{dec_to_dms, ra_to_hms};
pub use sexagesimal::{dec_to_decimal, parse_dec, parse_ra, ra_to_decimal};
pub use validate::{validate_dec, validate_ra, Coordinate};
