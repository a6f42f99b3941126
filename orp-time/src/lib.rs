pub mod constants;
pub mod mjd;
pub mod semester;

pub use mjd::{format_mjd, iso_to_jd, iso_to_mjd, jd_to_iso, mjd_to_iso};
pub use semester::{semester_end, semester_start, Semester, SemesterCalendar};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeError {
    InvalidDate(String),
    InvalidCalendar(String),
    ConversionError(String),
    ParseError(String),
}

impl std::fmt::Display for TimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeError::InvalidDate(msg) => write!(f, "Invalid date: {}", msg),
            TimeError::InvalidCalendar(msg) => write!(f, "Invalid semester calendar: {}", msg),
            TimeError::ConversionError(msg) => write!(f, "Conversion error: {}", msg),
            TimeError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for TimeError {}
