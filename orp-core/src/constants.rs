/// Degrees of arc per hour of right ascension.
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const MINUTES_PER_UNIT: f64 = 60.0;

pub const SECONDS_PER_UNIT: f64 = 3600.0;

pub const DEGREES_PER_CIRCLE: f64 = 360.0;

pub const HOURS_PER_DAY: f64 = 24.0;

/// Fractional digits used when rendering decimal degrees.
pub const DECIMAL_DEGREE_DIGITS: usize = 10;

/// Fractional digits of the seconds field in `HH:MM:SS.sss` / `±DD:MM:SS.sss`.
pub const SEXAGESIMAL_SECOND_DIGITS: usize = 3;

pub const MAX_RA_HOURS: i64 = 23;

pub const MAX_DEC_DEGREES: i64 = 90;
