pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const MICROSECONDS_PER_DAY_F64: f64 = 86_400_000_000.0;

/// Calendar date of MJD 0.
pub const MJD_EPOCH_YMD: (i32, u32, u32) = (1858, 11, 17);

/// Fractional digits used by [`format_mjd`](crate::mjd::format_mjd).
pub const MJD_FRACTION_DIGITS: usize = 20;

/// Default semester boundaries, 1-based months: April 1 and October 1.
pub const FIRST_SEMESTER_MONTH: u32 = 4;

pub const SECOND_SEMESTER_MONTH: u32 = 10;
