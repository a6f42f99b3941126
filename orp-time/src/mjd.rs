//! ISO-8601 timestamps to and from Modified / Julian Dates.
//!
//! Timestamps are naive UTC. MJD 0 is 1858-11-17 00:00, and
//! `JD = MJD + 2400000.5`. Conversions run at microsecond resolution, matching
//! the six fractional digits of the ISO strings produced here.

use crate::constants::{
    MICROSECONDS_PER_DAY_F64, MJD_EPOCH_YMD, MJD_FRACTION_DIGITS, MJD_ZERO_POINT,
};
use crate::{TimeError, TimeResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

const ISO_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

fn mjd_epoch() -> TimeResult<NaiveDateTime> {
    let (y, m, d) = MJD_EPOCH_YMD;
    NaiveDate::from_ymd_opt(y, m, d)
        .map(|date| date.and_time(NaiveTime::MIN))
        .ok_or_else(|| TimeError::InvalidDate("MJD epoch".to_string()))
}

/// Parses `YYYY-MM-DD[T| ]HH:MM:SS[.ffffff][Z]` or a bare `YYYY-MM-DD`.
pub fn parse_iso(s: &str) -> TimeResult<NaiveDateTime> {
    let s = s.trim();
    let s = s.strip_suffix('Z').unwrap_or(s);

    for fmt in ISO_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| {
            TimeError::ParseError(format!(
                "Invalid datetime format: '{}'. Expected YYYY-MM-DDTHH:MM:SS",
                s
            ))
        })
}

fn datetime_to_mjd(dt: NaiveDateTime) -> TimeResult<f64> {
    let micros = dt
        .signed_duration_since(mjd_epoch()?)
        .num_microseconds()
        .ok_or_else(|| TimeError::ConversionError(format!("{} is too far from MJD 0", dt)))?;
    Ok(micros as f64 / MICROSECONDS_PER_DAY_F64)
}

fn mjd_to_datetime(mjd: f64) -> TimeResult<NaiveDateTime> {
    if !mjd.is_finite() {
        return Err(TimeError::ConversionError(format!("MJD {} is not finite", mjd)));
    }

    let micros = (mjd * MICROSECONDS_PER_DAY_F64).round();
    if micros.abs() >= i64::MAX as f64 {
        return Err(TimeError::ConversionError(format!("MJD {} out of range", mjd)));
    }

    mjd_epoch()?
        .checked_add_signed(TimeDelta::microseconds(micros as i64))
        .ok_or_else(|| TimeError::ConversionError(format!("MJD {} out of range", mjd)))
}

/// Modified Julian Date of an ISO timestamp.
pub fn iso_to_mjd(iso: &str) -> TimeResult<f64> {
    datetime_to_mjd(parse_iso(iso)?)
}

/// ISO timestamp (`YYYY-MM-DD HH:MM:SS.ffffff`) of a Modified Julian Date.
pub fn mjd_to_iso(mjd: f64) -> TimeResult<String> {
    Ok(mjd_to_datetime(mjd)?
        .format("%Y-%m-%d %H:%M:%S%.6f")
        .to_string())
}

/// Julian Date of an ISO timestamp.
pub fn iso_to_jd(iso: &str) -> TimeResult<f64> {
    iso_to_mjd(iso).map(|mjd| mjd + MJD_ZERO_POINT)
}

/// ISO timestamp (`YYYY-MM-DDTHH:MM:SS.ffffff`) of a Julian Date.
pub fn jd_to_iso(jd: f64) -> TimeResult<String> {
    Ok(mjd_to_datetime(jd - MJD_ZERO_POINT)?
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string())
}

/// Renders an MJD with 20 fractional digits, the stored text form.
pub fn format_mjd(mjd: f64) -> String {
    format!("{:.*}", MJD_FRACTION_DIGITS, mjd)
}
