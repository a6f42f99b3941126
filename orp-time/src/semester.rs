//! Academic semester boundaries.
//!
//! Telescope time is allocated per semester. With the default calendar the
//! year splits at April 1 and October 1:
//!
//! | Month of input | Semester start | Semester end |
//! |----------------|----------------|--------------|
//! | Jan – Mar | Oct 1, previous year | Mar 31, same year |
//! | Apr – Sep | Apr 1, same year | Sep 30, same year |
//! | Oct – Dec | Oct 1, same year | Mar 31, next year |
//!
//! The end date is the day before the next boundary. Inputs are never modified;
//! every call returns fresh values.
//!
//! ```
//! use chrono::NaiveDate;
//! use orp_time::semester::{semester_end, semester_start};
//!
//! let d = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! assert_eq!(semester_start(d).unwrap(), NaiveDate::from_ymd_opt(2023, 10, 1).unwrap());
//! assert_eq!(semester_end(d).unwrap(), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
//! ```

use crate::constants::{FIRST_SEMESTER_MONTH, SECOND_SEMESTER_MONTH};
use crate::{TimeError, TimeResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::fmt;

const NANOS_PER_DAY: i64 = 86_400_000_000_000;

/// The two months (1-based) on whose first day a semester begins.
///
/// Deserialization goes through [`SemesterCalendar::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCalendar"))]
pub struct SemesterCalendar {
    first_month: u32,
    second_month: u32,
}

impl Default for SemesterCalendar {
    fn default() -> Self {
        Self {
            first_month: FIRST_SEMESTER_MONTH,
            second_month: SECOND_SEMESTER_MONTH,
        }
    }
}

impl SemesterCalendar {
    /// Builds a calendar from two boundary months with `first_month < second_month`.
    pub fn new(first_month: u32, second_month: u32) -> TimeResult<Self> {
        if !(1..=12).contains(&first_month) || !(1..=12).contains(&second_month) {
            return Err(TimeError::InvalidCalendar(format!(
                "months must be in 1..=12, got {} and {}",
                first_month, second_month
            )));
        }
        if first_month >= second_month {
            return Err(TimeError::InvalidCalendar(format!(
                "first month {} must precede second month {}",
                first_month, second_month
            )));
        }
        Ok(Self {
            first_month,
            second_month,
        })
    }

    pub fn first_month(&self) -> u32 {
        self.first_month
    }

    pub fn second_month(&self) -> u32 {
        self.second_month
    }

    /// Returns the semester that contains `date`.
    pub fn semester_containing<D: Datelike>(&self, date: D) -> TimeResult<Semester> {
        let year = date.year();
        let month = date.month();

        let (start, next) = if month < self.first_month {
            (
                (shift_year(year, -1)?, self.second_month),
                (year, self.first_month),
            )
        } else if month < self.second_month {
            ((year, self.first_month), (year, self.second_month))
        } else {
            (
                (year, self.second_month),
                (shift_year(year, 1)?, self.first_month),
            )
        };

        let start = first_of_month(start.0, start.1)?;
        let end = first_of_month(next.0, next.1)?
            .pred_opt()
            .ok_or_else(|| TimeError::InvalidDate(format!("no day before {}-{:02}-01", next.0, next.1)))?;

        Ok(Semester {
            start,
            end,
            calendar: *self,
        })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCalendar {
    first_month: u32,
    second_month: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCalendar> for SemesterCalendar {
    type Error = TimeError;

    fn try_from(raw: RawCalendar) -> TimeResult<Self> {
        Self::new(raw.first_month, raw.second_month)
    }
}

fn shift_year(year: i32, by: i32) -> TimeResult<i32> {
    year.checked_add(by)
        .ok_or_else(|| TimeError::InvalidDate(format!("year {} overflows", year)))
}

fn first_of_month(year: i32, month: u32) -> TimeResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        TimeError::InvalidDate(format!("{}-{:02}-01 is not representable", year, month))
    })
}

/// One semester: an inclusive range of calendar days.
///
/// Serialized as its calendar and first day; the end is recomputed on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSemester", into = "RawSemester"))]
pub struct Semester {
    start: NaiveDate,
    end: NaiveDate,
    calendar: SemesterCalendar,
}

impl Semester {
    /// Semester containing `date` under the default calendar.
    pub fn containing<D: Datelike>(date: D) -> TimeResult<Self> {
        SemesterCalendar::default().semester_containing(date)
    }

    /// First day.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn calendar(&self) -> SemesterCalendar {
        self.calendar
    }

    /// 00:00 on the first day.
    pub fn start_of_day(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// Last representable instant of the last day.
    pub fn end_of_day(&self) -> NaiveDateTime {
        // `end` always has a successor, so this cannot overflow.
        self.end.and_time(NaiveTime::MIN) + TimeDelta::nanoseconds(NANOS_PER_DAY - 1)
    }

    pub fn contains<D: Datelike>(&self, date: D) -> bool {
        let key = (date.year(), date.ordinal());
        (self.start.year(), self.start.ordinal()) <= key
            && key <= (self.end.year(), self.end.ordinal())
    }

    pub fn next(&self) -> TimeResult<Self> {
        let day_after = self
            .end
            .succ_opt()
            .ok_or_else(|| TimeError::InvalidDate(format!("no day after {}", self.end)))?;
        self.calendar.semester_containing(day_after)
    }

    pub fn previous(&self) -> TimeResult<Self> {
        let day_before = self
            .start
            .pred_opt()
            .ok_or_else(|| TimeError::InvalidDate(format!("no day before {}", self.start)))?;
        self.calendar.semester_containing(day_before)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawSemester {
    calendar: SemesterCalendar,
    start: NaiveDate,
}

#[cfg(feature = "serde")]
impl From<Semester> for RawSemester {
    fn from(s: Semester) -> Self {
        Self {
            calendar: s.calendar,
            start: s.start,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawSemester> for Semester {
    type Error = TimeError;

    fn try_from(raw: RawSemester) -> TimeResult<Self> {
        let semester = raw.calendar.semester_containing(raw.start)?;
        if semester.start != raw.start {
            return Err(TimeError::InvalidDate(format!(
                "{} is not a semester start (expected {})",
                raw.start, semester.start
            )));
        }
        Ok(semester)
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

/// First day of the semester containing `date`, default calendar.
pub fn semester_start<D: Datelike>(date: D) -> TimeResult<NaiveDate> {
    Semester::containing(date).map(|s| s.start())
}

/// Last day of the semester containing `date`, default calendar.
pub fn semester_end<D: Datelike>(date: D) -> TimeResult<NaiveDate> {
    Semester::containing(date).map(|s| s.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_winter_dates_belong_to_previous_october() {
        for (m, d) in [(1, 1), (1, 31), (2, 29), (3, 31)] {
            let date = ymd(2024, m, d);
            assert_eq!(semester_start(date).unwrap(), ymd(2023, 10, 1));
            assert_eq!(semester_end(date).unwrap(), ymd(2024, 3, 31));
        }
    }

    #[test]
    fn test_summer_semester() {
        for m in 4..=9 {
            let date = ymd(2025, m, 15);
            assert_eq!(semester_start(date).unwrap(), ymd(2025, 4, 1));
            assert_eq!(semester_end(date).unwrap(), ymd(2025, 9, 30));
        }
    }

    #[test]
    fn test_autumn_dates_run_into_next_year() {
        for m in 10..=12 {
            let date = ymd(2023, m, 1);
            assert_eq!(semester_start(date).unwrap(), ymd(2023, 10, 1));
            assert_eq!(semester_end(date).unwrap(), ymd(2024, 3, 31));
        }
    }

    #[test]
    fn test_boundary_days() {
        assert_eq!(semester_start(ymd(2024, 4, 1)).unwrap(), ymd(2024, 4, 1));
        assert_eq!(semester_start(ymd(2024, 3, 31)).unwrap(), ymd(2023, 10, 1));
        assert_eq!(semester_start(ymd(2024, 9, 30)).unwrap(), ymd(2024, 4, 1));
        assert_eq!(semester_start(ymd(2024, 10, 1)).unwrap(), ymd(2024, 10, 1));
    }

    #[test]
    fn test_accepts_datetimes() {
        let dt = ymd(2024, 6, 10).and_hms_opt(18, 30, 0).unwrap();
        assert_eq!(semester_start(dt).unwrap(), ymd(2024, 4, 1));
        assert_eq!(semester_end(dt).unwrap(), ymd(2024, 9, 30));
    }

    #[test]
    fn test_input_is_untouched() {
        let date = ymd(2024, 1, 15);
        let _ = semester_start(date).unwrap();
        let _ = semester_end(date).unwrap();
        assert_eq!(date, ymd(2024, 1, 15));
    }

    #[test]
    fn test_semester_navigation() {
        let s = Semester::containing(ymd(2024, 6, 1)).unwrap();
        assert_eq!(s.to_string(), "2024-04-01/2024-09-30");

        let next = s.next().unwrap();
        assert_eq!(next.start(), ymd(2024, 10, 1));
        assert_eq!(next.end(), ymd(2025, 3, 31));

        let prev = s.previous().unwrap();
        assert_eq!(prev.start(), ymd(2023, 10, 1));
        assert_eq!(prev.next().unwrap(), s);
    }

    #[test]
    fn test_contains_and_start_of_day() {
        let s = Semester::containing(ymd(2024, 11, 5)).unwrap();
        assert!(s.contains(ymd(2024, 10, 1)));
        assert!(s.contains(ymd(2025, 3, 31)));
        assert!(!s.contains(ymd(2025, 4, 1)));
        assert!(!s.contains(ymd(2024, 9, 30)));
        assert_eq!(
            s.start_of_day(),
            ymd(2024, 10, 1).and_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            s.end_of_day(),
            ymd(2025, 3, 31).and_hms_nano_opt(23, 59, 59, 999_999_999).unwrap()
        );
        assert!(s.end_of_day() < s.next().unwrap().start_of_day());
    }

    #[test]
    fn test_custom_calendar() {
        let cal = SemesterCalendar::new(2, 8).unwrap();
        let s = cal.semester_containing(ymd(2024, 1, 10)).unwrap();
        assert_eq!(s.start(), ymd(2023, 8, 1));
        assert_eq!(s.end(), ymd(2024, 1, 31));

        let s = cal.semester_containing(ymd(2024, 2, 29)).unwrap();
        assert_eq!(s.end(), ymd(2024, 7, 31));
    }

    #[test]
    fn test_invalid_calendar() {
        assert!(matches!(
            SemesterCalendar::new(10, 4),
            Err(TimeError::InvalidCalendar(_))
        ));
        assert!(SemesterCalendar::new(0, 6).is_err());
        assert!(SemesterCalendar::new(6, 13).is_err());
        assert!(SemesterCalendar::new(6, 6).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_calendar_deserialization_is_validated() {
        let cal: SemesterCalendar =
            serde_json::from_str(r#"{"first_month":2,"second_month":8}"#).unwrap();
        assert_eq!(cal, SemesterCalendar::new(2, 8).unwrap());

        for json in [
            r#"{"first_month":10,"second_month":4}"#,
            r#"{"first_month":0,"second_month":6}"#,
            r#"{"first_month":6,"second_month":13}"#,
        ] {
            assert!(serde_json::from_str::<SemesterCalendar>(json).is_err(), "{json}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_semester_deserialization_recomputes_end() {
        let s = Semester::containing(ymd(2024, 11, 5)).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(
            json,
            r#"{"calendar":{"first_month":4,"second_month":10},"start":"2024-10-01"}"#
        );
        let back: Semester = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
        assert_eq!(back.end(), ymd(2025, 3, 31));

        let off_boundary = r#"{"calendar":{"first_month":4,"second_month":10},"start":"2024-10-02"}"#;
        assert!(serde_json::from_str::<Semester>(off_boundary).is_err());

        let reversed = r#"{"calendar":{"first_month":10,"second_month":4},"start":"2024-04-01"}"#;
        assert!(serde_json::from_str::<Semester>(reversed).is_err());
    }

    #[test]
    fn test_unrepresentable_year() {
        let date = NaiveDate::MAX;
        assert!(matches!(
            semester_end(date),
            Err(TimeError::InvalidDate(_))
        ));
    }
}
