//! Calendar helpers: today, week bounds, month labels, date parsing.

use crate::errors::{AppError, AppResult};
use crate::models::Timestamp;
use chrono::{Datelike, Days, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// First day of the calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Days elapsed between the start of the week and `day`.
    fn days_into_week(&self, day: NaiveDate) -> u64 {
        let n = match self {
            WeekStart::Monday => day.weekday().num_days_from_monday(),
            WeekStart::Sunday => day.weekday().num_days_from_sunday(),
        };
        n as u64
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> Timestamp {
    Local::now().fixed_offset()
}

/// First and last day (inclusive) of the week containing `day`.
pub fn week_bounds(day: NaiveDate, start: WeekStart) -> (NaiveDate, NaiveDate) {
    let first = day
        .checked_sub_days(Days::new(start.days_into_week(day)))
        .unwrap_or(NaiveDate::MIN);
    let last = first.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
    (first, last)
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// "January 2024"
pub fn month_year_label(d: NaiveDate) -> String {
    d.format("%B %Y").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Noon of `d` in the local timezone; used when a workout or deadline is
/// given as a bare date.
pub fn at_local_noon(d: NaiveDate) -> AppResult<Timestamp> {
    let naive = d
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| AppError::InvalidDate(d.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn monday_week_bounds() {
        // 2024-01-17 is a Wednesday
        let (first, last) = week_bounds(d(2024, 1, 17), WeekStart::Monday);
        assert_eq!(first, d(2024, 1, 15));
        assert_eq!(last, d(2024, 1, 21));
    }

    #[test]
    fn sunday_week_bounds() {
        let (first, last) = week_bounds(d(2024, 1, 17), WeekStart::Sunday);
        assert_eq!(first, d(2024, 1, 14));
        assert_eq!(last, d(2024, 1, 20));
    }

    #[test]
    fn week_bounds_on_the_boundary_days() {
        let (first, last) = week_bounds(d(2024, 1, 21), WeekStart::Monday);
        assert_eq!((first, last), (d(2024, 1, 15), d(2024, 1, 21)));
        let (first, _) = week_bounds(d(2024, 1, 15), WeekStart::Monday);
        assert_eq!(first, d(2024, 1, 15));
    }

    #[test]
    fn month_label() {
        assert_eq!(month_year_label(d(2024, 1, 3)), "January 2024");
    }

    #[test]
    fn local_noon_keeps_the_date() {
        let ts = at_local_noon(d(2024, 3, 9)).unwrap();
        assert_eq!(ts.date_naive(), d(2024, 3, 9));
    }
}
