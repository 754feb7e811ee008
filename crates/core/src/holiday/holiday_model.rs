use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// An inclusive calendar date range during which the holiday promotion is
/// eligible to apply.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl HolidayWindow {
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Thanksgiving day for `year`. Single-day window.
    ///
    /// `None` only for years outside the representable calendar range.
    pub fn thanksgiving(year: i32) -> Option<Self> {
        thanksgiving_day(year).map(Self::single)
    }

    /// Christmas day for `year`.
    pub fn christmas(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 12, 25).map(Self::single)
    }

    /// December 26 of `year` through January 1 of the following year,
    /// inclusive.
    pub fn new_year_span(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 12, 26)?;
        let end = NaiveDate::from_ymd_opt(year + 1, 1, 1)?;
        Some(Self { start, end })
    }

    /// The three promotional windows anchored in `year`.
    pub fn for_year(year: i32) -> Vec<HolidayWindow> {
        [
            Self::thanksgiving(year),
            Self::christmas(year),
            Self::new_year_span(year),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// The 4th Thursday of November: November's first Thursday falls on day
/// `(4 - weekday_of_nov_1 + 7) % 7 + 1` (Sunday = 0), three weeks later.
pub fn thanksgiving_day(year: i32) -> Option<NaiveDate> {
    let november_first = NaiveDate::from_ymd_opt(year, 11, 1)?;
    let weekday = november_first.weekday().num_days_from_sunday() as i64;
    let first_thursday = (4 - weekday + 7) % 7;
    november_first.checked_add_signed(Duration::days(first_thursday + 21))
}
