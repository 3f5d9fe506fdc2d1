//! Target month model.
//!
//! This module defines [`PayrollMonth`], the calendar month a payroll
//! computation runs over. Any date within a month identifies it.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The month of June, in which the holiday year closes.
const YEAR_END_MONTH: u32 = 6;

/// A calendar month targeted by a payroll computation.
///
/// Constructed from any date within the month; exposes the month's first and
/// last day and iteration over its days.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollMonth;
/// use chrono::NaiveDate;
///
/// let month = PayrollMonth::containing(NaiveDate::from_ymd_opt(2026, 3, 17).unwrap());
/// assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
/// assert_eq!(month.last_day(), NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
/// assert!(!month.is_year_end());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayrollMonth {
    year: i32,
    month: u32,
}

impl PayrollMonth {
    /// Returns the month containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Builds a month from a year and a 1-based month number.
    ///
    /// Returns `None` if the month number is out of range.
    pub fn from_parts(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// The calendar year of this month.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The 1-based month number.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month validated on construction")
    }

    /// The last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .expect("month validated on construction")
    }

    /// Iterates over every day of the month in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last_day();
        self.first_day().iter_days().take_while(move |d| *d <= last)
    }

    /// Checks whether a date falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// True when this is June, the closing month of the holiday year.
    pub fn is_year_end(&self) -> bool {
        self.month == YEAR_END_MONTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_containing_any_day_of_month() {
        let month = PayrollMonth::containing(make_date("2026-02-14"));
        assert_eq!(month.year(), 2026);
        assert_eq!(month.month(), 2);
    }

    #[test]
    fn test_first_and_last_day() {
        let month = PayrollMonth::containing(make_date("2026-02-14"));
        assert_eq!(month.first_day(), make_date("2026-02-01"));
        assert_eq!(month.last_day(), make_date("2026-02-28"));
    }

    #[test]
    fn test_last_day_of_leap_february() {
        let month = PayrollMonth::containing(make_date("2028-02-01"));
        assert_eq!(month.last_day(), make_date("2028-02-29"));
    }

    #[test]
    fn test_last_day_of_december() {
        let month = PayrollMonth::containing(make_date("2026-12-25"));
        assert_eq!(month.last_day(), make_date("2026-12-31"));
    }

    #[test]
    fn test_days_covers_whole_month() {
        let month = PayrollMonth::containing(make_date("2026-04-10"));
        let days: Vec<NaiveDate> = month.days().collect();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0], make_date("2026-04-01"));
        assert_eq!(days[29], make_date("2026-04-30"));
    }

    #[test]
    fn test_contains() {
        let month = PayrollMonth::containing(make_date("2026-04-10"));
        assert!(month.contains(make_date("2026-04-01")));
        assert!(month.contains(make_date("2026-04-30")));
        assert!(!month.contains(make_date("2026-05-01")));
        assert!(!month.contains(make_date("2025-04-10")));
    }

    #[test]
    fn test_june_is_year_end() {
        assert!(PayrollMonth::containing(make_date("2026-06-15")).is_year_end());
        assert!(!PayrollMonth::containing(make_date("2026-07-15")).is_year_end());
    }

    #[test]
    fn test_from_parts_rejects_invalid_month() {
        assert!(PayrollMonth::from_parts(2026, 13).is_none());
        assert!(PayrollMonth::from_parts(2026, 0).is_none());
        assert!(PayrollMonth::from_parts(2026, 6).is_some());
    }

    #[test]
    fn test_serialization_round_trip() {
        let month = PayrollMonth::containing(make_date("2026-06-15"));
        let json = serde_json::to_string(&month).unwrap();
        let deserialized: PayrollMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(month, deserialized);
    }
}
