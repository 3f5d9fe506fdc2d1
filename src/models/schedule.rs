//! Shift scheduling models.
//!
//! This module defines the recurring shift pattern, its per-date exceptions,
//! concretely stored shifts, and the virtual shifts produced by expanding a
//! pattern over a month.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Minutes in a day, used when a shift's end time wraps past midnight.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// A weekly recurrence rule generating shifts on fixed weekdays.
///
/// Weekday numbers are 0-6 with Sunday as 0. An `end_time` at or before
/// `start_time` means the shift crosses midnight; its hours still attribute
/// to the start date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringShiftPattern {
    /// Unique identifier for the pattern.
    pub id: String,
    /// The staff member this pattern belongs to.
    pub staff_id: String,
    /// Weekday numbers (0-6, Sunday = 0) the pattern fires on.
    pub days_of_week: Vec<u8>,
    /// Time of day the shift starts.
    pub start_time: NaiveTime,
    /// Time of day the shift ends.
    pub end_time: NaiveTime,
    /// First date the pattern is valid from.
    pub valid_from: NaiveDate,
    /// Last date the pattern is valid, or `None` for an indefinite pattern.
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
    /// Whether shifts from this pattern count as overtime.
    #[serde(default)]
    pub is_overtime: bool,
    /// Hourly rate in `currency`.
    pub rate: Decimal,
    /// Currency code of the rate.
    pub currency: String,
}

impl RecurringShiftPattern {
    /// Checks whether this pattern fires on the given date.
    ///
    /// The date must fall inside the validity window and its weekday must be
    /// in the pattern's day set. Exception dates are handled by the expander,
    /// not here.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        if date < self.valid_from {
            return false;
        }
        if let Some(until) = self.valid_until {
            if date > until {
                return false;
            }
        }
        let weekday = date.weekday().num_days_from_sunday() as u8;
        self.days_of_week.contains(&weekday)
    }

    /// The length of one occurrence of this pattern in hours.
    pub fn shift_hours(&self) -> Decimal {
        let mut minutes = (self.end_time - self.start_time).num_minutes();
        if minutes <= 0 {
            minutes += MINUTES_PER_DAY;
        }
        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }
}

/// The reason a pattern occurrence was suppressed on a specific date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionKind {
    /// Suppressed because the staff member is on holiday.
    Holiday,
    /// Suppressed because of a recorded absence.
    Absence,
    /// Suppressed because the occurrence was cancelled.
    Cancelled,
}

/// Suppresses one occurrence of a pattern on one specific date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternException {
    /// The pattern being suppressed.
    pub pattern_id: String,
    /// The date the pattern must not fire on.
    pub date: NaiveDate,
    /// Why the occurrence is suppressed.
    pub kind: ExceptionKind,
}

/// A concretely stored shift row.
///
/// Takes precedence over any virtual shift for the same staff member and
/// date in day-based logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteShift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The staff member who worked the shift.
    pub staff_id: String,
    /// When the shift started.
    pub start_time: NaiveDateTime,
    /// When the shift ended.
    pub end_time: NaiveDateTime,
    /// Hourly rate in `currency`.
    pub rate: Decimal,
    /// Currency code of the rate.
    pub currency: String,
}

impl ConcreteShift {
    /// The calendar date the shift is attributed to (its start date).
    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// The worked duration of the shift in hours.
    pub fn worked_hours(&self) -> Decimal {
        let minutes = (self.end_time - self.start_time).num_minutes();
        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }
}

/// A shift generated by expanding a recurring pattern for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualShift {
    /// The date the shift falls on.
    pub date: NaiveDate,
    /// The pattern that generated this shift.
    pub pattern_id: String,
    /// Time of day the shift starts.
    pub start_time: NaiveTime,
    /// Time of day the shift ends.
    pub end_time: NaiveTime,
    /// The shift's length in hours.
    pub hours: Decimal,
    /// Hourly rate in `currency`.
    pub rate: Decimal,
    /// Currency code of the rate.
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M:%S").unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn create_weekday_pattern() -> RecurringShiftPattern {
        RecurringShiftPattern {
            id: "pattern_001".to_string(),
            staff_id: "staff_001".to_string(),
            // Monday to Friday
            days_of_week: vec![1, 2, 3, 4, 5],
            start_time: make_time("09:00:00"),
            end_time: make_time("17:00:00"),
            valid_from: make_date("2025-01-01"),
            valid_until: None,
            is_overtime: false,
            rate: dec("18.50"),
            currency: "GBP".to_string(),
        }
    }

    #[test]
    fn test_applies_on_matching_weekday() {
        let pattern = create_weekday_pattern();
        // 2026-03-02 is a Monday
        assert!(pattern.applies_on(make_date("2026-03-02")));
    }

    #[test]
    fn test_does_not_apply_on_weekend() {
        let pattern = create_weekday_pattern();
        // 2026-03-07 is a Saturday, 2026-03-08 a Sunday
        assert!(!pattern.applies_on(make_date("2026-03-07")));
        assert!(!pattern.applies_on(make_date("2026-03-08")));
    }

    #[test]
    fn test_does_not_apply_before_window() {
        let pattern = create_weekday_pattern();
        assert!(!pattern.applies_on(make_date("2024-12-31")));
    }

    #[test]
    fn test_does_not_apply_after_window_end() {
        let mut pattern = create_weekday_pattern();
        pattern.valid_until = Some(make_date("2026-02-28"));
        assert!(!pattern.applies_on(make_date("2026-03-02")));
    }

    #[test]
    fn test_applies_on_window_boundary_dates() {
        let mut pattern = create_weekday_pattern();
        // 2026-03-02 is a Monday; make the window exactly that day
        pattern.valid_from = make_date("2026-03-02");
        pattern.valid_until = Some(make_date("2026-03-02"));
        assert!(pattern.applies_on(make_date("2026-03-02")));
    }

    #[test]
    fn test_sunday_is_day_zero() {
        let mut pattern = create_weekday_pattern();
        pattern.days_of_week = vec![0];
        // 2026-03-08 is a Sunday
        assert!(pattern.applies_on(make_date("2026-03-08")));
        assert!(!pattern.applies_on(make_date("2026-03-09")));
    }

    #[test]
    fn test_shift_hours_same_day() {
        let pattern = create_weekday_pattern();
        assert_eq!(pattern.shift_hours(), dec("8"));
    }

    #[test]
    fn test_shift_hours_crossing_midnight() {
        let mut pattern = create_weekday_pattern();
        pattern.start_time = make_time("22:00:00");
        pattern.end_time = make_time("06:00:00");
        assert_eq!(pattern.shift_hours(), dec("8"));
    }

    #[test]
    fn test_concrete_shift_date_and_hours() {
        let shift = ConcreteShift {
            id: "shift_001".to_string(),
            staff_id: "staff_001".to_string(),
            start_time: make_datetime("2026-03-02", "09:00:00"),
            end_time: make_datetime("2026-03-02", "17:30:00"),
            rate: dec("18.50"),
            currency: "GBP".to_string(),
        };
        assert_eq!(shift.date(), make_date("2026-03-02"));
        assert_eq!(shift.worked_hours(), dec("8.5"));
    }

    #[test]
    fn test_overnight_concrete_shift_attributed_to_start_date() {
        let shift = ConcreteShift {
            id: "shift_002".to_string(),
            staff_id: "staff_001".to_string(),
            start_time: make_datetime("2026-03-02", "22:00:00"),
            end_time: make_datetime("2026-03-03", "06:00:00"),
            rate: dec("18.50"),
            currency: "GBP".to_string(),
        };
        assert_eq!(shift.date(), make_date("2026-03-02"));
        assert_eq!(shift.worked_hours(), dec("8"));
    }

    #[test]
    fn test_pattern_serialization_round_trip() {
        let pattern = create_weekday_pattern();
        let json = serde_json::to_string(&pattern).unwrap();
        let deserialized: RecurringShiftPattern = serde_json::from_str(&json).unwrap();
        assert_eq!(pattern, deserialized);
    }

    #[test]
    fn test_exception_deserialization() {
        let json = r#"{
            "pattern_id": "pattern_001",
            "date": "2026-03-06",
            "kind": "holiday"
        }"#;
        let exception: PatternException = serde_json::from_str(json).unwrap();
        assert_eq!(exception.pattern_id, "pattern_001");
        assert_eq!(exception.kind, ExceptionKind::Holiday);
    }
}
