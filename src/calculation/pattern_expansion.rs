//! Recurring pattern expansion.
//!
//! Expands weekly recurrence rules into concrete per-date virtual shifts for
//! a target month. A day may yield shifts from multiple patterns; day-based
//! consumers (holiday-worked, overtime-day counting) must drop virtual dates
//! that already have a concrete shift via [`effective_virtual_dates`].
//!
//! Note on hours aggregation: when two patterns for the same staff member
//! overlap in time on the same day, their hours accumulate independently.
//! Whether that double-counts is an open product question; this module
//! preserves the observed additive behavior rather than deduplicating.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;

use crate::models::{PatternException, PayrollMonth, RecurringShiftPattern, VirtualShift};

/// Expands patterns into virtual shifts for every day of the month.
///
/// For each calendar day, every pattern active on that day (day inside the
/// validity window, weekday in the pattern's day set, date not excepted for
/// that pattern) emits one virtual shift with the pattern's times and rate.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::expand_patterns;
/// use payroll_engine::models::{PayrollMonth, RecurringShiftPattern};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let pattern = RecurringShiftPattern {
///     id: "pattern_001".to_string(),
///     staff_id: "staff_001".to_string(),
///     days_of_week: vec![1], // Mondays
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     valid_from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     valid_until: None,
///     is_overtime: false,
///     rate: Decimal::new(1850, 2),
///     currency: "GBP".to_string(),
/// };
/// let month = PayrollMonth::containing(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
///
/// // March 2026 has five Mondays.
/// let shifts = expand_patterns(&[pattern], &[], &month);
/// assert_eq!(shifts.len(), 5);
/// ```
pub fn expand_patterns(
    patterns: &[RecurringShiftPattern],
    exceptions: &[PatternException],
    month: &PayrollMonth,
) -> Vec<VirtualShift> {
    let excepted: HashSet<(&str, NaiveDate)> = exceptions
        .iter()
        .map(|e| (e.pattern_id.as_str(), e.date))
        .collect();

    let mut shifts = Vec::new();
    for date in month.days() {
        for pattern in patterns {
            if !pattern.applies_on(date) {
                continue;
            }
            if excepted.contains(&(pattern.id.as_str(), date)) {
                continue;
            }
            shifts.push(VirtualShift {
                date,
                pattern_id: pattern.id.clone(),
                start_time: pattern.start_time,
                end_time: pattern.end_time,
                hours: pattern.shift_hours(),
                rate: pattern.rate,
                currency: pattern.currency.clone(),
            });
        }
    }
    shifts
}

/// Returns the distinct set of month dates matched by any of the patterns.
///
/// Applies the same window/weekday/exception rules as [`expand_patterns`];
/// a date matched by several patterns appears once.
pub fn pattern_dates<'a, I>(
    patterns: I,
    exceptions: &[PatternException],
    month: &PayrollMonth,
) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = &'a RecurringShiftPattern>,
{
    let excepted: HashSet<(&str, NaiveDate)> = exceptions
        .iter()
        .map(|e| (e.pattern_id.as_str(), e.date))
        .collect();

    let patterns: Vec<&RecurringShiftPattern> = patterns.into_iter().collect();
    let mut dates = BTreeSet::new();
    for date in month.days() {
        let matched = patterns.iter().any(|pattern| {
            pattern.applies_on(date) && !excepted.contains(&(pattern.id.as_str(), date))
        });
        if matched {
            dates.insert(date);
        }
    }
    dates
}

/// Filters virtual shift dates down to those without a concrete shift.
///
/// A concrete shift suppresses any virtual shift on the same staff+date, so
/// day-based consumers count each date at most once.
pub fn effective_virtual_dates(
    virtual_shifts: &[VirtualShift],
    concrete_dates: &BTreeSet<NaiveDate>,
) -> BTreeSet<NaiveDate> {
    virtual_shifts
        .iter()
        .map(|s| s.date)
        .filter(|d| !concrete_dates.contains(d))
        .collect()
}
