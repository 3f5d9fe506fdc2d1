//! Holiday-worked bonus calculation.
//!
//! Cross-references the month's concrete and virtual shift dates against the
//! public-holiday calendar. Each holiday day worked pays a half daily rate on
//! top of salary; the base pay for the day is assumed already included.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    ConcreteShift, HolidayShiftRecord, PayrollMonth, PublicHoliday, VirtualShift,
};

use super::overtime::WORKING_DAYS_PER_MONTH;

/// Multiplier applied to the daily rate for each holiday day worked.
pub const HOLIDAY_WORKED_MULTIPLIER: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// The result of the holiday-worked bonus calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayWorkedBonus {
    /// The bonus amount in the staff member's base currency.
    pub bonus: Decimal,
    /// Number of distinct public-holiday days worked.
    pub days_worked: u32,
    /// The worked holidays, ordered by date.
    pub holiday_shifts: Vec<HolidayShiftRecord>,
}

/// Calculates the holiday-worked bonus for one staff member and month.
///
/// Concrete shifts are scanned first; virtual shifts only count on dates
/// without a concrete shift. A holiday date is counted at most once however
/// many shifts fall on it.
///
/// `bonus = days_worked * (monthly_base_salary / 20) * 0.5`
pub fn calculate_holiday_worked(
    concrete_shifts: &[ConcreteShift],
    virtual_shifts: &[VirtualShift],
    holidays: &[PublicHoliday],
    monthly_base_salary: Decimal,
    month: &PayrollMonth,
) -> HolidayWorkedBonus {
    let holiday_names: BTreeMap<NaiveDate, &str> = holidays
        .iter()
        .filter(|h| month.contains(h.date))
        .map(|h| (h.date, h.name.as_str()))
        .collect();

    let concrete_dates: BTreeSet<NaiveDate> = concrete_shifts
        .iter()
        .map(|s| s.date())
        .filter(|d| month.contains(*d))
        .collect();

    let mut counted: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut holiday_shifts = Vec::new();

    for date in &concrete_dates {
        if let Some(name) = holiday_names.get(date) {
            if counted.insert(*date) {
                holiday_shifts.push(HolidayShiftRecord {
                    date: *date,
                    holiday_name: (*name).to_string(),
                });
            }
        }
    }

    for shift in virtual_shifts {
        if !month.contains(shift.date)
            || concrete_dates.contains(&shift.date)
            || counted.contains(&shift.date)
        {
            continue;
        }
        if let Some(name) = holiday_names.get(&shift.date) {
            counted.insert(shift.date);
            holiday_shifts.push(HolidayShiftRecord {
                date: shift.date,
                holiday_name: (*name).to_string(),
            });
        }
    }

    holiday_shifts.sort_by_key(|s| s.date);

    let days_worked = counted.len() as u32;
    let daily_rate = monthly_base_salary / WORKING_DAYS_PER_MONTH;
    let bonus = Decimal::from(days_worked) * daily_rate * HOLIDAY_WORKED_MULTIPLIER;

    HolidayWorkedBonus {
        bonus,
        days_worked,
        holiday_shifts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, NaiveTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M:%S").unwrap()
    }

    fn april() -> PayrollMonth {
        PayrollMonth::containing(make_date("2026-04-01"))
    }

    fn create_concrete(date: &str) -> ConcreteShift {
        ConcreteShift {
            id: format!("shift_{}", date),
            staff_id: "staff_001".to_string(),
            start_time: make_datetime(date, "09:00:00"),
            end_time: make_datetime(date, "17:00:00"),
            rate: dec("18.50"),
            currency: "GBP".to_string(),
        }
    }

    fn create_virtual(date: &str) -> VirtualShift {
        VirtualShift {
            date: make_date(date),
            pattern_id: "pattern_001".to_string(),
            start_time: make_time("09:00:00"),
            end_time: make_time("17:00:00"),
            hours: dec("8"),
            rate: dec("18.50"),
            currency: "GBP".to_string(),
        }
    }

    fn create_holiday(date: &str, name: &str) -> PublicHoliday {
        PublicHoliday {
            date: make_date(date),
            name: name.to_string(),
            is_estimated: false,
        }
    }

    #[test]
    fn test_concrete_shift_on_holiday_earns_bonus() {
        let holidays = vec![create_holiday("2026-04-06", "Easter Monday")];
        let shifts = vec![create_concrete("2026-04-06")];

        let result = calculate_holiday_worked(&shifts, &[], &holidays, dec("2000"), &april());

        assert_eq!(result.days_worked, 1);
        // 1 * (2000/20) * 0.5 = 50.
        assert_eq!(result.bonus, dec("50"));
        assert_eq!(result.holiday_shifts.len(), 1);
        assert_eq!(result.holiday_shifts[0].holiday_name, "Easter Monday");
    }

    #[test]
    fn test_virtual_shift_on_holiday_earns_bonus() {
        let holidays = vec![create_holiday("2026-04-06", "Easter Monday")];
        let shifts = vec![create_virtual("2026-04-06")];

        let result = calculate_holiday_worked(&[], &shifts, &holidays, dec("2000"), &april());
        assert_eq!(result.days_worked, 1);
        assert_eq!(result.bonus, dec("50"));
    }

    #[test]
    fn test_concrete_and_virtual_on_same_holiday_count_once() {
        let holidays = vec![create_holiday("2026-04-06", "Easter Monday")];
        let concrete = vec![create_concrete("2026-04-06")];
        let virtual_shifts = vec![create_virtual("2026-04-06")];

        let result = calculate_holiday_worked(
            &concrete,
            &virtual_shifts,
            &holidays,
            dec("2000"),
            &april(),
        );
        assert_eq!(result.days_worked, 1);
        assert_eq!(result.bonus, dec("50"));
    }

    #[test]
    fn test_shift_on_ordinary_day_earns_nothing() {
        let holidays = vec![create_holiday("2026-04-06", "Easter Monday")];
        let shifts = vec![create_concrete("2026-04-07")];

        let result = calculate_holiday_worked(&shifts, &[], &holidays, dec("2000"), &april());
        assert_eq!(result.days_worked, 0);
        assert_eq!(result.bonus, Decimal::ZERO);
        assert!(result.holiday_shifts.is_empty());
    }

    #[test]
    fn test_holiday_outside_month_ignored() {
        let holidays = vec![create_holiday("2026-05-04", "Early May Bank Holiday")];
        let shifts = vec![create_concrete("2026-05-04")];

        let result = calculate_holiday_worked(&shifts, &[], &holidays, dec("2000"), &april());
        assert_eq!(result.days_worked, 0);
    }

    #[test]
    fn test_multiple_holidays_accumulate() {
        let holidays = vec![
            create_holiday("2026-04-03", "Good Friday"),
            create_holiday("2026-04-06", "Easter Monday"),
        ];
        let shifts = vec![create_concrete("2026-04-03"), create_concrete("2026-04-06")];

        let result = calculate_holiday_worked(&shifts, &[], &holidays, dec("2000"), &april());
        assert_eq!(result.days_worked, 2);
        assert_eq!(result.bonus, dec("100"));
        assert_eq!(result.holiday_shifts[0].date, make_date("2026-04-03"));
        assert_eq!(result.holiday_shifts[1].date, make_date("2026-04-06"));
    }

    #[test]
    fn test_two_concrete_shifts_same_holiday_count_once() {
        let holidays = vec![create_holiday("2026-04-06", "Easter Monday")];
        let mut second = create_concrete("2026-04-06");
        second.id = "shift_late".to_string();
        second.start_time = make_datetime("2026-04-06", "18:00:00");
        second.end_time = make_datetime("2026-04-06", "22:00:00");
        let shifts = vec![create_concrete("2026-04-06"), second];

        let result = calculate_holiday_worked(&shifts, &[], &holidays, dec("2000"), &april());
        assert_eq!(result.days_worked, 1);
    }

    #[test]
    fn test_no_shifts_no_bonus() {
        let holidays = vec![create_holiday("2026-04-06", "Easter Monday")];
        let result = calculate_holiday_worked(&[], &[], &holidays, dec("2000"), &april());
        assert_eq!(result.days_worked, 0);
        assert_eq!(result.bonus, Decimal::ZERO);
    }
}
