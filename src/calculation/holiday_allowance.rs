//! Holiday allowance calculation.
//!
//! Annual entitlement and pro-rata accrual are computed within a fixed
//! holiday year running June 1 to May 31, independent of the calendar year.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

/// Annual allowance in days for staff employed less than a year, and the
/// default when no employment start date is recorded.
pub const BASE_ANNUAL_ALLOWANCE: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Annual allowance in days after one full year of employment.
pub const LONG_SERVICE_ALLOWANCE: Decimal = Decimal::from_parts(18, 0, 0, false, 0);

/// The month the holiday year starts in (June).
pub const HOLIDAY_YEAR_START_MONTH: u32 = 6;

/// Days used to convert an elapsed employment span into years.
const DAYS_PER_YEAR: Decimal = Decimal::from_parts(365, 0, 0, false, 0);

/// The result of a holiday allowance calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayAllowance {
    /// The full annual entitlement in days.
    pub annual_allowance: Decimal,
    /// Days accrued so far in the current holiday year.
    pub accrued_allowance: Decimal,
    /// Elapsed employment expressed in years (plain 365-day ratio).
    pub years_employed: Decimal,
    /// True when the accrual was prorated for a mid-year start.
    pub is_pro_rata: bool,
}

/// Returns the holiday-year window containing the given date.
///
/// If the date's month is June or later the window is
/// `[Jun 1 this year, May 31 next year]`, otherwise
/// `[Jun 1 last year, May 31 this year]`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::holiday_year_window;
/// use chrono::NaiveDate;
///
/// let (start, end) = holiday_year_window(NaiveDate::from_ymd_opt(2026, 7, 15).unwrap());
/// assert_eq!(start, NaiveDate::from_ymd_opt(2026, 6, 1).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2027, 5, 31).unwrap());
///
/// let (start, end) = holiday_year_window(NaiveDate::from_ymd_opt(2026, 2, 15).unwrap());
/// assert_eq!(start, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2026, 5, 31).unwrap());
/// ```
pub fn holiday_year_window(as_of: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start_year = if as_of.month() >= HOLIDAY_YEAR_START_MONTH {
        as_of.year()
    } else {
        as_of.year() - 1
    };
    let start = NaiveDate::from_ymd_opt(start_year, HOLIDAY_YEAR_START_MONTH, 1)
        .expect("June 1 exists in every year");
    let end =
        NaiveDate::from_ymd_opt(start_year + 1, 5, 31).expect("May 31 exists in every year");
    (start, end)
}

/// Computes annual entitlement and pro-rata accrual for a staff member.
///
/// # Arguments
///
/// * `employment_start` - The date employment started; `None` yields the
///   flat default allowance, fully accrued.
/// * `as_of` - The date the accrual is evaluated at.
///
/// # Rules
///
/// * Entitlement steps from 15 to 18 days at one full year of service.
/// * A start on or before the holiday-year window start accrues the full
///   annual allowance.
/// * A mid-window start accrues proportionally to the inclusive days
///   employed within the window, rounded to one decimal place.
pub fn calculate_holiday_allowance(
    employment_start: Option<NaiveDate>,
    as_of: NaiveDate,
) -> HolidayAllowance {
    let Some(start) = employment_start else {
        return HolidayAllowance {
            annual_allowance: BASE_ANNUAL_ALLOWANCE,
            accrued_allowance: BASE_ANNUAL_ALLOWANCE,
            years_employed: Decimal::ZERO,
            is_pro_rata: false,
        };
    };

    let years_employed = Decimal::from((as_of - start).num_days()) / DAYS_PER_YEAR;
    let annual_allowance = if years_employed >= Decimal::ONE {
        LONG_SERVICE_ALLOWANCE
    } else {
        BASE_ANNUAL_ALLOWANCE
    };

    let (window_start, window_end) = holiday_year_window(as_of);
    if start <= window_start {
        return HolidayAllowance {
            annual_allowance,
            accrued_allowance: annual_allowance,
            years_employed,
            is_pro_rata: false,
        };
    }

    // Inclusive day counts: the start day and the window end both count.
    let days_employed = Decimal::from((window_end - start).num_days() + 1);
    let window_days = Decimal::from((window_end - window_start).num_days() + 1);
    let fraction = (days_employed / window_days)
        .min(Decimal::ONE)
        .max(Decimal::ZERO);
    let accrued_allowance = (annual_allowance * fraction)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);

    HolidayAllowance {
        annual_allowance,
        accrued_allowance,
        years_employed,
        is_pro_rata: true,
    }
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

    #[test]
    fn test_no_start_date_gives_flat_default() {
        let allowance = calculate_holiday_allowance(None, make_date("2026-03-15"));
        assert_eq!(allowance.annual_allowance, dec("15"));
        assert_eq!(allowance.accrued_allowance, dec("15"));
        assert_eq!(allowance.years_employed, Decimal::ZERO);
        assert!(!allowance.is_pro_rata);
    }

    #[test]
    fn test_allowance_steps_to_18_at_one_year() {
        // Exactly 365 days of service.
        let allowance =
            calculate_holiday_allowance(Some(make_date("2025-03-15")), make_date("2026-03-15"));
        assert_eq!(allowance.annual_allowance, dec("18"));
    }

    #[test]
    fn test_allowance_is_15_just_under_one_year() {
        let allowance =
            calculate_holiday_allowance(Some(make_date("2025-03-16")), make_date("2026-03-15"));
        assert_eq!(allowance.annual_allowance, dec("15"));
    }

    #[test]
    fn test_window_selection_before_june() {
        let (start, end) = holiday_year_window(make_date("2026-05-31"));
        assert_eq!(start, make_date("2025-06-01"));
        assert_eq!(end, make_date("2026-05-31"));
    }

    #[test]
    fn test_window_selection_in_june() {
        let (start, end) = holiday_year_window(make_date("2026-06-01"));
        assert_eq!(start, make_date("2026-06-01"));
        assert_eq!(end, make_date("2027-05-31"));
    }

    #[test]
    fn test_start_on_window_start_fully_accrued() {
        let allowance =
            calculate_holiday_allowance(Some(make_date("2025-06-01")), make_date("2026-03-15"));
        assert!(!allowance.is_pro_rata);
        assert_eq!(allowance.accrued_allowance, allowance.annual_allowance);
    }

    #[test]
    fn test_start_before_window_fully_accrued() {
        let allowance =
            calculate_holiday_allowance(Some(make_date("2020-01-01")), make_date("2026-03-15"));
        assert!(!allowance.is_pro_rata);
        assert_eq!(allowance.annual_allowance, dec("18"));
        assert_eq!(allowance.accrued_allowance, dec("18"));
    }

    #[test]
    fn test_mid_window_start_is_prorated() {
        // Start Dec 1, 2025; window [2025-06-01, 2026-05-31] has 365 days,
        // Dec 1 through May 31 is 182 days inclusive.
        // 15 * 182/365 = 7.479... -> 7.5 at one decimal place.
        let allowance =
            calculate_holiday_allowance(Some(make_date("2025-12-01")), make_date("2026-03-15"));
        assert!(allowance.is_pro_rata);
        assert_eq!(allowance.annual_allowance, dec("15"));
        assert_eq!(allowance.accrued_allowance, dec("7.5"));
    }

    #[test]
    fn test_accrual_rounds_to_one_decimal() {
        // Start Mar 1, 2026; Mar 1 through May 31 is 92 days inclusive.
        // 15 * 92/365 = 3.7808... -> 3.8.
        let allowance =
            calculate_holiday_allowance(Some(make_date("2026-03-01")), make_date("2026-03-15"));
        assert!(allowance.is_pro_rata);
        assert_eq!(allowance.accrued_allowance, dec("3.8"));
    }

    #[test]
    fn test_future_start_accrues_nothing_negative() {
        // Start after the as-of date, still inside the window.
        let allowance =
            calculate_holiday_allowance(Some(make_date("2026-05-01")), make_date("2026-03-15"));
        assert!(allowance.is_pro_rata);
        assert!(allowance.accrued_allowance >= Decimal::ZERO);
    }

    #[test]
    fn test_years_employed_is_simple_ratio() {
        let allowance =
            calculate_holiday_allowance(Some(make_date("2024-03-15")), make_date("2026-03-15"));
        // 730 days / 365 = 2.
        assert_eq!(allowance.years_employed, dec("2"));
    }
}
