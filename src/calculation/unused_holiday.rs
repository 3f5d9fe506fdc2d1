//! Unused-holiday payout calculation.
//!
//! Active only in June, the closing month of the holiday year. Days accrued
//! over `[Jun 1 (y-1), May 31 y]` that were not taken are paid out at the
//! staff member's daily rate.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{AbsenceType, ApprovalStatus, HolidayAbsenceRecord, PayrollMonth};

use super::holiday_allowance::{HOLIDAY_YEAR_START_MONTH, calculate_holiday_allowance};
use super::overtime::WORKING_DAYS_PER_MONTH;

/// The result of the unused-holiday payout calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct UnusedHolidayPayout {
    /// Days accrued in the closed holiday year.
    pub accrued_allowance: Decimal,
    /// Approved holiday days taken in the closed holiday year.
    pub days_taken: Decimal,
    /// `max(0, accrued - taken)`.
    pub unused_days: Decimal,
    /// The payout amount in the staff member's base currency.
    pub payout: Decimal,
}

impl UnusedHolidayPayout {
    fn zero() -> Self {
        Self {
            accrued_allowance: Decimal::ZERO,
            days_taken: Decimal::ZERO,
            unused_days: Decimal::ZERO,
            payout: Decimal::ZERO,
        }
    }
}

/// Calculates the year-end payout for accrued-but-unused holiday days.
///
/// Returns a zeroed result for any month other than June. Days taken are
/// summed over the staff member's approved `holiday`-type absences whose
/// start date falls in the holiday year that closed on May 31. The accrual
/// is the holiday-allowance figure evaluated on that closing day, so the
/// selected window is exactly the year being paid out.
pub fn calculate_unused_holiday_payout(
    employment_start: Option<NaiveDate>,
    absences: &[HolidayAbsenceRecord],
    monthly_base_salary: Decimal,
    month: &PayrollMonth,
) -> UnusedHolidayPayout {
    if !month.is_year_end() {
        return UnusedHolidayPayout::zero();
    }

    let window_start = NaiveDate::from_ymd_opt(month.year() - 1, HOLIDAY_YEAR_START_MONTH, 1)
        .expect("June 1 exists in every year");
    let window_end =
        NaiveDate::from_ymd_opt(month.year(), 5, 31).expect("May 31 exists in every year");

    let days_taken: Decimal = absences
        .iter()
        .filter(|a| {
            a.status == ApprovalStatus::Approved && a.absence_type == AbsenceType::Holiday
        })
        .filter(|a| a.start_date >= window_start && a.start_date <= window_end)
        .map(|a| a.days_taken)
        .sum();

    let accrued_allowance =
        calculate_holiday_allowance(employment_start, window_end).accrued_allowance;
    let unused_days = (accrued_allowance - days_taken).max(Decimal::ZERO);
    let payout = monthly_base_salary / WORKING_DAYS_PER_MONTH * unused_days;

    UnusedHolidayPayout {
        accrued_allowance,
        days_taken,
        unused_days,
        payout,
    }
}
