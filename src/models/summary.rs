//! Payroll summary models.
//!
//! This module contains the per-staff [`StaffPaySummary`] and the month-level
//! [`MonthlyPayrollSummary`] emitted by the aggregator. Both are pure values:
//! identical inputs produce identical summaries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayrollMonth;

/// One public-holiday day a staff member worked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayShiftRecord {
    /// The date of the worked holiday.
    pub date: NaiveDate,
    /// The holiday's name.
    pub holiday_name: String,
}

/// The complete pay computation for one staff member for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffPaySummary {
    /// The staff member the summary is for.
    pub staff_id: String,
    /// The staff member's base currency; all amounts below except
    /// `total_pay_reporting` are in this currency.
    pub currency: String,
    /// Base salary normalized to a per-calendar-month figure.
    pub monthly_base_salary: Decimal,
    /// One-off bonus records plus active recurring bonuses.
    pub bonuses: Decimal,
    /// Sum of expense records in the month.
    pub expenses: Decimal,
    /// Sum of deduction records in the month.
    pub deductions: Decimal,
    /// Total overtime days from approved requests and overtime patterns.
    pub overtime_days: Decimal,
    /// Total overtime pay: manual records plus the day-derived amount.
    pub overtime_pay: Decimal,
    /// Number of public-holiday days worked.
    pub holiday_worked_days: u32,
    /// Bonus paid for public-holiday days worked.
    pub holiday_worked_bonus: Decimal,
    /// The individual worked holidays behind the bonus.
    pub holiday_shifts: Vec<HolidayShiftRecord>,
    /// Accrued-but-unused holiday days paid out (non-zero only in June).
    pub unused_holiday_days: Decimal,
    /// Payout for accrued-but-unused holiday days.
    pub unused_holiday_payout: Decimal,
    /// Total pay in the staff member's base currency.
    pub total_pay: Decimal,
    /// Total pay converted to the reporting currency.
    pub total_pay_reporting: Decimal,
    /// True when a salary record is already posted for the month.
    pub has_salary_record: bool,
}

/// The month-level payroll result across all payable staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPayrollSummary {
    /// The month the computation ran over.
    pub month: PayrollMonth,
    /// The currency `total_reporting` is expressed in.
    pub reporting_currency: String,
    /// Per-staff summaries, ordered by staff id.
    pub staff: Vec<StaffPaySummary>,
    /// Sum of all staff totals in the reporting currency.
    pub total_reporting: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_summary() -> StaffPaySummary {
        StaffPaySummary {
            staff_id: "staff_001".to_string(),
            currency: "USD".to_string(),
            monthly_base_salary: dec("2000"),
            bonuses: dec("0"),
            expenses: dec("0"),
            deductions: dec("0"),
            overtime_days: dec("0"),
            overtime_pay: dec("0"),
            holiday_worked_days: 1,
            holiday_worked_bonus: dec("50"),
            holiday_shifts: vec![HolidayShiftRecord {
                date: NaiveDate::from_ymd_opt(2026, 4, 6).unwrap(),
                holiday_name: "Easter Monday".to_string(),
            }],
            unused_holiday_days: dec("0"),
            unused_holiday_payout: dec("0"),
            total_pay: dec("2050"),
            total_pay_reporting: dec("1619.50"),
            has_salary_record: false,
        }
    }

    #[test]
    fn test_staff_summary_round_trip() {
        let summary = create_summary();
        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: StaffPaySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }

    #[test]
    fn test_monthly_summary_serialization() {
        let monthly = MonthlyPayrollSummary {
            month: PayrollMonth::containing(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()),
            reporting_currency: "GBP".to_string(),
            staff: vec![create_summary()],
            total_reporting: dec("1619.50"),
        };

        let json = serde_json::to_string(&monthly).unwrap();
        assert!(json.contains("\"reporting_currency\":\"GBP\""));
        assert!(json.contains("\"total_reporting\":\"1619.50\""));
        assert!(json.contains("\"holiday_name\":\"Easter Monday\""));
    }
}
