//! Payroll aggregation.
//!
//! Composes the individual calculators into a per-staff monthly summary and
//! a month-level total. The aggregator is a pure function of its snapshot:
//! identical inputs produce identical outputs, and re-running after any
//! upstream mutation is the only update mode.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    MonthlyPayrollSummary, PayRecordKind, PayrollMonth, PayrollSnapshot, StaffPayProfile,
    StaffPaySummary,
};

use super::currency::ExchangeRateTable;
use super::holiday_worked::calculate_holiday_worked;
use super::overtime::resolve_overtime;
use super::pattern_expansion::expand_patterns;
use super::salary::normalize_monthly_salary;
use super::unused_holiday::calculate_unused_holiday_payout;

/// Computes one staff member's pay summary for the target month.
///
/// Returns `None` when the staff member has no configured positive base
/// salary; such staff are excluded from payroll entirely.
pub fn compute_staff_summary(
    staff: &StaffPayProfile,
    snapshot: &PayrollSnapshot,
    rates: &ExchangeRateTable,
    month: &PayrollMonth,
) -> Option<StaffPaySummary> {
    let base_salary = staff.base_salary.filter(|s| *s > Decimal::ZERO)?;
    let monthly_base_salary = normalize_monthly_salary(base_salary, staff.pay_frequency);

    let records: Vec<_> = snapshot
        .pay_records
        .iter()
        .filter(|r| r.staff_id == staff.id && month.contains(r.pay_date))
        .cloned()
        .collect();

    let one_off_bonuses: Decimal = records
        .iter()
        .filter(|r| r.kind == PayRecordKind::Bonus)
        .map(|r| r.amount)
        .sum();
    let recurring_bonuses: Decimal = snapshot
        .recurring_bonuses
        .iter()
        .filter(|b| b.staff_id == staff.id && b.covers(month))
        .map(|b| b.amount)
        .sum();
    let bonuses = one_off_bonuses + recurring_bonuses;

    let expenses: Decimal = records
        .iter()
        .filter(|r| r.kind == PayRecordKind::Expense)
        .map(|r| r.amount)
        .sum();
    let deductions: Decimal = records
        .iter()
        .filter(|r| r.kind == PayRecordKind::Deduction)
        .map(|r| r.amount)
        .sum();
    let has_salary_record = records.iter().any(|r| r.kind == PayRecordKind::Salary);

    let patterns: Vec<_> = snapshot
        .patterns
        .iter()
        .filter(|p| p.staff_id == staff.id)
        .cloned()
        .collect();
    let concrete_shifts: Vec<_> = snapshot
        .shifts
        .iter()
        .filter(|s| s.staff_id == staff.id && month.contains(s.date()))
        .cloned()
        .collect();
    let concrete_dates: BTreeSet<NaiveDate> =
        concrete_shifts.iter().map(|s| s.date()).collect();

    let requests: Vec<_> = snapshot
        .requests
        .iter()
        .filter(|r| r.staff_id == staff.id)
        .cloned()
        .collect();
    let absences: Vec<_> = snapshot
        .absences
        .iter()
        .filter(|a| a.staff_id == staff.id)
        .cloned()
        .collect();

    let overtime = resolve_overtime(
        &requests,
        &patterns,
        &snapshot.exceptions,
        &concrete_dates,
        &records,
        monthly_base_salary,
        month,
    );

    let virtual_shifts = expand_patterns(&patterns, &snapshot.exceptions, month);
    let holiday_worked = calculate_holiday_worked(
        &concrete_shifts,
        &virtual_shifts,
        &snapshot.public_holidays,
        monthly_base_salary,
        month,
    );

    let unused_holiday = calculate_unused_holiday_payout(
        staff.employment_start_date,
        &absences,
        monthly_base_salary,
        month,
    );

    let total_pay = monthly_base_salary + bonuses + overtime.total_pay + expenses
        + holiday_worked.bonus
        + unused_holiday.payout
        - deductions;
    let total_pay_reporting = rates.convert(total_pay, &staff.base_currency);

    Some(StaffPaySummary {
        staff_id: staff.id.clone(),
        currency: staff.base_currency.clone(),
        monthly_base_salary,
        bonuses,
        expenses,
        deductions,
        overtime_days: overtime.overtime_days,
        overtime_pay: overtime.total_pay,
        holiday_worked_days: holiday_worked.days_worked,
        holiday_worked_bonus: holiday_worked.bonus,
        holiday_shifts: holiday_worked.holiday_shifts,
        unused_holiday_days: unused_holiday.unused_days,
        unused_holiday_payout: unused_holiday.payout,
        total_pay,
        total_pay_reporting,
        has_salary_record,
    })
}

/// Computes the month-level payroll summary across all payable staff.
///
/// Staff without a positive base salary are skipped. Rows are ordered by
/// staff id so identical snapshots always serialize identically.
pub fn compute_month(
    snapshot: &PayrollSnapshot,
    rates: &ExchangeRateTable,
    month: &PayrollMonth,
) -> MonthlyPayrollSummary {
    let mut staff: Vec<StaffPaySummary> = snapshot
        .staff
        .iter()
        .filter_map(|s| compute_staff_summary(s, snapshot, rates, month))
        .collect();
    staff.sort_by(|a, b| a.staff_id.cmp(&b.staff_id));

    let total_reporting = staff.iter().map(|s| s.total_pay_reporting).sum();

    MonthlyPayrollSummary {
        month: *month,
        reporting_currency: rates.reporting_currency().to_string(),
        staff,
        total_reporting,
    }
}
