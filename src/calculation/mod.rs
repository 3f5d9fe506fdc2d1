//! Calculation logic for the Payroll Computation Engine.
//!
//! This module contains all the calculation functions for determining pay,
//! including salary frequency normalization, holiday allowance accrual,
//! recurring pattern expansion, overtime accrual resolution, holiday-worked
//! bonus calculation, unused-holiday payout calculation, currency conversion,
//! and the month-level aggregator that composes them.

mod aggregate;
mod currency;
mod holiday_allowance;
mod holiday_worked;
mod overtime;
mod pattern_expansion;
mod salary;
mod unused_holiday;

pub use aggregate::{compute_month, compute_staff_summary};
pub use currency::ExchangeRateTable;
pub use holiday_allowance::{
    BASE_ANNUAL_ALLOWANCE, HOLIDAY_YEAR_START_MONTH, HolidayAllowance, LONG_SERVICE_ALLOWANCE,
    calculate_holiday_allowance, holiday_year_window,
};
pub use holiday_worked::{HOLIDAY_WORKED_MULTIPLIER, HolidayWorkedBonus, calculate_holiday_worked};
pub use overtime::{
    OVERTIME_MULTIPLIER, OvertimeRequestDetail, OvertimeResolution, WORKING_DAYS_PER_MONTH,
    resolve_overtime,
};
pub use pattern_expansion::{effective_virtual_dates, expand_patterns, pattern_dates};
pub use salary::{
    FORTNIGHTS_PER_MONTH, MONTHS_PER_YEAR, WEEKS_PER_MONTH, normalize_monthly_salary,
};
pub use unused_holiday::{UnusedHolidayPayout, calculate_unused_holiday_payout};
