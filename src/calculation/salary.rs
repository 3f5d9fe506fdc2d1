//! Base salary normalization.
//!
//! Every declared base salary is normalized to a per-calendar-month figure
//! before any additive or subtractive adjustment is applied, regardless of
//! the staff member's declared pay frequency.

use rust_decimal::Decimal;

use crate::models::PayFrequency;

/// Months in a year, used to normalize annual salaries.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Average weeks per calendar month (52 / 12).
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(433, 0, 0, false, 2);

/// Average fortnights per calendar month (26 / 12).
pub const FORTNIGHTS_PER_MONTH: Decimal = Decimal::from_parts(217, 0, 0, false, 2);

/// Normalizes a declared base salary to a per-calendar-month amount.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::normalize_monthly_salary;
/// use payroll_engine::models::PayFrequency;
/// use rust_decimal::Decimal;
///
/// let monthly = normalize_monthly_salary(Decimal::new(120_000, 0), PayFrequency::Annually);
/// assert_eq!(monthly, Decimal::new(10_000, 0));
/// ```
pub fn normalize_monthly_salary(amount: Decimal, frequency: PayFrequency) -> Decimal {
    match frequency {
        PayFrequency::Monthly => amount,
        PayFrequency::Annually => amount / MONTHS_PER_YEAR,
        PayFrequency::Weekly => amount * WEEKS_PER_MONTH,
        PayFrequency::BiWeekly => amount * FORTNIGHTS_PER_MONTH,
    }
}
