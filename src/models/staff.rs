//! Staff pay profile model and related types.
//!
//! This module defines the StaffPayProfile struct and PayFrequency enum
//! for representing staff members in the payroll computation system.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How often a staff member's declared base salary is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// Salary is declared per calendar month.
    Monthly,
    /// Salary is declared per year.
    Annually,
    /// Salary is declared per week.
    Weekly,
    /// Salary is declared per fortnight.
    BiWeekly,
}

/// A staff member's pay configuration as owned by HR administration.
///
/// Read-only to the engine: the computation consumes these values and never
/// mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffPayProfile {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The staff member's base currency code (e.g., "GBP", "USD").
    pub base_currency: String,
    /// The declared base salary in the base currency, if configured.
    pub base_salary: Option<Decimal>,
    /// How often the base salary is paid.
    pub pay_frequency: PayFrequency,
    /// The date employment started, if recorded.
    #[serde(default)]
    pub employment_start_date: Option<NaiveDate>,
}

impl StaffPayProfile {
    /// Returns true if this staff member has a positive base salary and is
    /// therefore included in payroll computation.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{PayFrequency, StaffPayProfile};
    /// use rust_decimal::Decimal;
    ///
    /// let staff = StaffPayProfile {
    ///     id: "staff_001".to_string(),
    ///     name: "Avery Quinn".to_string(),
    ///     base_currency: "GBP".to_string(),
    ///     base_salary: Some(Decimal::new(24000, 0)),
    ///     pay_frequency: PayFrequency::Annually,
    ///     employment_start_date: None,
    /// };
    /// assert!(staff.is_payable());
    /// ```
    pub fn is_payable(&self) -> bool {
        self.base_salary.is_some_and(|s| s > Decimal::ZERO)
    }
}
