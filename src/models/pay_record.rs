//! Pay ledger models.
//!
//! This module defines [`MonthlyPayRecord`], the append-only ledger entry
//! read by the engine, and [`RecurringBonus`], an indefinitely-recurring
//! monthly bonus distinct from one-off bonus records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayrollMonth;

/// The kind of a pay ledger entry.
///
/// A posted `salary` record is the signal that payroll has been run for that
/// staff member that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayRecordKind {
    /// A posted monthly salary payment.
    Salary,
    /// A one-off bonus payment.
    Bonus,
    /// A manually recorded overtime amount.
    Overtime,
    /// A reimbursed expense.
    Expense,
    /// A deduction from pay.
    Deduction,
}

/// A single entry in the pay ledger.
///
/// The engine reads all records whose pay date falls in the target month;
/// it never writes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPayRecord {
    /// The staff member this record belongs to.
    pub staff_id: String,
    /// The kind of record.
    pub kind: PayRecordKind,
    /// The amount in `currency`.
    pub amount: Decimal,
    /// Currency code of the amount.
    pub currency: String,
    /// The date the record applies to.
    pub pay_date: NaiveDate,
    /// Optional start of the period the record covers.
    #[serde(default)]
    pub period_start: Option<NaiveDate>,
    /// Optional end of the period the record covers.
    #[serde(default)]
    pub period_end: Option<NaiveDate>,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

/// A bonus paid every month while its validity window is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringBonus {
    /// The staff member this bonus belongs to.
    pub staff_id: String,
    /// The monthly amount in `currency`.
    pub amount: Decimal,
    /// Currency code of the amount.
    pub currency: String,
    /// First date the bonus applies from.
    pub valid_from: NaiveDate,
    /// Last date the bonus applies, or `None` for an indefinite bonus.
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
}

impl RecurringBonus {
    /// Checks whether this bonus applies to the given month.
    ///
    /// A bonus covers a month when its validity window intersects it.
    pub fn covers(&self, month: &PayrollMonth) -> bool {
        if self.valid_from > month.last_day() {
            return false;
        }
        match self.valid_until {
            Some(until) => until >= month.first_day(),
            None => true,
        }
    }
}
