//! Payroll run workflow layer.
//!
//! The calculators are pure; everything stateful about running payroll lives
//! here: the per-staff month state machine, building the salary record a run
//! posts, and reconciling user-supplied overrides against calculated figures
//! into delta records. Actually persisting or deleting records stays with
//! the surrounding system.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{MonthlyPayRecord, PayRecordKind, StaffPaySummary};

/// The payroll state of one staff member for one month.
///
/// Transitions are `Pending -> Ready -> Paid`, with an explicit revert from
/// `Paid` back to `Pending`. Only `Ready` staff are included in a bulk run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollState {
    /// Not yet queued for payment.
    Pending,
    /// Queued for the next bulk payroll run.
    Ready,
    /// A salary record has been posted for the month.
    Paid,
}

impl std::fmt::Display for PayrollState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayrollState::Pending => write!(f, "pending"),
            PayrollState::Ready => write!(f, "ready"),
            PayrollState::Paid => write!(f, "paid"),
        }
    }
}

impl PayrollState {
    /// Derives the state from a computed summary: staff with a posted salary
    /// record are `Paid`, everyone else starts `Pending`.
    pub fn from_summary(summary: &StaffPaySummary) -> Self {
        if summary.has_salary_record {
            PayrollState::Paid
        } else {
            PayrollState::Pending
        }
    }

    /// Queues a pending staff member for the next run.
    pub fn mark_ready(self) -> EngineResult<Self> {
        match self {
            PayrollState::Pending => Ok(PayrollState::Ready),
            other => Err(invalid_transition(other, PayrollState::Ready)),
        }
    }

    /// Marks a queued staff member as paid once the salary record is posted.
    pub fn mark_paid(self) -> EngineResult<Self> {
        match self {
            PayrollState::Ready => Ok(PayrollState::Paid),
            other => Err(invalid_transition(other, PayrollState::Paid)),
        }
    }

    /// Reverts a paid staff member after the salary record is deleted.
    pub fn revert(self) -> EngineResult<Self> {
        match self {
            PayrollState::Paid => Ok(PayrollState::Pending),
            other => Err(invalid_transition(other, PayrollState::Pending)),
        }
    }
}

fn invalid_transition(from: PayrollState, to: PayrollState) -> EngineError {
    EngineError::InvalidTransition {
        from: from.to_string(),
        to: to.to_string(),
    }
}

/// Filters a staff/state listing down to those included in a bulk run.
pub fn bulk_run_candidates<'a>(states: &'a [(String, PayrollState)]) -> Vec<&'a str> {
    states
        .iter()
        .filter(|(_, state)| *state == PayrollState::Ready)
        .map(|(staff_id, _)| staff_id.as_str())
        .collect()
}

/// Builds the salary record a payroll run posts for one staff member.
///
/// The record carries the month's full computed total in the staff member's
/// base currency. Posting it (and deleting it on revert) is the caller's
/// mutation; computation must be re-run afterwards to observe the change.
pub fn build_salary_record(summary: &StaffPaySummary, pay_date: NaiveDate) -> MonthlyPayRecord {
    MonthlyPayRecord {
        staff_id: summary.staff_id.clone(),
        kind: PayRecordKind::Salary,
        amount: summary.total_pay,
        currency: summary.currency.clone(),
        pay_date,
        period_start: None,
        period_end: None,
        description: "Monthly salary".to_string(),
    }
}

/// Reconciles a user-supplied override against a calculated figure.
///
/// The stored record is the signed delta between the override and the
/// calculation, so the computed total lands exactly on the override. A zero
/// delta returns `None`: a zero-amount adjustment is equivalent to no record
/// and must never persist as a zero-value ledger entry.
///
/// # Example
///
/// ```
/// use payroll_engine::workflow::reconcile_override;
/// use payroll_engine::models::PayRecordKind;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let pay_date = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
/// let delta = reconcile_override(
///     "staff_001",
///     PayRecordKind::Overtime,
///     Decimal::new(750, 0),
///     Decimal::new(800, 0),
///     "GBP",
///     pay_date,
/// );
/// assert_eq!(delta.unwrap().amount, Decimal::new(50, 0));
/// ```
pub fn reconcile_override(
    staff_id: &str,
    kind: PayRecordKind,
    calculated: Decimal,
    override_total: Decimal,
    currency: &str,
    pay_date: NaiveDate,
) -> Option<MonthlyPayRecord> {
    let delta = override_total - calculated;
    if delta.is_zero() {
        return None;
    }

    Some(MonthlyPayRecord {
        staff_id: staff_id.to_string(),
        kind,
        amount: delta,
        currency: currency.to_string(),
        pay_date,
        period_start: None,
        period_end: None,
        description: "Manual adjustment".to_string(),
    })
}
