//! Overtime accrual resolution.
//!
//! Merges three sources into a monthly overtime figure: approved
//! overtime-bearing staff requests (prorated across month boundaries),
//! recurring overtime-flagged shift patterns, and manually recorded
//! overtime pay records.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    ApprovalStatus, MonthlyPayRecord, PatternException, PayRecordKind, PayrollMonth,
    RecurringShiftPattern, RequestType, StaffRequest,
};

use super::pattern_expansion::pattern_dates;

/// Working days assumed per month when deriving a daily rate from salary.
pub const WORKING_DAYS_PER_MONTH: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Multiplier applied to the daily rate for overtime days.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// One approved request's contribution to the month's overtime days.
#[derive(Debug, Clone, PartialEq)]
pub struct OvertimeRequestDetail {
    /// The contributing request.
    pub request_id: String,
    /// The request's type.
    pub request_type: RequestType,
    /// Days credited to this month after proration.
    pub days: Decimal,
}

/// The result of resolving overtime for one staff member and month.
#[derive(Debug, Clone, PartialEq)]
pub struct OvertimeResolution {
    /// Total overtime days from requests and overtime patterns.
    pub overtime_days: Decimal,
    /// Per-request breakdown of the request-sourced days.
    pub request_details: Vec<OvertimeRequestDetail>,
    /// Sum of manually recorded overtime amounts, taken verbatim.
    pub manual_pay: Decimal,
    /// Pay derived from overtime days at 1.5x the daily rate.
    pub calculated_pay: Decimal,
    /// `manual_pay + calculated_pay`.
    pub total_pay: Decimal,
}

/// Resolves a staff member's overtime for the target month.
///
/// # Arguments
///
/// * `requests` - The staff member's requests; only approved overtime-bearing
///   ones overlapping the month contribute.
/// * `patterns` - The staff member's recurring patterns; only those flagged
///   `is_overtime` contribute, one day per distinct matched date.
/// * `exceptions` - Per-date pattern suppressions.
/// * `concrete_shift_dates` - Dates with a stored shift; pattern-sourced
///   overtime days exclude them to avoid double counting.
/// * `records` - The staff member's pay records for the month; `overtime`
///   kind amounts are added verbatim.
/// * `monthly_base_salary` - The normalized monthly base salary.
/// * `month` - The target month.
///
/// A request spanning several months is prorated by the fraction of its
/// inclusive day-span inside the month, rounded to the nearest whole day.
/// Zero or negative `days_requested` and inverted date ranges contribute
/// nothing.
pub fn resolve_overtime(
    requests: &[StaffRequest],
    patterns: &[RecurringShiftPattern],
    exceptions: &[PatternException],
    concrete_shift_dates: &BTreeSet<NaiveDate>,
    records: &[MonthlyPayRecord],
    monthly_base_salary: Decimal,
    month: &PayrollMonth,
) -> OvertimeResolution {
    let mut request_details = Vec::new();
    let mut request_days = Decimal::ZERO;

    for request in requests {
        if request.status != ApprovalStatus::Approved || !request.counts_toward_overtime() {
            continue;
        }
        let days = prorated_request_days(request, month);
        if days <= Decimal::ZERO {
            continue;
        }
        request_days += days;
        request_details.push(OvertimeRequestDetail {
            request_id: request.id.clone(),
            request_type: request.request_type,
            days,
        });
    }

    let pattern_day_count = pattern_dates(
        patterns.iter().filter(|p| p.is_overtime),
        exceptions,
        month,
    )
    .into_iter()
    .filter(|date| !concrete_shift_dates.contains(date))
    .count();

    let overtime_days = request_days + Decimal::from(pattern_day_count as i64);

    let manual_pay: Decimal = records
        .iter()
        .filter(|r| r.kind == PayRecordKind::Overtime)
        .map(|r| r.amount)
        .sum();

    let daily_rate = monthly_base_salary / WORKING_DAYS_PER_MONTH;
    let calculated_pay = OVERTIME_MULTIPLIER * daily_rate * overtime_days;

    OvertimeResolution {
        overtime_days,
        request_details,
        manual_pay,
        calculated_pay,
        total_pay: manual_pay + calculated_pay,
    }
}

/// Splits a request's days proportionally to its overlap with the month.
fn prorated_request_days(request: &StaffRequest, month: &PayrollMonth) -> Decimal {
    if request.days_requested <= Decimal::ZERO || request.end_date < request.start_date {
        return Decimal::ZERO;
    }

    let overlap_start = request.start_date.max(month.first_day());
    let overlap_end = request.end_date.min(month.last_day());
    if overlap_end < overlap_start {
        return Decimal::ZERO;
    }

    let span_days = Decimal::from((request.end_date - request.start_date).num_days() + 1);
    let overlap_days = Decimal::from((overlap_end - overlap_start).num_days() + 1);

    (request.days_requested * overlap_days / span_days)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
