//! Absence, staff request, and public holiday models.
//!
//! This module contains the holiday/absence ledger, the approval-gated staff
//! request types that feed overtime computation, and the public holiday
//! calendar entries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The type of a recorded absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceType {
    /// Annual holiday leave; counts against the holiday-year entitlement.
    Holiday,
    /// Sick leave.
    Sick,
    /// Personal leave.
    Personal,
    /// Unpaid leave.
    Unpaid,
}

/// Approval state shared by absences and staff requests.
///
/// Only `approved` rows feed pay computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved; feeds computation.
    Approved,
    /// Rejected; ignored by computation.
    Rejected,
}

/// A recorded absence over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayAbsenceRecord {
    /// The staff member the absence belongs to.
    pub staff_id: String,
    /// The type of absence.
    pub absence_type: AbsenceType,
    /// First day of the absence.
    pub start_date: NaiveDate,
    /// Last day of the absence.
    pub end_date: NaiveDate,
    /// Days consumed by the absence; half days are allowed.
    pub days_taken: Decimal,
    /// Approval state of the absence.
    pub status: ApprovalStatus,
}

/// The type of a staff request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// Extra worked days beyond the normal schedule.
    Overtime,
    /// Covering a colleague's shift as overtime.
    OvertimeCover,
    /// Paid holiday request.
    HolidayPaid,
    /// Unpaid holiday request.
    HolidayUnpaid,
    /// Swapping shifts with a colleague; only counts as overtime when
    /// explicitly flagged.
    ShiftSwap,
}

/// A staff-initiated request over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The staff member who raised the request.
    pub staff_id: String,
    /// The type of request.
    pub request_type: RequestType,
    /// First day of the requested range.
    pub start_date: NaiveDate,
    /// Last day of the requested range.
    pub end_date: NaiveDate,
    /// Number of days requested; half days are allowed.
    pub days_requested: Decimal,
    /// Approval state of the request.
    pub status: ApprovalStatus,
    /// Marks a `shift_swap` as overtime-bearing.
    #[serde(default)]
    pub is_overtime: bool,
    /// Optional link to the holiday record this request covers.
    #[serde(default)]
    pub covered_holiday_id: Option<String>,
}

impl StaffRequest {
    /// Returns true if this request contributes days to overtime accrual.
    ///
    /// Overtime and overtime-cover requests always count; a shift swap counts
    /// only when flagged as overtime. Approval is checked by the resolver,
    /// not here.
    pub fn counts_toward_overtime(&self) -> bool {
        match self.request_type {
            RequestType::Overtime | RequestType::OvertimeCover => true,
            RequestType::ShiftSwap => self.is_overtime,
            RequestType::HolidayPaid | RequestType::HolidayUnpaid => false,
        }
    }
}

/// A public holiday calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The holiday's name (e.g., "Boxing Day").
    pub name: String,
    /// True when the date is an estimate published ahead of confirmation.
    #[serde(default)]
    pub is_estimated: bool,
}
