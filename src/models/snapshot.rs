//! The input snapshot consumed by the aggregator.
//!
//! All collections are fetched by the surrounding system ahead of the
//! computation; the engine only reads them.

use serde::{Deserialize, Serialize};

use super::{
    ConcreteShift, HolidayAbsenceRecord, MonthlyPayRecord, PatternException, PublicHoliday,
    RecurringBonus, RecurringShiftPattern, StaffPayProfile, StaffRequest,
};

/// A full in-memory snapshot of the state a payroll run computes over.
///
/// Re-computation is triggered wholesale whenever any of these collections
/// changes upstream; the engine has no incremental mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollSnapshot {
    /// Staff pay profiles.
    #[serde(default)]
    pub staff: Vec<StaffPayProfile>,
    /// The pay ledger.
    #[serde(default)]
    pub pay_records: Vec<MonthlyPayRecord>,
    /// Recurring shift patterns for all staff.
    #[serde(default)]
    pub patterns: Vec<RecurringShiftPattern>,
    /// Per-date pattern suppressions.
    #[serde(default)]
    pub exceptions: Vec<PatternException>,
    /// Concretely stored shifts.
    #[serde(default)]
    pub shifts: Vec<ConcreteShift>,
    /// Holiday and other absence records.
    #[serde(default)]
    pub absences: Vec<HolidayAbsenceRecord>,
    /// Staff requests (overtime, holiday, shift swaps).
    #[serde(default)]
    pub requests: Vec<StaffRequest>,
    /// Recurring monthly bonuses.
    #[serde(default)]
    pub recurring_bonuses: Vec<RecurringBonus>,
    /// The public holiday calendar for the relevant year(s).
    #[serde(default)]
    pub public_holidays: Vec<PublicHoliday>,
}
