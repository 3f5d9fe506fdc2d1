//! Core data models for the Payroll Computation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod absence;
mod month;
mod pay_record;
mod schedule;
mod snapshot;
mod staff;
mod summary;

pub use absence::{
    AbsenceType, ApprovalStatus, HolidayAbsenceRecord, PublicHoliday, RequestType, StaffRequest,
};
pub use month::PayrollMonth;
pub use pay_record::{MonthlyPayRecord, PayRecordKind, RecurringBonus};
pub use schedule::{
    ConcreteShift, ExceptionKind, PatternException, RecurringShiftPattern, VirtualShift,
};
pub use snapshot::PayrollSnapshot;
pub use staff::{PayFrequency, StaffPayProfile};
pub use summary::{HolidayShiftRecord, MonthlyPayrollSummary, StaffPaySummary};
