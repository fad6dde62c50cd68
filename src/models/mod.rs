//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine,
//! from the raw decoded grid to the per-employee summaries.

mod daily_record;
mod grid;
mod period;
mod roster;
mod summary;

pub use daily_record::DailyRecord;
pub use grid::{Cell, RawGrid};
pub use period::PeriodToken;
pub use roster::{EmployeeReport, PeriodAttendance, PersonalData, RosterEntry};
pub use summary::{Breakdown, EmployeeSummary};
