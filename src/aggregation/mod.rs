//! Aggregation of daily records into per-employee summaries.
//!
//! This module contains the duration arithmetic, the attendance completeness
//! rule, roster lookup with defaults, and the aggregation entry point that
//! emits either per-day or weekly summaries.

mod aggregator;
mod attendance;
mod duration;
mod names;
mod roster;

pub use aggregator::{aggregate, group_by_employee};
pub use attendance::{attendance_percentage, counts_as_attended};
pub use duration::{format_minutes, parse_minutes};
pub use names::{normalize_name, title_case};
pub use roster::{RosterAttributes, RosterIndex};
