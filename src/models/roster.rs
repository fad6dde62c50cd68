//! Roster and report models.
//!
//! The roster is owned by an external collaborator; the core only reads it
//! to decorate summaries and to build per-employee reports.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One roster row, keyed by the employee's full name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Full name as registered in the roster.
    pub full_name: String,
    /// Work area.
    #[serde(default)]
    pub area: Option<String>,
    /// Team within the area.
    #[serde(default)]
    pub team: Option<String>,
    /// Group label.
    #[serde(default)]
    pub group: Option<String>,
    /// Running average score.
    #[serde(default)]
    pub average: Option<f64>,
    /// Level.
    #[serde(default)]
    pub level: Option<String>,
    /// Shift.
    #[serde(default)]
    pub shift: Option<String>,
}

impl RosterEntry {
    /// Creates an entry carrying only a name.
    pub fn named(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Self::default()
        }
    }
}

/// Personal data section of an [`EmployeeReport`].
///
/// Text fields fall back to `"N/A"` when the employee has no roster row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalData {
    /// Level.
    pub level: String,
    /// Shift.
    pub shift: String,
    /// Group label.
    pub group: String,
    /// Team.
    pub team: String,
    /// Running average, if recorded.
    pub average: Option<f64>,
    /// Work area.
    pub area: String,
}

/// Attendance for one stored period inside an [`EmployeeReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodAttendance {
    /// Attendance completeness percentage.
    #[serde(with = "rust_decimal::serde::float")]
    pub attendance: Decimal,
    /// Total duration (`HH:MM`).
    pub hourstotal: String,
    /// Sequential day label → duration.
    pub hoursperday: BTreeMap<String, String>,
}

/// Everything known about one employee across all stored periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeReport {
    /// Roster-derived personal data.
    pub personal: PersonalData,
    /// Period label → attendance for that period.
    pub periods: BTreeMap<String, PeriodAttendance>,
}
