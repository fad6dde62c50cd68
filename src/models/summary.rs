//! Employee summary model.
//!
//! This module contains [`EmployeeSummary`], the only artifact that leaves
//! the core, and the [`Breakdown`] variants selected by the aggregation mode.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PeriodToken;

/// Mode-specific part of a summary.
///
/// Serialized untagged and flattened into the summary, so a per-day summary
/// carries `hourstotal`/`hoursperday` keys and a weekly one carries
/// `hoursweek`/`days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Breakdown {
    /// Per-day breakdown mode.
    PerDay {
        /// Total duration for the period (`HH:MM`).
        hourstotal: String,
        /// Sequential day label → duration (`HH:MM`).
        hoursperday: BTreeMap<String, String>,
    },
    /// Weekly summary mode.
    Weekly {
        /// Total duration for the week (`HH:MM`).
        hoursweek: String,
        /// Completed days, minus one, floored at zero.
        days: u32,
    },
}

impl Breakdown {
    /// Returns the total duration regardless of mode.
    pub fn total(&self) -> &str {
        match self {
            Breakdown::PerDay { hourstotal, .. } => hourstotal,
            Breakdown::Weekly { hoursweek, .. } => hoursweek,
        }
    }
}

/// Aggregated attendance for one employee in one period.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Breakdown, EmployeeSummary, PeriodToken};
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let summary = EmployeeSummary {
///     name: "Jane Smith".to_string(),
///     area: "No area".to_string(),
///     team: "No team".to_string(),
///     group: None,
///     average: None,
///     attendance: Decimal::new(7500, 2),
///     period: PeriodToken::from_label("september_2025"),
///     breakdown: Breakdown::PerDay {
///         hourstotal: "03:45".to_string(),
///         hoursperday: BTreeMap::new(),
///     },
/// };
/// let json = serde_json::to_value(&summary).unwrap();
/// assert_eq!(json["hourstotal"], "03:45");
/// assert_eq!(json["attendance"], 75.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Title-cased employee name.
    pub name: String,
    /// Roster area, or the configured default.
    pub area: String,
    /// Roster team, or the configured default.
    pub team: String,
    /// Roster group, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Roster running average, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    /// Attendance completeness percentage (0-100, two decimals).
    #[serde(with = "rust_decimal::serde::float")]
    pub attendance: Decimal,
    /// The period the summary belongs to.
    pub period: PeriodToken,
    /// Mode-specific durations.
    #[serde(flatten)]
    pub breakdown: Breakdown,
}
