//! Configuration types for attendance extraction and aggregation.
//!
//! This module contains the strongly-typed rule structures that are
//! deserialized from YAML configuration files. Every field has a default,
//! so a partial file only overrides what it names.

use serde::Deserialize;

/// Heuristics used to locate employee blocks and day rows in a grid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractionRules {
    /// Substring (case-insensitive) that marks an employee header row.
    pub employee_marker: String,
    /// Columns to the right of the marker cell where the name sits.
    pub name_offset: usize,
    /// Substrings (case-insensitive) that mark a candidate day row.
    pub weekday_tokens: Vec<String>,
    /// Substrings (case-insensitive) that mark a note cell.
    pub note_keywords: Vec<String>,
    /// Substring (case-insensitive) that lets a non-time cell count as an exit.
    pub missing_exit_keyword: String,
    /// Cleaned names (case-insensitive) that mean "no employee".
    pub name_placeholders: Vec<String>,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            employee_marker: "Employee".to_string(),
            name_offset: 3,
            weekday_tokens: ["LU", "M", "X", "J", "V", "S", "D"]
                .into_iter()
                .map(String::from)
                .collect(),
            note_keywords: ["nota", "falta", "observacion"]
                .into_iter()
                .map(String::from)
                .collect(),
            missing_exit_keyword: "falta".to_string(),
            name_placeholders: ["nan", "none"].into_iter().map(String::from).collect(),
        }
    }
}

/// Output shape of the aggregation stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationMode {
    /// `hourstotal`/`hoursperday`/`attendance`/period.
    #[default]
    PerDay,
    /// `hoursweek`/`days`/`attendance`, no per-day breakdown.
    Weekly,
}

/// Settings for grouping records into summaries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AggregationRules {
    /// Which output shape to emit.
    pub mode: AggregationMode,
    /// Area used when the roster has no match.
    pub default_area: String,
    /// Team used when the roster has no match.
    pub default_team: String,
    /// Exact note value that disqualifies a day from attendance.
    pub missing_checkout_note: String,
}

impl Default for AggregationRules {
    fn default() -> Self {
        Self {
            mode: AggregationMode::PerDay,
            default_area: "No area".to_string(),
            default_team: "No team".to_string(),
            missing_checkout_note: "Falta SALIDA".to_string(),
        }
    }
}

/// The complete rule set loaded from a configuration directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulesConfig {
    /// Extraction heuristics.
    extraction: ExtractionRules,
    /// Aggregation settings.
    aggregation: AggregationRules,
}

impl RulesConfig {
    /// Creates a new RulesConfig from its component parts.
    pub fn new(extraction: ExtractionRules, aggregation: AggregationRules) -> Self {
        Self {
            extraction,
            aggregation,
        }
    }

    /// Returns the extraction rules.
    pub fn extraction(&self) -> &ExtractionRules {
        &self.extraction
    }

    /// Returns the aggregation rules.
    pub fn aggregation(&self) -> &AggregationRules {
        &self.aggregation
    }
}

/// Runtime settings for the HTTP server, read from `ATTENDANCE_*` variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Socket address to listen on.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Directory holding `extraction.yaml` and `aggregation.yaml`.
    #[serde(default = "default_config_dir")]
    pub config_dir: String,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_config_dir() -> String {
    "config/default".to_string()
}
