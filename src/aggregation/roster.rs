//! Roster lookup with default fallbacks.

use std::collections::HashMap;

use crate::config::AggregationRules;
use crate::models::RosterEntry;

use super::names::normalize_name;

/// Roster attributes merged into a summary.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterAttributes {
    /// Area, or the configured default.
    pub area: String,
    /// Team, or the configured default.
    pub team: String,
    /// Group, if the roster has one.
    pub group: Option<String>,
    /// Running average, if the roster has one.
    pub average: Option<f64>,
}

/// Roster rows indexed by normalized full name.
///
/// When several rows normalize to the same name, the first one wins.
#[derive(Debug, Default)]
pub struct RosterIndex<'a> {
    entries: HashMap<String, &'a RosterEntry>,
}

impl<'a> RosterIndex<'a> {
    /// Indexes a roster. An empty roster is valid.
    pub fn new(roster: &'a [RosterEntry]) -> Self {
        let mut entries = HashMap::with_capacity(roster.len());
        for entry in roster {
            entries
                .entry(normalize_name(&entry.full_name))
                .or_insert(entry);
        }
        Self { entries }
    }

    /// Returns the roster row for a normalized name.
    pub fn get(&self, normalized_name: &str) -> Option<&'a RosterEntry> {
        self.entries.get(normalized_name).copied()
    }

    /// Returns the attributes for a normalized name, substituting defaults
    /// for anything the roster does not provide.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::aggregation::RosterIndex;
    /// use attendance_engine::config::AggregationRules;
    ///
    /// let index = RosterIndex::new(&[]);
    /// let attributes = index.attributes("jane smith", &AggregationRules::default());
    /// assert_eq!(attributes.area, "No area");
    /// assert_eq!(attributes.team, "No team");
    /// ```
    pub fn attributes(&self, normalized_name: &str, rules: &AggregationRules) -> RosterAttributes {
        let entry = self.get(normalized_name);
        RosterAttributes {
            area: entry
                .and_then(|e| e.area.clone())
                .unwrap_or_else(|| rules.default_area.clone()),
            team: entry
                .and_then(|e| e.team.clone())
                .unwrap_or_else(|| rules.default_team.clone()),
            group: entry.and_then(|e| e.group.clone()),
            average: entry.and_then(|e| e.average),
        }
    }
}
