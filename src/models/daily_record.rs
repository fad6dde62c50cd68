//! Daily attendance record model.

use serde::{Deserialize, Serialize};

/// One parsed day inside an employee block.
///
/// All field values are kept as the text found in the grid; nothing is
/// converted to a time type at this stage. A record is only ever built when
/// at least one of `day`, `entry` or `exit` was found.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DailyRecord;
///
/// let record = DailyRecord {
///     name: "Jane Smith".to_string(),
///     day: Some("2025-09-01".to_string()),
///     entry: Some("08:00".to_string()),
///     exit: Some("17:00".to_string()),
///     total: Some("9:00".to_string()),
///     note: None,
/// };
/// assert!(record.has_touchpoint());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Employee name as cleaned from the header row, before normalization.
    pub name: String,
    /// Calendar day text (`YYYY-MM-DD...`).
    pub day: Option<String>,
    /// Entry time text.
    pub entry: Option<String>,
    /// Exit time text, or a "missing exit" marker.
    pub exit: Option<String>,
    /// Daily total duration text (`H:MM`).
    pub total: Option<String>,
    /// Free-text note flag.
    pub note: Option<String>,
}

impl DailyRecord {
    /// Returns true if any of the day, entry or exit fields is present.
    pub fn has_touchpoint(&self) -> bool {
        self.day.is_some() || self.entry.is_some() || self.exit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(name: &str) -> DailyRecord {
        DailyRecord {
            name: name.to_string(),
            day: None,
            entry: None,
            exit: None,
            total: None,
            note: None,
        }
    }

    #[test]
    fn test_record_without_day_entry_exit_has_no_touchpoint() {
        let mut record = blank("a");
        record.total = Some("1:00".to_string());
        record.note = Some("nota".to_string());
        assert!(!record.has_touchpoint());
    }

    #[test]
    fn test_exit_alone_is_a_touchpoint() {
        let mut record = blank("a");
        record.exit = Some("Falta SALIDA".to_string());
        assert!(record.has_touchpoint());
    }
}
