//! Period token model.
//!
//! A [`PeriodToken`] names the month a report covers. It groups every record
//! from one upload and doubles as the bucket name the summaries are stored
//! under.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical period label, e.g. `september_2025`, or the unknown sentinel.
///
/// # Example
///
/// ```
/// use attendance_engine::models::PeriodToken;
/// use chrono::NaiveDate;
///
/// let token = PeriodToken::from_date(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
/// assert_eq!(token.as_str(), "september_2025");
/// assert!(PeriodToken::unknown().is_unknown());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodToken(String);

impl PeriodToken {
    /// The label used when no period can be derived.
    pub const UNKNOWN: &'static str = "unknown";

    /// Returns the unknown sentinel token.
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    /// Builds the lowercase `<month-name>_<year>` label for a date.
    ///
    /// Month names come from chrono's fixed English table, so the label does
    /// not depend on the process locale.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%B_%Y").to_string().to_lowercase())
    }

    /// Wraps an already-canonical label, e.g. a stored bucket name.
    pub fn from_label(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns true for the unknown sentinel.
    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }

    /// Returns the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeriodToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date_uses_full_lowercase_month() {
        let token = PeriodToken::from_date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(token.as_str(), "february_2024");
        assert!(!token.is_unknown());
    }

    #[test]
    fn test_unknown_sentinel() {
        let token = PeriodToken::unknown();
        assert_eq!(token.to_string(), "unknown");
        assert!(token.is_unknown());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let token = PeriodToken::from_label("october_2025");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"october_2025\"");
    }
}
