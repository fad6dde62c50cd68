//! Employee name lookup on header rows.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::ExtractionRules;
use crate::models::Cell;

use super::rows::marker_column;

fn parenthesized_regex() -> &'static Regex {
    static PARENTHESIZED_RE: OnceLock<Regex> = OnceLock::new();
    PARENTHESIZED_RE.get_or_init(|| Regex::new(r"\([^)]*\)").unwrap())
}

fn whitespace_regex() -> &'static Regex {
    static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Strips parenthesized parts from a raw name.
///
/// Whitespace left behind by a removed group is collapsed, and the result is
/// trimmed. Returns `None` for an empty result or a placeholder such as
/// `nan` (compared case-insensitively).
///
/// # Example
///
/// ```
/// use attendance_engine::extraction::clean_name;
///
/// let placeholders = vec!["nan".to_string(), "none".to_string()];
/// assert_eq!(clean_name("Jane (Doe) Smith", &placeholders).as_deref(), Some("Jane Smith"));
/// assert_eq!(clean_name("(12345)", &placeholders), None);
/// assert_eq!(clean_name("NaN", &placeholders), None);
/// ```
pub fn clean_name(raw: &str, placeholders: &[String]) -> Option<String> {
    let stripped = parenthesized_regex().replace_all(raw, " ");
    let cleaned = whitespace_regex()
        .replace_all(stripped.trim(), " ")
        .into_owned();

    let lowered = cleaned.to_lowercase();
    if cleaned.is_empty()
        || placeholders
            .iter()
            .any(|placeholder| placeholder.to_lowercase() == lowered)
    {
        return None;
    }

    Some(cleaned)
}

/// Reads the employee name from a header row.
///
/// The name is the cell `name_offset` columns to the right of the marker
/// cell. Returns `None`, meaning "skip this block", when the marker is
/// missing, the name column is past the end of the row, the name cell is
/// empty, or the cleaned name is a placeholder.
pub fn employee_name(row: &[Cell], rules: &ExtractionRules) -> Option<String> {
    let column = marker_column(row, &rules.employee_marker)?;
    let raw = row.get(column + rules.name_offset)?.as_text()?;
    clean_name(&raw, &rules.name_placeholders)
}
