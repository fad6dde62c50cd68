//! Field scanners for day rows.
//!
//! Each scanner walks the row left to right and returns the first cell that
//! satisfies its own pattern. The scanners do not share state: the only
//! coupling is that `exit` must differ from the chosen `entry`, and `total`
//! must differ from both. The same cell may therefore be picked by more than
//! one field when those checks allow it.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::ExtractionRules;
use crate::models::{Cell, DailyRecord};

fn date_prefix_regex() -> &'static Regex {
    static DATE_PREFIX_RE: OnceLock<Regex> = OnceLock::new();
    DATE_PREFIX_RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap())
}

fn clock_time_regex() -> &'static Regex {
    static CLOCK_TIME_RE: OnceLock<Regex> = OnceLock::new();
    CLOCK_TIME_RE.get_or_init(|| Regex::new(r"^\d{1,2}:\d{2}").unwrap())
}

fn duration_regex() -> &'static Regex {
    static DURATION_RE: OnceLock<Regex> = OnceLock::new();
    DURATION_RE.get_or_init(|| Regex::new(r"^\d+:\d{2}").unwrap())
}

/// Rendered text of every non-empty cell, in column order.
fn cell_texts(row: &[Cell]) -> impl Iterator<Item = String> + '_ {
    row.iter().filter_map(Cell::as_text)
}

/// First cell starting with a `YYYY-MM-DD` date.
pub fn scan_day(row: &[Cell]) -> Option<String> {
    cell_texts(row).find(|text| date_prefix_regex().is_match(text))
}

/// First cell starting with an `H:MM` or `HH:MM` time.
pub fn scan_entry(row: &[Cell]) -> Option<String> {
    cell_texts(row).find(|text| clock_time_regex().is_match(text))
}

/// First cell that is a time or carries the missing-exit keyword, and is
/// not equal to the chosen entry.
pub fn scan_exit(row: &[Cell], entry: Option<&str>, missing_exit_keyword: &str) -> Option<String> {
    let keyword = missing_exit_keyword.to_lowercase();
    cell_texts(row).find(|text| {
        let is_exit = clock_time_regex().is_match(text) || text.to_lowercase().contains(&keyword);
        is_exit && entry != Some(text.as_str())
    })
}

/// First cell starting with a `digits:MM` duration that equals neither the
/// chosen entry nor the chosen exit.
pub fn scan_total(row: &[Cell], entry: Option<&str>, exit: Option<&str>) -> Option<String> {
    cell_texts(row).find(|text| {
        duration_regex().is_match(text)
            && entry != Some(text.as_str())
            && exit != Some(text.as_str())
    })
}

/// First text cell containing one of the note keywords.
///
/// Only genuine text cells qualify; numbers and dates are never notes.
pub fn scan_note(row: &[Cell], note_keywords: &[String]) -> Option<String> {
    let keywords: Vec<String> = note_keywords.iter().map(|k| k.to_lowercase()).collect();
    row.iter().filter_map(Cell::as_str).find_map(|text| {
        let lowered = text.to_lowercase();
        keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
            .then(|| text.to_string())
    })
}

/// Parses one candidate day row into a record.
///
/// Returns `None` when none of day, entry or exit could be found.
///
/// # Example
///
/// ```
/// use attendance_engine::config::ExtractionRules;
/// use attendance_engine::extraction::scan_row;
/// use attendance_engine::models::Cell;
///
/// let row: Vec<Cell> = ["Lu", "2025-09-01", "08:00", "17:00", "9:00"]
///     .into_iter()
///     .map(Cell::from_text)
///     .collect();
/// let record = scan_row("Jane Smith", &row, &ExtractionRules::default()).unwrap();
///
/// assert_eq!(record.day.as_deref(), Some("2025-09-01"));
/// assert_eq!(record.entry.as_deref(), Some("08:00"));
/// assert_eq!(record.exit.as_deref(), Some("17:00"));
/// assert_eq!(record.total.as_deref(), Some("9:00"));
/// assert_eq!(record.note, None);
/// ```
pub fn scan_row(name: &str, row: &[Cell], rules: &ExtractionRules) -> Option<DailyRecord> {
    let day = scan_day(row);
    let entry = scan_entry(row);
    let exit = scan_exit(row, entry.as_deref(), &rules.missing_exit_keyword);
    let total = scan_total(row, entry.as_deref(), exit.as_deref());
    let note = scan_note(row, &rules.note_keywords);

    let record = DailyRecord {
        name: name.to_string(),
        day,
        entry,
        exit,
        total,
        note,
    };

    record.has_touchpoint().then_some(record)
}
