//! Row classification.
//!
//! Header rows and candidate day rows are recognised purely by substring
//! matches on the text of their cells. Matching is case-insensitive.

use std::collections::BTreeSet;

use crate::models::{Cell, RawGrid};

/// Returns true if the cell's text contains any of the lowercase needles.
fn cell_contains_any(cell: &Cell, needles: &[String]) -> bool {
    cell.as_text().is_some_and(|text| {
        let text = text.to_lowercase();
        needles.iter().any(|needle| text.contains(needle.as_str()))
    })
}

fn lowercase_all(tokens: &[String]) -> Vec<String> {
    tokens.iter().map(|token| token.to_lowercase()).collect()
}

/// Returns the column of the first cell containing the marker, if any.
///
/// # Example
///
/// ```
/// use attendance_engine::extraction::marker_column;
/// use attendance_engine::models::Cell;
///
/// let row = vec![Cell::Empty, Cell::from_text("EMPLOYEE:"), Cell::Empty];
/// assert_eq!(marker_column(&row, "Employee"), Some(1));
/// ```
pub fn marker_column(row: &[Cell], marker: &str) -> Option<usize> {
    let needle = [marker.to_lowercase()];
    row.iter().position(|cell| cell_contains_any(cell, &needle))
}

/// Returns the indices of all header rows, in grid order.
pub fn find_header_rows(grid: &RawGrid, marker: &str) -> Vec<usize> {
    let needle = [marker.to_lowercase()];
    grid.rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| row.iter().any(|cell| cell_contains_any(cell, &needle)))
        .map(|(index, _)| index)
        .collect()
}

/// Returns the indices of all rows containing a weekday token.
pub fn find_day_rows(grid: &RawGrid, weekday_tokens: &[String]) -> BTreeSet<usize> {
    let needles = lowercase_all(weekday_tokens);
    grid.rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| row.iter().any(|cell| cell_contains_any(cell, &needles)))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> Vec<String> {
        ["LU", "M", "X", "J", "V", "S", "D"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_header_rows_in_order() {
        let grid = RawGrid::from_text_rows(vec![
            vec!["Report", ""],
            vec!["Employee:", "Jane"],
            vec!["Lu", "2025-09-01"],
            vec!["employee", "John"],
        ]);
        assert_eq!(find_header_rows(&grid, "Employee"), vec![1, 3]);
    }

    #[test]
    fn test_day_rows_match_any_token_case_insensitively() {
        let grid = RawGrid::from_text_rows(vec![
            vec!["lu", "08:00"],
            vec!["", "08:00"],
            vec!["Ma", "09:00"],
            vec!["2025-09-01", "17:00"],
        ]);
        let rows = find_day_rows(&grid, &tokens());
        assert!(rows.contains(&0));
        assert!(!rows.contains(&1));
        assert!(rows.contains(&2));
        assert!(!rows.contains(&3));
    }

    #[test]
    fn test_non_text_cells_are_matched_on_their_rendering() {
        let grid = RawGrid::new(vec![vec![Cell::Bool(true)], vec![Cell::Float(3.0)]]);
        let needles = vec!["true".to_string()];
        let rows = find_day_rows(&grid, &needles);
        assert_eq!(rows.into_iter().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_marker_column_absent() {
        let row = vec![Cell::from_text("Name"), Cell::Empty];
        assert_eq!(marker_column(&row, "Employee"), None);
    }
}
