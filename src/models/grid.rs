//! Raw grid model.
//!
//! This module defines the [`Cell`] and [`RawGrid`] types: an unlabeled,
//! loosely tabular sheet as decoded from a CSV or workbook upload. Nothing
//! about the grid is known up front; structure is discovered positionally
//! by the extractor.

use chrono::{NaiveDateTime, NaiveTime};

/// A single heterogeneous cell value.
///
/// The text rendering of each variant mirrors how a spreadsheet tool prints
/// the value, since every extraction pattern is matched against that text.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Cell;
/// use chrono::NaiveTime;
///
/// assert_eq!(Cell::Float(8.0).as_text().as_deref(), Some("8.0"));
/// assert_eq!(
///     Cell::Time(NaiveTime::from_hms_opt(8, 30, 0).unwrap()).as_text().as_deref(),
///     Some("08:30:00")
/// );
/// assert_eq!(Cell::Empty.as_text(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// No value.
    Empty,
    /// Free text, stored exactly as read.
    Text(String),
    /// Whole number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
    /// Calendar date with time of day.
    DateTime(NaiveDateTime),
    /// Time of day without a date.
    Time(NaiveTime),
}

impl Cell {
    /// Builds a cell from decoded text; the empty string becomes [`Cell::Empty`].
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(text)
        }
    }

    /// Returns true when the cell holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the raw string when the cell is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Renders the cell as text, or `None` for an empty cell.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(text) => Some(text.clone()),
            Cell::Int(value) => Some(value.to_string()),
            Cell::Float(value) => Some(render_float(*value)),
            Cell::Bool(true) => Some("True".to_string()),
            Cell::Bool(false) => Some("False".to_string()),
            Cell::DateTime(value) => Some(value.format("%Y-%m-%d %H:%M:%S").to_string()),
            Cell::Time(value) => Some(value.format("%H:%M:%S").to_string()),
        }
    }
}

fn render_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// An ordered sequence of rows, all padded to the same width.
///
/// The grid has no header row. Every row is exactly [`RawGrid::width`] cells
/// wide so that "the column does not exist" means "past the grid width".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGrid {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl RawGrid {
    /// Creates a grid, padding short rows with [`Cell::Empty`].
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::{Cell, RawGrid};
    ///
    /// let grid = RawGrid::new(vec![
    ///     vec![Cell::from_text("a")],
    ///     vec![Cell::from_text("b"), Cell::from_text("c")],
    /// ]);
    /// assert_eq!(grid.width(), 2);
    /// assert!(grid.row(0).unwrap()[1].is_empty());
    /// ```
    pub fn new(mut rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, Cell::Empty);
        }
        Self { rows, width }
    }

    /// Creates a grid of text cells; empty strings become empty cells.
    pub fn from_text_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Cell::from_text).collect())
                .collect(),
        )
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Returns the row at `index`, if any.
    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the common row width.
    pub fn width(&self) -> usize {
        self.width
    }
}
