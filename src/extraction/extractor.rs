//! Grid record extraction.
//!
//! This module walks an unlabeled grid, splits it into employee blocks at
//! each header row, and turns the candidate day rows inside each block into
//! [`DailyRecord`]s.

use tracing::{debug, info, warn};

use crate::config::ExtractionRules;
use crate::decode::decode_grid;
use crate::models::{DailyRecord, PeriodToken, RawGrid};

use super::fields::scan_row;
use super::name::employee_name;
use super::period::resolve_period;
use super::rows::{find_day_rows, find_header_rows};

/// The output of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Retained records across all employee blocks, in grid order.
    pub records: Vec<DailyRecord>,
    /// The period shared by every record of the upload.
    pub period: PeriodToken,
}

impl Extraction {
    /// The result for an unreadable upload: no records, unknown period.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            period: PeriodToken::unknown(),
        }
    }
}

/// Extracts daily records from a grid.
///
/// Each header row opens a block that runs up to the next header row or the
/// end of the grid. Blocks without a usable name are skipped, and a block
/// with no candidate day rows yields nothing. The function is pure: the same
/// grid always yields the same records.
///
/// # Example
///
/// ```
/// use attendance_engine::config::ExtractionRules;
/// use attendance_engine::extraction::extract_records;
/// use attendance_engine::models::RawGrid;
///
/// let grid = RawGrid::from_text_rows(vec![
///     vec!["Employee:", "", "", "Jane (Doe) Smith"],
///     vec!["Lu", "2025-09-01", "08:00", "9:30"],
///     vec!["Ma", "2025-09-02", "08:00", "10:15"],
/// ]);
/// let records = extract_records(&grid, &ExtractionRules::default());
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].name, "Jane Smith");
/// assert_eq!(records[1].exit.as_deref(), Some("10:15"));
/// ```
pub fn extract_records(grid: &RawGrid, rules: &ExtractionRules) -> Vec<DailyRecord> {
    let header_rows = find_header_rows(grid, &rules.employee_marker);
    let day_rows = find_day_rows(grid, &rules.weekday_tokens);

    let mut records = Vec::new();

    for (block, &header_index) in header_rows.iter().enumerate() {
        let boundary = header_rows
            .get(block + 1)
            .copied()
            .unwrap_or_else(|| grid.len());

        let Some(header) = grid.row(header_index) else {
            continue;
        };

        let Some(name) = employee_name(header, rules) else {
            debug!(row = header_index, "Skipping header row without a usable employee name");
            continue;
        };

        let before = records.len();
        records.extend(
            (header_index + 1..boundary)
                .filter(|index| day_rows.contains(index))
                .filter_map(|index| grid.row(index))
                .filter_map(|row| scan_row(&name, row, rules)),
        );

        debug!(
            row = header_index,
            employee = %name,
            records = records.len() - before,
            "Extracted employee block"
        );
    }

    records.retain(|record| !record.name.trim().is_empty());
    records
}

/// Extracts records and the period token from an already-decoded grid.
pub fn extract(grid: &RawGrid, file_name: &str, rules: &ExtractionRules) -> Extraction {
    Extraction {
        records: extract_records(grid, rules),
        period: resolve_period(file_name),
    }
}

/// Decodes an upload and extracts its records.
///
/// Decode failures are logged and converted into [`Extraction::empty`]; this
/// function never returns an error.
pub fn extract_from_bytes(bytes: &[u8], file_name: &str, rules: &ExtractionRules) -> Extraction {
    match decode_grid(bytes, file_name) {
        Ok(grid) => {
            let extraction = extract(&grid, file_name, rules);
            info!(
                file_name = %file_name,
                period = %extraction.period,
                rows = grid.len(),
                records = extraction.records.len(),
                "Extracted attendance records"
            );
            extraction
        }
        Err(err) => {
            warn!(file_name = %file_name, error = %err, "Could not read attendance file");
            Extraction::empty()
        }
    }
}
