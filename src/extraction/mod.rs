//! Record extraction for time-and-attendance reports.
//!
//! This module contains the period resolver and the grid record extractor:
//! header and day row classification, employee name lookup, the per-field
//! scanners, and the block walk that ties them together.

mod extractor;
mod fields;
mod name;
mod period;
mod rows;

pub use extractor::{Extraction, extract, extract_from_bytes, extract_records};
pub use fields::{scan_day, scan_entry, scan_exit, scan_note, scan_row, scan_total};
pub use name::{clean_name, employee_name};
pub use period::resolve_period;
pub use rows::{find_day_rows, find_header_rows, marker_column};
