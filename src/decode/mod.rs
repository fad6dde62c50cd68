//! Upload decoding.
//!
//! This module turns the raw bytes of an uploaded time report into a
//! [`RawGrid`]. The file name picks the decoder: `.csv` files are read as
//! header-less CSV, anything else is opened as a spreadsheet workbook.

mod csv_grid;
mod workbook;

use std::any::Any;
use std::panic::{self, UnwindSafe};

use crate::error::{EngineError, EngineResult};
use crate::models::RawGrid;

pub use csv_grid::decode_csv;
pub use workbook::decode_workbook;

/// Decodes an upload into a grid, choosing the format from the file name.
///
/// A panic inside a decoder is caught and reported as
/// [`EngineError::GridDecode`], like any other unreadable file.
///
/// # Example
///
/// ```
/// use attendance_engine::decode::decode_grid;
///
/// let grid = decode_grid(b"Employee:,,,Jane\nLu,08:00\n", "report.CSV").unwrap();
/// assert_eq!(grid.len(), 2);
/// assert_eq!(grid.width(), 4);
/// ```
pub fn decode_grid(bytes: &[u8], file_name: &str) -> EngineResult<RawGrid> {
    if file_name.to_lowercase().ends_with(".csv") {
        contain_panic(file_name, || decode_csv(bytes, file_name))
    } else {
        contain_panic(file_name, || decode_workbook(bytes, file_name))
    }
}

fn contain_panic<F>(file_name: &str, decode: F) -> EngineResult<RawGrid>
where
    F: FnOnce() -> EngineResult<RawGrid> + UnwindSafe,
{
    panic::catch_unwind(decode).unwrap_or_else(|payload| {
        Err(EngineError::GridDecode {
            file_name: file_name.to_string(),
            message: format!("decoder panicked: {}", panic_message(payload.as_ref())),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown cause")
}
