//! CSV decoding.

use crate::error::{EngineError, EngineResult};
use crate::models::{Cell, RawGrid};

/// Reads header-less CSV into a grid.
///
/// Rows may have different lengths; short rows are padded with empty cells.
/// Every non-empty field becomes a text cell exactly as written.
pub fn decode_csv(bytes: &[u8], file_name: &str) -> EngineResult<RawGrid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| EngineError::GridDecode {
            file_name: file_name.to_string(),
            message: e.to_string(),
        })?;
        rows.push(record.iter().map(Cell::from_text).collect());
    }

    Ok(RawGrid::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_rows_are_padded() {
        let grid = decode_csv(b"a\nb,c,d\n", "x.csv").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.row(0).unwrap()[0], Cell::Text("a".to_string()));
        assert!(grid.row(0).unwrap()[2].is_empty());
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let grid = decode_csv(b"\"Smith, Jane\",08:00\n", "x.csv").unwrap();
        assert_eq!(grid.row(0).unwrap()[0].as_str(), Some("Smith, Jane"));
    }

    #[test]
    fn test_invalid_utf8_is_a_decode_error() {
        let result = decode_csv(&[0x61, 0xff, 0xfe, b'\n'], "x.csv");
        assert!(matches!(result, Err(EngineError::GridDecode { .. })));
    }

    #[test]
    fn test_empty_input_is_empty_grid() {
        let grid = decode_csv(b"", "x.csv").unwrap();
        assert!(grid.is_empty());
    }
}
