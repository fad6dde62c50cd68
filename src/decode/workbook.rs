//! Spreadsheet workbook decoding (xlsx, xlsm, xlsb, xls, ods).

use std::fmt::Display;
use std::io::Cursor;

use calamine::{Data, ExcelDateTime, Range, Reader, open_workbook_auto_from_rs};
use chrono::NaiveTime;

use crate::error::{EngineError, EngineResult};
use crate::models::{Cell, RawGrid};

const SECONDS_PER_DAY: f64 = 86_400.0;

fn decode_error(file_name: &str, message: impl Display) -> EngineError {
    EngineError::GridDecode {
        file_name: file_name.to_string(),
        message: message.to_string(),
    }
}

/// Reads the first worksheet of a workbook into a grid.
pub fn decode_workbook(bytes: &[u8], file_name: &str) -> EngineResult<RawGrid> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| decode_error(file_name, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| decode_error(file_name, "workbook has no worksheets"))?
        .map_err(|e| decode_error(file_name, e))?;

    Ok(grid_from_range(&range))
}

fn grid_from_range(range: &Range<Data>) -> RawGrid {
    RawGrid::new(
        range
            .rows()
            .map(|row| row.iter().map(cell_from_data).collect())
            .collect(),
    )
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(text) => Cell::from_text(text.clone()),
        Data::Int(value) => Cell::Int(*value),
        Data::Float(value) => Cell::Float(*value),
        Data::Bool(value) => Cell::Bool(*value),
        Data::DateTime(value) => cell_from_excel_datetime(value),
        Data::DateTimeIso(text) | Data::DurationIso(text) => Cell::from_text(text.clone()),
    }
}

/// Date-formatted serials: durations keep unbounded hours, serials below one
/// day are times of day, everything else is a calendar datetime.
fn cell_from_excel_datetime(value: &ExcelDateTime) -> Cell {
    let serial = value.as_f64();

    if value.is_duration() {
        return Cell::Text(format_duration(serial));
    }

    if (0.0..1.0).contains(&serial) {
        return time_of_day(serial).map_or(Cell::Empty, Cell::Time);
    }

    value.as_datetime().map_or(Cell::Empty, Cell::DateTime)
}

fn format_duration(serial: f64) -> String {
    let seconds = (serial * SECONDS_PER_DAY).round().max(0.0) as u64;
    format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

fn time_of_day(serial: f64) -> Option<NaiveTime> {
    let seconds = (serial * SECONDS_PER_DAY).round() as u32 % 86_400;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::aggregate;
    use crate::config::RulesConfig;
    use crate::extraction::extract_records;
    use crate::models::{Breakdown, PeriodToken};
    use calamine::ExcelDateTimeType;

    fn serial(value: f64) -> Data {
        Data::DateTime(ExcelDateTime::new(value, ExcelDateTimeType::DateTime, false))
    }

    fn duration(value: f64) -> Data {
        Data::DateTime(ExcelDateTime::new(value, ExcelDateTimeType::TimeDelta, false))
    }

    fn text(value: &str) -> Data {
        Data::String(value.to_string())
    }

    /// One employee block as an xlsx export stores it: a date serial for the
    /// day, time-of-day fractions for entry and exit, a duration total.
    fn exported_range() -> Range<Data> {
        let rows = vec![
            vec![text("Employee:"), Data::Empty, Data::Empty, text("Jane (Doe) Smith"), Data::Empty],
            vec![text("Lu"), serial(45901.0), serial(8.0 / 24.0), serial(17.0 / 24.0), duration(9.0 / 24.0)],
            vec![text("Ma"), serial(45902.0), serial(8.5 / 24.0), serial(16.75 / 24.0), duration(8.25 / 24.0)],
        ];
        let mut range = Range::new((0, 0), (2, 4));
        for (r, row) in rows.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                range.set_value((r as u32, c as u32), value);
            }
        }
        range
    }

    #[test]
    fn test_plain_values_map_to_cells() {
        assert_eq!(cell_from_data(&Data::Empty), Cell::Empty);
        assert_eq!(cell_from_data(&Data::String(String::new())), Cell::Empty);
        assert_eq!(
            cell_from_data(&Data::String("Lu".to_string())),
            Cell::Text("Lu".to_string())
        );
        assert_eq!(cell_from_data(&Data::Int(7)), Cell::Int(7));
        assert_eq!(cell_from_data(&Data::Float(1.5)), Cell::Float(1.5));
        assert_eq!(cell_from_data(&Data::Bool(true)), Cell::Bool(true));
        assert_eq!(
            cell_from_data(&Data::DurationIso("PT8H".to_string())),
            Cell::Text("PT8H".to_string())
        );
    }

    #[test]
    fn test_duration_keeps_hours_past_a_day() {
        // 1 day + 1h30m
        assert_eq!(format_duration(1.0 + 1.5 / 24.0), "25:30:00");
        assert_eq!(format_duration(0.375), "9:00:00");
    }

    #[test]
    fn test_time_of_day_from_fraction() {
        assert_eq!(
            time_of_day(0.5),
            Some(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
        );
        assert_eq!(
            time_of_day(8.5 / 24.0),
            Some(NaiveTime::from_hms_opt(8, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_exported_cells_render_like_the_sheet() {
        let grid = grid_from_range(&exported_range());
        let row = grid.row(1).unwrap();

        assert_eq!(row[1].as_text().as_deref(), Some("2025-09-01 00:00:00"));
        assert_eq!(row[2].as_text().as_deref(), Some("08:00:00"));
        assert_eq!(row[3].as_text().as_deref(), Some("17:00:00"));
        assert_eq!(row[4].as_text().as_deref(), Some("9:00:00"));
    }

    #[test]
    fn test_exported_sheet_totals_survive_aggregation() {
        let rules = RulesConfig::default();
        let records = extract_records(&grid_from_range(&exported_range()), rules.extraction());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].entry.as_deref(), Some("08:00:00"));
        assert_eq!(records[0].exit.as_deref(), Some("17:00:00"));
        assert_eq!(records[0].total.as_deref(), Some("9:00:00"));

        let period = PeriodToken::from_label("september_2025");
        let summaries = aggregate(records, &period, &[], rules.aggregation());

        match &summaries[0].breakdown {
            Breakdown::PerDay {
                hourstotal,
                hoursperday,
            } => {
                assert_eq!(hourstotal, "17:15");
                assert_eq!(hoursperday["01-september_2025"], "09:00");
                assert_eq!(hoursperday["02-september_2025"], "08:15");
            }
            other => panic!("Expected per-day breakdown, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_is_a_decode_error() {
        let result = decode_workbook(b"not a workbook", "report.xlsx");
        assert!(matches!(result, Err(EngineError::GridDecode { .. })));
    }
}
