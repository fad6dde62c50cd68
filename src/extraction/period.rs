//! Period resolution from report file names.
//!
//! Time reports are exported with their covered range in the file name,
//! e.g. `NGTimereport-20250901-20250930-1335.xlsx`. The first 8-digit date
//! stamp decides which month the whole upload belongs to.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::PeriodToken;

fn date_stamp_regex() -> &'static Regex {
    static DATE_STAMP_RE: OnceLock<Regex> = OnceLock::new();
    DATE_STAMP_RE.get_or_init(|| Regex::new(r"[0-9]{8}").unwrap())
}

/// Derives the period token from a file name.
///
/// The first run of 8 digits is read as `YYYYMMDD`. When there is no such
/// run, or the digits are not a real calendar date, the unknown sentinel is
/// returned. This function never fails.
///
/// # Example
///
/// ```
/// use attendance_engine::extraction::resolve_period;
///
/// assert_eq!(
///     resolve_period("NGTimereport-20250901-20250930-1335.xlsx").as_str(),
///     "september_2025"
/// );
/// assert!(resolve_period("NGTimereport-20251345.xlsx").is_unknown());
/// assert!(resolve_period("report.csv").is_unknown());
/// ```
pub fn resolve_period(file_name: &str) -> PeriodToken {
    let Some(stamp) = date_stamp_regex().find(file_name) else {
        return PeriodToken::unknown();
    };

    match parse_stamp(stamp.as_str()) {
        Some(date) => PeriodToken::from_date(date),
        None => PeriodToken::unknown(),
    }
}

/// Parses an ASCII `YYYYMMDD` stamp.
fn parse_stamp(stamp: &str) -> Option<NaiveDate> {
    let year = stamp.get(0..4)?.parse::<i32>().ok()?;
    let month = stamp.get(4..6)?.parse::<u32>().ok()?;
    let day = stamp.get(6..8)?.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
