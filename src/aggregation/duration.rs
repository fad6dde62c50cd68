//! `HH:MM` duration parsing and formatting.

/// Converts a daily total such as `"7:45"` into minutes.
///
/// Reads the leading `hours:minutes` of the text. A trailing `:SS` seconds
/// part, as rendered for workbook duration and time cells, is dropped.
/// Anything else, including a missing total, is zero.
///
/// # Example
///
/// ```
/// use attendance_engine::aggregation::parse_minutes;
///
/// assert_eq!(parse_minutes(Some("1:30")), 90);
/// assert_eq!(parse_minutes(Some("123:05")), 7385);
/// assert_eq!(parse_minutes(Some("9:00:00")), 540);
/// assert_eq!(parse_minutes(Some("Falta SALIDA")), 0);
/// assert_eq!(parse_minutes(None), 0);
/// ```
pub fn parse_minutes(total: Option<&str>) -> u64 {
    let Some(text) = total else {
        return 0;
    };

    let mut parts = text.trim().splitn(3, ':');
    let hours = parts.next().and_then(parse_digits);
    let minutes = parts.next().and_then(parse_digits);
    let seconds_ok = parts.next().is_none_or(|seconds| parse_digits(seconds).is_some());

    match (hours, minutes) {
        (Some(hours), Some(minutes)) if seconds_ok => hours * 60 + minutes,
        _ => 0,
    }
}

fn parse_digits(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Formats minutes as `HH:MM`; hours are zero-padded to two digits but not
/// capped at 24.
///
/// # Example
///
/// ```
/// use attendance_engine::aggregation::format_minutes;
///
/// assert_eq!(format_minutes(225), "03:45");
/// assert_eq!(format_minutes(6000), "100:00");
/// ```
pub fn format_minutes(minutes: u64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
