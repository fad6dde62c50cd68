//! Attendance completeness.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::DailyRecord;

/// Returns true if the day counts towards attendance.
///
/// A day counts when it has an entry, an exit or a note, unless the note is
/// exactly the missing-checkout flag.
pub fn counts_as_attended(record: &DailyRecord, missing_checkout_note: &str) -> bool {
    let touched = record.entry.is_some() || record.exit.is_some() || record.note.is_some();
    touched && record.note.as_deref() != Some(missing_checkout_note)
}

/// Percentage of attended days, rounded to two decimals; zero for no days.
///
/// # Example
///
/// ```
/// use attendance_engine::aggregation::attendance_percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(attendance_percentage(3, 4), Decimal::new(75, 0));
/// assert_eq!(attendance_percentage(2, 3), Decimal::new(6667, 2));
/// assert_eq!(attendance_percentage(0, 0), Decimal::ZERO);
/// ```
pub fn attendance_percentage(attended: usize, total: usize) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }

    (Decimal::from(attended) * Decimal::ONE_HUNDRED / Decimal::from(total))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}
