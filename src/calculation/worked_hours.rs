//! Elapsed-hours calculation.
//!
//! Worked hours are the shift span minus the span of every closed break.
//! Open breaks deduct nothing, so time spent in a break that has not ended
//! yet still counts as worked.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, BreakRecord};

use super::rounding::round_2dp;

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Sum of closed-break spans in milliseconds, saturating at the `i64` bounds.
fn closed_break_millis(breaks: &[BreakRecord]) -> i64 {
    breaks
        .iter()
        .filter_map(|b| b.end_time.map(|end| (end - b.start_time).num_milliseconds()))
        .fold(0i64, i64::saturating_add)
}

/// Computes worked hours for a shift, rounded to 2 decimal places.
///
/// The caller guarantees `clock_out >= clock_in`. If that does not hold the
/// result is negative rather than an error.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::compute_worked_hours;
/// use timecard_engine::models::BreakRecord;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let at = |t: &str| NaiveDateTime::parse_from_str(&format!("2026-01-15 {t}"), "%Y-%m-%d %H:%M").unwrap();
/// let lunch = BreakRecord {
///     start_time: at("12:00"),
///     end_time: Some(at("12:30")),
///     duration: Some(30),
///     is_paid: Some(false),
///     break_type: None,
/// };
///
/// assert_eq!(compute_worked_hours(at("09:00"), at("17:30"), &[lunch]), Decimal::new(8, 0));
/// ```
pub fn compute_worked_hours(
    clock_in: NaiveDateTime,
    clock_out: NaiveDateTime,
    breaks: &[BreakRecord],
) -> Decimal {
    let span_ms = (clock_out - clock_in).num_milliseconds();
    let worked_ms = span_ms.saturating_sub(closed_break_millis(breaks));

    round_2dp(Decimal::from(worked_ms) / Decimal::from(MILLIS_PER_HOUR))
}

/// Computes the `total_hours` to persist for a record at clock-out time.
///
/// Returns `None` unless the record has both a clock-in and a clock-out.
pub fn compute_total_hours(record: &AttendanceRecord) -> Option<Decimal> {
    record
        .clock_span()
        .map(|(clock_in, clock_out)| compute_worked_hours(clock_in, clock_out, &record.breaks))
}
