//! Unpaid-break deduction.
//!
//! Only breaks explicitly marked unpaid and carrying a recorded `duration`
//! count. A missing `duration` is not recomputed from the timestamps: such
//! breaks are expected to have been normalized upstream and are skipped here.

use rust_decimal::Decimal;

use crate::models::BreakRecord;

use super::rounding::round_2dp;

/// Sums the recorded minutes of unpaid breaks that carry a `duration`.
///
/// The sum saturates at `u64::MAX` instead of overflowing.
pub fn unpaid_break_minutes(breaks: &[BreakRecord]) -> u64 {
    breaks
        .iter()
        .filter(|b| b.is_paid == Some(false))
        .filter_map(|b| b.duration)
        .fold(0u64, |total, minutes| total.saturating_add(u64::from(minutes)))
}

/// Computes unpaid break hours, rounded to 2 decimal places.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::compute_unpaid_break_hours;
/// use timecard_engine::models::BreakRecord;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-15 12:00", "%Y-%m-%d %H:%M").unwrap();
/// let lunch = BreakRecord {
///     start_time: start,
///     end_time: None,
///     duration: Some(30),
///     is_paid: Some(false),
///     break_type: None,
/// };
///
/// assert_eq!(compute_unpaid_break_hours(&[lunch]), Decimal::new(50, 2));
/// ```
pub fn compute_unpaid_break_hours(breaks: &[BreakRecord]) -> Decimal {
    round_2dp(Decimal::from(unpaid_break_minutes(breaks)) / Decimal::from(60))
}
