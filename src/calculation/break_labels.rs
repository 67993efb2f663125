//! Break label formatting for timecards and exports.

use crate::models::BreakRecord;

/// Rendered when a break length cannot be determined.
pub const UNKNOWN_BREAK_LENGTH: &str = "N/A";

fn paid_label(b: &BreakRecord) -> &'static str {
    if b.is_paid() { "Paid" } else { "Unpaid" }
}

/// Renders a break length as `"{h}h {m}min"` or `"{m} min"`.
///
/// The explicit `duration` is preferred over the start/end span. An open
/// break without a duration renders as `"N/A"`.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::format_break_length;
/// use timecard_engine::models::BreakRecord;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-15 12:00", "%Y-%m-%d %H:%M").unwrap();
/// let lunch = BreakRecord {
///     start_time: start,
///     end_time: None,
///     duration: Some(90),
///     is_paid: Some(false),
///     break_type: None,
/// };
/// assert_eq!(format_break_length(&lunch), "1h 30min");
/// ```
pub fn format_break_length(b: &BreakRecord) -> String {
    match b.effective_minutes() {
        Some(minutes) if minutes >= 60 => format!("{}h {}min", minutes / 60, minutes % 60),
        Some(minutes) => format!("{} min", minutes),
        None => UNKNOWN_BREAK_LENGTH.to_string(),
    }
}

/// Renders a break type label.
///
/// An explicit non-empty `type` wins. Otherwise the label is bucketed from
/// the break length: up to 15 minutes echoes the minutes, up to 30 rounds to
/// "30 min", anything longer is "Lunch". The bucketing is a heuristic, not a
/// precise echo of the duration.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::format_break_type;
/// use timecard_engine::models::BreakRecord;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-15 12:00", "%Y-%m-%d %H:%M").unwrap();
/// let mut rest = BreakRecord {
///     start_time: start,
///     end_time: None,
///     duration: Some(10),
///     is_paid: None,
///     break_type: None,
/// };
/// assert_eq!(format_break_type(&rest), "10 min - Paid");
///
/// rest.duration = Some(20);
/// assert_eq!(format_break_type(&rest), "30 min - Paid");
/// ```
pub fn format_break_type(b: &BreakRecord) -> String {
    if let Some(label) = b.break_type.as_deref().filter(|t| !t.trim().is_empty()) {
        return label.to_string();
    }

    let paid = paid_label(b);
    match b.effective_minutes() {
        Some(minutes) if minutes <= 15 => format!("{} min - {}", minutes, paid),
        Some(minutes) if minutes <= 30 => format!("30 min - {}", paid),
        Some(_) => format!("Lunch - {}", paid),
        None => format!("Break - {}", paid),
    }
}
