//! Record inspection.
//!
//! The engine passes suspicious data through unchanged. This module names
//! what it passed through, so reports can show it next to the figures.

use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, AuditWarning};

use super::worked_hours::compute_total_hours;

/// A break without an end time was counted as worked time.
pub const OPEN_BREAK: &str = "OPEN_BREAK";
/// A break's recorded duration disagrees with its start/end span.
pub const BREAK_DURATION_MISMATCH: &str = "BREAK_DURATION_MISMATCH";
/// An unpaid break has no duration and was left out of the deduction.
pub const UNPAID_BREAK_WITHOUT_DURATION: &str = "UNPAID_BREAK_WITHOUT_DURATION";
/// Clock-out precedes clock-in.
pub const CLOCK_OUT_BEFORE_CLOCK_IN: &str = "CLOCK_OUT_BEFORE_CLOCK_IN";
/// A clock event is missing and no stored total exists.
pub const INCOMPLETE_RECORD: &str = "INCOMPLETE_RECORD";
/// The stored total differs from a fresh calculation.
pub const STORED_TOTAL_MISMATCH: &str = "STORED_TOTAL_MISMATCH";

fn warning(code: &str, severity: &str, message: String) -> AuditWarning {
    AuditWarning {
        code: code.to_string(),
        message,
        severity: severity.to_string(),
    }
}

/// Inspects a record and returns a warning for each anomaly found.
///
/// Never fails and never changes how the record is calculated.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::{inspect_record, INCOMPLETE_RECORD};
/// use timecard_engine::models::AttendanceRecord;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let record = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     clock_in: Some(NaiveDateTime::parse_from_str("2026-01-15 09:00", "%Y-%m-%d %H:%M").unwrap()),
///     clock_out: None,
///     breaks: vec![],
///     total_hours: None,
///     payroll_id: None,
///     no_show_reason: None,
///     employee_note: None,
///     manager_note: None,
/// };
///
/// let warnings = inspect_record(&record);
/// assert_eq!(warnings.len(), 1);
/// assert_eq!(warnings[0].code, INCOMPLETE_RECORD);
/// ```
pub fn inspect_record(record: &AttendanceRecord) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    for (index, b) in record.breaks.iter().enumerate() {
        if b.is_open() {
            warnings.push(warning(
                OPEN_BREAK,
                "low",
                format!(
                    "Break {} started at {} has no end time and was counted as worked time",
                    index + 1,
                    b.start_time
                ),
            ));
        }

        if let (Some(duration), Some(span)) = (b.duration, b.span_minutes()) {
            if i64::from(duration) != span {
                warnings.push(warning(
                    BREAK_DURATION_MISMATCH,
                    "medium",
                    format!(
                        "Break {} records {} minutes but spans {} minutes; both values were used as recorded",
                        index + 1,
                        duration,
                        span
                    ),
                ));
            }
        }

        if !b.is_paid() && b.duration.is_none() {
            warnings.push(warning(
                UNPAID_BREAK_WITHOUT_DURATION,
                "medium",
                format!(
                    "Unpaid break {} has no recorded duration and was not deducted from paid hours",
                    index + 1
                ),
            ));
        }
    }

    match (record.clock_span(), compute_total_hours(record)) {
        (Some((clock_in, clock_out)), Some(computed)) => {
            if clock_out < clock_in {
                warnings.push(warning(
                    CLOCK_OUT_BEFORE_CLOCK_IN,
                    "high",
                    format!("Clock-out {} is before clock-in {}", clock_out, clock_in),
                ));
            }

            let drifted = record
                .total_hours
                .filter(|stored| stored.saturating_sub(computed).abs() > Decimal::new(1, 2));
            if let Some(stored) = drifted {
                warnings.push(warning(
                    STORED_TOTAL_MISMATCH,
                    "medium",
                    format!(
                        "Stored total of {} hours differs from the recalculated {} hours",
                        stored.normalize(),
                        computed.normalize()
                    ),
                ));
            }
        }
        _ => {
            if record.total_hours.is_none() && !record.is_no_show() {
                warnings.push(warning(
                    INCOMPLETE_RECORD,
                    "low",
                    "Record is missing a clock-in or clock-out and has no stored total".to_string(),
                ));
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BreakRecord;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("2026-01-15 {}", time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_record(breaks: Vec<BreakRecord>) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            clock_in: Some(make_datetime("09:00:00")),
            clock_out: Some(make_datetime("17:30:00")),
            breaks,
            total_hours: None,
            payroll_id: None,
            no_show_reason: None,
            employee_note: None,
            manager_note: None,
        }
    }

    fn lunch() -> BreakRecord {
        BreakRecord {
            start_time: make_datetime("12:00:00"),
            end_time: Some(make_datetime("12:30:00")),
            duration: Some(30),
            is_paid: Some(false),
            break_type: None,
        }
    }

    fn codes(warnings: &[AuditWarning]) -> Vec<&str> {
        warnings.iter().map(|w| w.code.as_str()).collect()
    }

    #[test]
    fn test_clean_record_has_no_warnings() {
        let record = make_record(vec![lunch()]);
        assert!(inspect_record(&record).is_empty());
    }

    #[test]
    fn test_open_break_flagged() {
        let mut br = lunch();
        br.end_time = None;
        let warnings = inspect_record(&make_record(vec![br]));
        assert_eq!(codes(&warnings), vec![OPEN_BREAK]);
        assert_eq!(warnings[0].severity, "low");
    }

    #[test]
    fn test_duration_mismatch_flagged() {
        let mut br = lunch();
        br.duration = Some(45);
        let warnings = inspect_record(&make_record(vec![br]));
        assert_eq!(codes(&warnings), vec![BREAK_DURATION_MISMATCH]);
        assert!(warnings[0].message.contains("45 minutes"));
        assert!(warnings[0].message.contains("30 minutes"));
    }

    #[test]
    fn test_unpaid_break_without_duration_flagged() {
        let mut br = lunch();
        br.duration = None;
        let warnings = inspect_record(&make_record(vec![br]));
        assert_eq!(codes(&warnings), vec![UNPAID_BREAK_WITHOUT_DURATION]);
    }

    #[test]
    fn test_clock_out_before_clock_in_flagged() {
        let mut record = make_record(vec![]);
        record.clock_out = Some(make_datetime("08:00:00"));
        let warnings = inspect_record(&record);
        assert_eq!(codes(&warnings), vec![CLOCK_OUT_BEFORE_CLOCK_IN]);
        assert_eq!(warnings[0].severity, "high");
    }

    #[test]
    fn test_incomplete_record_flagged_unless_no_show_or_stored() {
        let mut record = make_record(vec![]);
        record.clock_out = None;
        assert_eq!(codes(&inspect_record(&record)), vec![INCOMPLETE_RECORD]);

        record.total_hours = Some(dec("8"));
        assert!(inspect_record(&record).is_empty());

        let mut no_show = make_record(vec![]);
        no_show.clock_in = None;
        no_show.clock_out = None;
        no_show.no_show_reason = Some("Sick".to_string());
        assert!(inspect_record(&no_show).is_empty());
    }

    #[test]
    fn test_stored_total_mismatch_flagged() {
        let mut record = make_record(vec![lunch()]);
        record.total_hours = Some(dec("8.00"));
        assert!(inspect_record(&record).is_empty());

        record.total_hours = Some(dec("7.50"));
        let warnings = inspect_record(&record);
        assert_eq!(codes(&warnings), vec![STORED_TOTAL_MISMATCH]);
        assert!(warnings[0].message.contains("7.5"));
    }

    #[test]
    fn test_stored_total_within_tolerance_not_flagged() {
        let mut record = make_record(vec![lunch()]);
        record.total_hours = Some(dec("8.01"));
        assert!(inspect_record(&record).is_empty());
    }
}
