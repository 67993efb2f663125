//! Daily summary calculation.
//!
//! This module combines the per-record functions into one timecard row for an
//! employee-day, recording an audit step for every figure it produces.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::AccountingPolicy;
use crate::models::{AttendanceRecord, AuditStep, AuditWarning, BreakLine, DailySummary};

use super::break_labels::{format_break_length, format_break_type};
use super::paid_hours::split_paid_hours;
use super::record_checks::inspect_record;
use super::unpaid_breaks::{compute_unpaid_break_hours, unpaid_break_minutes};
use super::wages::estimate_wages;
use super::worked_hours::compute_total_hours;

/// The result of summarizing one attendance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummaryResult {
    /// The timecard row.
    pub summary: DailySummary,
    /// The audit steps taken, numbered from the given step number.
    pub audit_steps: Vec<AuditStep>,
    /// Anomalies found in the record.
    pub warnings: Vec<AuditWarning>,
}

/// Where the worked hours of a summary came from.
fn worked_hours_source(record: &AttendanceRecord) -> (Decimal, &'static str) {
    if let Some(stored) = record.total_hours {
        return (stored, "stored_total");
    }
    match compute_total_hours(record) {
        Some(computed) => (computed, "clock_events"),
        None => (Decimal::ZERO, "none"),
    }
}

/// Summarizes one attendance record into a timecard row.
///
/// Worked hours come from the stored `total_hours` when present (the export
/// reads what was persisted at clock-out), otherwise from the clock events,
/// otherwise zero. The remaining figures follow from the unpaid-break
/// deduction, the overtime split and the wage estimate under `policy`.
///
/// # Arguments
///
/// * `record` - The attendance record to summarize
/// * `hourly_rate` - Rate for the wage estimate; `None` reports zero wages
/// * `policy` - Overtime threshold and multiplier to apply
/// * `step_number` - The step number of the first audit step
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::summarize_day;
/// use timecard_engine::config::AccountingPolicy;
/// use timecard_engine::models::{AttendanceRecord, BreakRecord};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let at = |t: &str| NaiveDateTime::parse_from_str(&format!("2026-01-15 {t}"), "%Y-%m-%d %H:%M").unwrap();
/// let record = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     clock_in: Some(at("09:00")),
///     clock_out: Some(at("17:30")),
///     breaks: vec![BreakRecord {
///         start_time: at("12:00"),
///         end_time: Some(at("12:30")),
///         duration: Some(30),
///         is_paid: Some(false),
///         break_type: None,
///     }],
///     total_hours: None,
///     payroll_id: None,
///     no_show_reason: None,
///     employee_note: None,
///     manager_note: None,
/// };
///
/// let result = summarize_day(&record, Some(Decimal::new(20, 0)), &AccountingPolicy::default(), 1);
/// assert_eq!(result.summary.total_paid_hours, Decimal::from_str("7.50").unwrap());
/// assert_eq!(result.summary.estimated_wages, Decimal::from_str("150.00").unwrap());
/// assert_eq!(result.audit_steps.len(), 4);
/// ```
pub fn summarize_day(
    record: &AttendanceRecord,
    hourly_rate: Option<Decimal>,
    policy: &AccountingPolicy,
    step_number: u32,
) -> DailySummaryResult {
    let (worked_hours, source) = worked_hours_source(record);
    let closed_breaks = record.breaks.iter().filter(|b| !b.is_open()).count();

    let worked_step = AuditStep {
        step_number,
        rule_id: "worked_hours".to_string(),
        rule_name: "Worked Hours".to_string(),
        date: record.date,
        input: serde_json::json!({
            "clock_in": record.clock_in,
            "clock_out": record.clock_out,
            "closed_breaks": closed_breaks,
            "stored_total_hours": record.total_hours.map(|h| h.normalize().to_string()),
        }),
        output: serde_json::json!({
            "worked_hours": worked_hours.normalize().to_string(),
            "source": source,
        }),
        reasoning: match source {
            "stored_total" => format!(
                "Used the {} hours stored at clock-out",
                worked_hours.normalize()
            ),
            "clock_events" => format!(
                "Shift span minus {} closed break(s) gives {} hours",
                closed_breaks,
                worked_hours.normalize()
            ),
            _ => "No clock-out or stored total, worked hours reported as 0".to_string(),
        },
    };

    let unpaid_minutes = unpaid_break_minutes(&record.breaks);
    let unpaid_break_hours = compute_unpaid_break_hours(&record.breaks);
    let unpaid_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "unpaid_break_deduction".to_string(),
        rule_name: "Unpaid Break Deduction".to_string(),
        date: record.date,
        input: serde_json::json!({
            "breaks": record.breaks.len(),
            "unpaid_minutes": unpaid_minutes,
        }),
        output: serde_json::json!({
            "unpaid_break_hours": unpaid_break_hours.normalize().to_string(),
        }),
        reasoning: format!(
            "{} minutes of unpaid breaks with a recorded duration deducted as {} hours",
            unpaid_minutes,
            unpaid_break_hours.normalize()
        ),
    };

    let split = split_paid_hours(worked_hours, unpaid_break_hours, policy.overtime_threshold);
    let split_step = AuditStep {
        step_number: step_number + 2,
        rule_id: "overtime_split".to_string(),
        rule_name: "Regular/Overtime Split".to_string(),
        date: record.date,
        input: serde_json::json!({
            "worked_hours": worked_hours.normalize().to_string(),
            "unpaid_break_hours": unpaid_break_hours.normalize().to_string(),
            "threshold": policy.overtime_threshold.normalize().to_string(),
        }),
        output: serde_json::json!({
            "total_paid_hours": split.total_paid_hours.normalize().to_string(),
            "regular_hours": split.regular_hours.normalize().to_string(),
            "overtime_hours": split.overtime_hours.normalize().to_string(),
        }),
        reasoning: if split.overtime_hours > Decimal::ZERO {
            format!(
                "{} paid hours exceeds {} hour threshold by {} hours",
                split.total_paid_hours.normalize(),
                policy.overtime_threshold.normalize(),
                split.overtime_hours.normalize()
            )
        } else {
            format!(
                "{} paid hours is within {} hour threshold, no overtime",
                split.total_paid_hours.normalize(),
                policy.overtime_threshold.normalize()
            )
        },
    };

    let estimated_wages = estimate_wages(
        split.regular_hours,
        split.overtime_hours,
        hourly_rate,
        policy.overtime_multiplier,
    );
    let wage_step = AuditStep {
        step_number: step_number + 3,
        rule_id: "wage_estimate".to_string(),
        rule_name: "Estimated Wages".to_string(),
        date: record.date,
        input: serde_json::json!({
            "regular_hours": split.regular_hours.normalize().to_string(),
            "overtime_hours": split.overtime_hours.normalize().to_string(),
            "hourly_rate": hourly_rate.map(|r| r.normalize().to_string()),
            "overtime_multiplier": policy.overtime_multiplier.normalize().to_string(),
        }),
        output: serde_json::json!({
            "estimated_wages": estimated_wages.normalize().to_string(),
        }),
        reasoning: match hourly_rate.filter(|r| !r.is_zero()) {
            Some(rate) => format!(
                "{} regular hours at {} plus {} overtime hours at {}x",
                split.regular_hours.normalize(),
                rate.normalize(),
                split.overtime_hours.normalize(),
                policy.overtime_multiplier.normalize()
            ),
            None => "No hourly rate available, wages reported as 0".to_string(),
        },
    };

    let breaks = record
        .breaks
        .iter()
        .map(|b| BreakLine {
            start_time: b.start_time,
            end_time: b.end_time,
            length: format_break_length(b),
            label: format_break_type(b),
            is_paid: b.is_paid(),
        })
        .collect();

    let summary = DailySummary {
        employee_id: record.employee_id.clone(),
        date: record.date,
        clock_in: record.clock_in,
        clock_out: record.clock_out,
        worked_hours,
        unpaid_break_hours,
        total_paid_hours: split.total_paid_hours,
        regular_hours: split.regular_hours,
        overtime_hours: split.overtime_hours,
        estimated_wages,
        breaks,
        payroll_id: record.payroll_id.clone(),
        no_show_reason: record.no_show_reason.clone(),
        employee_note: record.employee_note.clone(),
        manager_note: record.manager_note.clone(),
    };

    DailySummaryResult {
        summary,
        audit_steps: vec![worked_step, unpaid_step, split_step, wage_step],
        warnings: inspect_record(record),
    }
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

    fn make_record(clock_out: &str, breaks: Vec<BreakRecord>) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            clock_in: Some(make_datetime("09:00:00")),
            clock_out: Some(make_datetime(clock_out)),
            breaks,
            total_hours: None,
            payroll_id: Some("PR-42".to_string()),
            no_show_reason: None,
            employee_note: None,
            manager_note: Some("Covered front desk".to_string()),
        }
    }

    fn unpaid_lunch() -> BreakRecord {
        BreakRecord {
            start_time: make_datetime("12:00:00"),
            end_time: Some(make_datetime("12:30:00")),
            duration: Some(30),
            is_paid: Some(false),
            break_type: None,
        }
    }

    #[test]
    fn test_standard_day_with_unpaid_lunch() {
        let record = make_record("17:30:00", vec![unpaid_lunch()]);
        let result = summarize_day(&record, Some(dec("20")), &AccountingPolicy::default(), 1);
        let summary = &result.summary;

        assert_eq!(summary.worked_hours, dec("8.00"));
        assert_eq!(summary.unpaid_break_hours, dec("0.50"));
        assert_eq!(summary.total_paid_hours, dec("7.50"));
        assert_eq!(summary.regular_hours, dec("7.50"));
        assert_eq!(summary.overtime_hours, Decimal::ZERO);
        assert_eq!(summary.estimated_wages, dec("150.00"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_long_day_with_overtime() {
        let record = make_record("19:00:00", vec![]);
        let result = summarize_day(&record, Some(dec("15")), &AccountingPolicy::default(), 1);

        assert_eq!(result.summary.regular_hours, dec("8"));
        assert_eq!(result.summary.overtime_hours, dec("2"));
        assert_eq!(result.summary.estimated_wages, dec("165.00"));
        assert!(result.audit_steps[2].reasoning.contains("exceeds"));
    }

    #[test]
    fn test_custom_policy_threshold() {
        let record = make_record("19:00:00", vec![]);
        let policy = AccountingPolicy::default().with_overrides(Some(dec("10")), None);
        let result = summarize_day(&record, Some(dec("15")), &policy, 1);

        assert_eq!(result.summary.regular_hours, dec("10"));
        assert_eq!(result.summary.overtime_hours, Decimal::ZERO);
        assert_eq!(result.audit_steps[2].input["threshold"].as_str().unwrap(), "10");
    }

    #[test]
    fn test_stored_total_preferred_over_clock_events() {
        let mut record = make_record("17:30:00", vec![unpaid_lunch()]);
        record.total_hours = Some(dec("7.75"));
        let result = summarize_day(&record, None, &AccountingPolicy::default(), 1);

        assert_eq!(result.summary.worked_hours, dec("7.75"));
        assert_eq!(result.audit_steps[0].output["source"], "stored_total");
        // 7.75 stored vs 8.00 recalculated
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, "STORED_TOTAL_MISMATCH");
    }

    #[test]
    fn test_no_show_reports_zero_hours() {
        let mut record = make_record("17:00:00", vec![]);
        record.clock_in = None;
        record.clock_out = None;
        record.no_show_reason = Some("Sick leave".to_string());

        let result = summarize_day(&record, Some(dec("20")), &AccountingPolicy::default(), 1);

        assert_eq!(result.summary.worked_hours, Decimal::ZERO);
        assert_eq!(result.summary.estimated_wages, Decimal::ZERO);
        assert_eq!(result.summary.no_show_reason.as_deref(), Some("Sick leave"));
        assert_eq!(result.audit_steps[0].output["source"], "none");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_without_rate_wages_are_zero() {
        let record = make_record("17:00:00", vec![]);
        let result = summarize_day(&record, None, &AccountingPolicy::default(), 1);

        assert_eq!(result.summary.estimated_wages, Decimal::ZERO);
        assert!(result.audit_steps[3].reasoning.contains("No hourly rate"));
    }

    #[test]
    fn test_step_numbers_are_sequential() {
        let record = make_record("17:00:00", vec![]);
        let result = summarize_day(&record, None, &AccountingPolicy::default(), 5);
        let numbers: Vec<u32> = result.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_break_lines_and_notes_carried_through() {
        let mut long_lunch = unpaid_lunch();
        long_lunch.end_time = Some(make_datetime("13:30:00"));
        long_lunch.duration = Some(90);
        let record = make_record("18:00:00", vec![long_lunch]);

        let result = summarize_day(&record, None, &AccountingPolicy::default(), 1);
        let line = &result.summary.breaks[0];

        assert_eq!(line.length, "1h 30min");
        assert_eq!(line.label, "Lunch - Unpaid");
        assert!(!line.is_paid);
        assert_eq!(result.summary.payroll_id.as_deref(), Some("PR-42"));
        assert_eq!(
            result.summary.manager_note.as_deref(),
            Some("Covered front desk")
        );
    }
}
