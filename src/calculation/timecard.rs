//! Timecard aggregation.
//!
//! Builds one row per attendance record and totals them, collecting the audit
//! steps and warnings of every row into a single trace.

use std::time::Instant;

use rust_decimal::Decimal;

use crate::config::AccountingPolicy;
use crate::models::{AttendanceRecord, AuditTrace, Compensation, Timecard, TimecardTotals};

use super::daily_summary::summarize_day;

/// Builds a timecard from attendance records.
///
/// Rows keep the order of `records`; callers wanting a date-ascending
/// timecard sort before calling. The hourly rate is derived once from
/// `compensation` using the policy's standard annual hours.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::build_timecard;
/// use timecard_engine::config::AccountingPolicy;
/// use timecard_engine::models::{AttendanceRecord, Compensation};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let at = |d: &str, t: &str| NaiveDateTime::parse_from_str(&format!("{d} {t}"), "%Y-%m-%d %H:%M").unwrap();
/// let day = |d: &str, out: &str| AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap(),
///     clock_in: Some(at(d, "09:00")),
///     clock_out: Some(at(d, out)),
///     breaks: vec![],
///     total_hours: None,
///     payroll_id: None,
///     no_show_reason: None,
///     employee_note: None,
///     manager_note: None,
/// };
///
/// let compensation = Compensation {
///     salary: None,
///     hourly_rate: Some(Decimal::new(15, 0)),
///     currency: "USD".to_string(),
/// };
/// let records = vec![day("2026-01-12", "17:00"), day("2026-01-13", "19:00")];
///
/// let timecard = build_timecard(&records, Some(&compensation), &AccountingPolicy::default());
/// assert_eq!(timecard.totals.regular_hours, Decimal::new(16, 0));
/// assert_eq!(timecard.totals.overtime_hours, Decimal::new(2, 0));
/// assert_eq!(timecard.totals.estimated_wages, Decimal::new(285, 0));
/// ```
pub fn build_timecard(
    records: &[AttendanceRecord],
    compensation: Option<&Compensation>,
    policy: &AccountingPolicy,
) -> Timecard {
    let start_time = Instant::now();
    let hourly_rate =
        compensation.and_then(|c| c.effective_hourly_rate(policy.standard_annual_hours));

    let mut rows = Vec::with_capacity(records.len());
    let mut audit_trace = AuditTrace::default();
    let mut totals = TimecardTotals::default();
    let mut step_number: u32 = 1;

    for record in records {
        let result = summarize_day(record, hourly_rate, policy, step_number);
        step_number += result.audit_steps.len() as u32;

        let summary = &result.summary;
        totals.days_recorded += 1;
        if summary.worked_hours > Decimal::ZERO {
            totals.days_worked += 1;
        }
        if record.is_no_show() {
            totals.no_show_days += 1;
        }
        totals.worked_hours = totals.worked_hours.saturating_add(summary.worked_hours);
        totals.unpaid_break_hours = totals
            .unpaid_break_hours
            .saturating_add(summary.unpaid_break_hours);
        totals.total_paid_hours = totals.total_paid_hours.saturating_add(summary.total_paid_hours);
        totals.regular_hours = totals.regular_hours.saturating_add(summary.regular_hours);
        totals.overtime_hours = totals.overtime_hours.saturating_add(summary.overtime_hours);
        totals.estimated_wages = totals.estimated_wages.saturating_add(summary.estimated_wages);

        audit_trace.steps.extend(result.audit_steps);
        audit_trace.warnings.extend(result.warnings);
        rows.push(result.summary);
    }

    audit_trace.duration_us = start_time.elapsed().as_micros() as u64;

    Timecard {
        rows,
        totals,
        audit_trace,
    }
}
