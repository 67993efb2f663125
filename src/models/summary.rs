//! Summary and result models for the Timecard Engine.
//!
//! This module contains the per-day [`DailySummary`] row, the aggregated
//! [`Timecard`], the [`TimecardResult`] returned by the export endpoint, and the
//! audit types that record how each figure was reached.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TenureInfo;

/// The split of paid hours into regular and overtime portions.
///
/// # Example
///
/// ```
/// use timecard_engine::models::PaidHoursSplit;
/// use rust_decimal::Decimal;
///
/// let split = PaidHoursSplit {
///     total_paid_hours: Decimal::new(10, 0),
///     regular_hours: Decimal::new(8, 0),
///     overtime_hours: Decimal::new(2, 0),
/// };
/// assert_eq!(split.regular_hours + split.overtime_hours, split.total_paid_hours);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidHoursSplit {
    /// Worked hours minus unpaid break hours, floored at zero.
    pub total_paid_hours: Decimal,
    /// Paid hours up to the overtime threshold.
    pub regular_hours: Decimal,
    /// Paid hours above the overtime threshold.
    pub overtime_hours: Decimal,
}

/// A display-ready break within a daily summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakLine {
    /// When the break started.
    pub start_time: NaiveDateTime,
    /// When the break ended, if it has.
    pub end_time: Option<NaiveDateTime>,
    /// Rendered length, e.g. "1h 30min".
    pub length: String,
    /// Rendered type, e.g. "Lunch - Unpaid".
    pub label: String,
    /// Whether the break counts as paid.
    pub is_paid: bool,
}

/// One employee-day as it appears on a timecard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// The employee the day belongs to.
    pub employee_id: String,
    /// The calendar date.
    pub date: NaiveDate,
    /// Clock-in time, if any.
    pub clock_in: Option<NaiveDateTime>,
    /// Clock-out time, if any.
    pub clock_out: Option<NaiveDateTime>,
    /// Shift span minus closed breaks.
    pub worked_hours: Decimal,
    /// Hours of explicitly unpaid breaks.
    pub unpaid_break_hours: Decimal,
    /// Worked hours minus unpaid break hours.
    pub total_paid_hours: Decimal,
    /// Paid hours up to the overtime threshold.
    pub regular_hours: Decimal,
    /// Paid hours above the overtime threshold.
    pub overtime_hours: Decimal,
    /// Advisory wage estimate; zero when no rate is known.
    pub estimated_wages: Decimal,
    /// Breaks rendered for display.
    pub breaks: Vec<BreakLine>,
    /// External payroll reference.
    pub payroll_id: Option<String>,
    /// Reason given for a no-show.
    pub no_show_reason: Option<String>,
    /// Note left by the employee.
    pub employee_note: Option<String>,
    /// Note left by a manager.
    pub manager_note: Option<String>,
}

/// Aggregated totals across every day on a timecard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimecardTotals {
    /// Number of records on the timecard.
    pub days_recorded: u32,
    /// Number of records with worked hours above zero.
    pub days_worked: u32,
    /// Number of records carrying a no-show reason.
    pub no_show_days: u32,
    /// Sum of worked hours.
    pub worked_hours: Decimal,
    /// Sum of unpaid break hours.
    pub unpaid_break_hours: Decimal,
    /// Sum of paid hours.
    pub total_paid_hours: Decimal,
    /// Sum of regular hours.
    pub regular_hours: Decimal,
    /// Sum of overtime hours.
    pub overtime_hours: Decimal,
    /// Sum of estimated wages.
    pub estimated_wages: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The date of the record the step applied to.
    pub date: NaiveDate,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated while inspecting or summarizing a record.
///
/// Warnings indicate data that was accepted as-is but may need attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium" or "high").
    pub severity: String,
}

/// The complete audit trace for a timecard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Rows, totals and audit trace for a set of attendance records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timecard {
    /// One row per record, in the order the records were given.
    pub rows: Vec<DailySummary>,
    /// Totals across all rows.
    pub totals: TimecardTotals,
    /// Steps and warnings collected while building the rows.
    pub audit_trace: AuditTrace,
}

/// The complete result of a timecard export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimecardResult {
    /// Unique identifier for this export.
    pub calculation_id: Uuid,
    /// When the export was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced it.
    pub engine_version: String,
    /// The version of the accounting policy applied.
    pub policy_version: String,
    /// The employee the timecard is for.
    pub employee_id: String,
    /// Currency of `estimated_wages`.
    pub currency: String,
    /// One row per record, date-ascending.
    pub rows: Vec<DailySummary>,
    /// Totals across all rows.
    pub totals: TimecardTotals,
    /// Tenure as of today, when a valid hire date was supplied.
    pub tenure: Option<TenureInfo>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_totals_default_is_zeroed() {
        let totals = TimecardTotals::default();
        assert_eq!(totals.days_recorded, 0);
        assert_eq!(totals.worked_hours, Decimal::ZERO);
        assert_eq!(totals.estimated_wages, Decimal::ZERO);
    }

    #[test]
    fn test_paid_hours_split_serializes_decimals_as_strings() {
        let split = PaidHoursSplit {
            total_paid_hours: dec("7.50"),
            regular_hours: dec("7.50"),
            overtime_hours: dec("0"),
        };

        let json = serde_json::to_string(&split).unwrap();
        assert!(json.contains("\"total_paid_hours\":\"7.50\""));
        assert!(json.contains("\"overtime_hours\":\"0\""));
    }

    #[test]
    fn test_audit_warning_round_trip() {
        let warning = AuditWarning {
            code: "OPEN_BREAK".to_string(),
            message: "break still open".to_string(),
            severity: "low".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        let deserialized: AuditWarning = serde_json::from_str(&json).unwrap();
        assert_eq!(warning, deserialized);
    }

    #[test]
    fn test_break_line_serialization() {
        let line = BreakLine {
            start_time: NaiveDateTime::parse_from_str("2026-01-15 12:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            end_time: None,
            length: "N/A".to_string(),
            label: "Break - Paid".to_string(),
            is_paid: true,
        };

        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"start_time\":\"2026-01-15T12:00:00\""));
        assert!(json.contains("\"end_time\":null"));
        assert!(json.contains("\"label\":\"Break - Paid\""));
    }
}
