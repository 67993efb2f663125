//! Attendance model and related types.
//!
//! This module defines the [`AttendanceRecord`] and [`BreakRecord`] structs
//! that describe one employee-day as captured by the clock-in/clock-out workflow.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents one rest period within a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakRecord {
    /// When the break started.
    pub start_time: NaiveDateTime,
    /// When the break ended. `None` while the break is still open.
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    /// Length of the break in whole minutes, if recorded explicitly.
    #[serde(default)]
    pub duration: Option<u32>,
    /// Whether the break is paid. Only an explicit `false` marks it unpaid.
    #[serde(default)]
    pub is_paid: Option<bool>,
    /// Free-text label for the break (e.g. "Lunch").
    #[serde(default, rename = "type")]
    pub break_type: Option<String>,
}

impl BreakRecord {
    /// Returns true unless the break is explicitly marked unpaid.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_engine::models::BreakRecord;
    /// use chrono::NaiveDateTime;
    ///
    /// let start = NaiveDateTime::parse_from_str("2026-01-15 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let mut br = BreakRecord {
    ///     start_time: start,
    ///     end_time: None,
    ///     duration: None,
    ///     is_paid: None,
    ///     break_type: None,
    /// };
    /// assert!(br.is_paid());
    ///
    /// br.is_paid = Some(false);
    /// assert!(!br.is_paid());
    /// ```
    pub fn is_paid(&self) -> bool {
        self.is_paid != Some(false)
    }

    /// Returns true if the break has no end time yet.
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Whole minutes between start and end, if the break is closed.
    pub fn span_minutes(&self) -> Option<i64> {
        self.end_time.map(|end| (end - self.start_time).num_minutes())
    }

    /// The break length in minutes, preferring the explicit `duration`.
    pub fn effective_minutes(&self) -> Option<i64> {
        self.duration.map(i64::from).or_else(|| self.span_minutes())
    }
}

/// Represents one employee-day of attendance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The clock-in time, if the employee has clocked in.
    #[serde(default)]
    pub clock_in: Option<NaiveDateTime>,
    /// The clock-out time, if the employee has clocked out.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
    /// Breaks in insertion order.
    #[serde(default)]
    pub breaks: Vec<BreakRecord>,
    /// Worked hours stored at clock-out time.
    #[serde(default)]
    pub total_hours: Option<Decimal>,
    /// External payroll reference.
    #[serde(default)]
    pub payroll_id: Option<String>,
    /// Reason given for a no-show.
    #[serde(default)]
    pub no_show_reason: Option<String>,
    /// Note left by the employee.
    #[serde(default)]
    pub employee_note: Option<String>,
    /// Note left by a manager.
    #[serde(default)]
    pub manager_note: Option<String>,
}

impl AttendanceRecord {
    /// Returns both clock events when the employee has clocked in and out.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_engine::models::AttendanceRecord;
    /// use chrono::{NaiveDate, NaiveDateTime};
    ///
    /// let record = AttendanceRecord {
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     clock_in: Some(NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     clock_out: None,
    ///     breaks: vec![],
    ///     total_hours: None,
    ///     payroll_id: None,
    ///     no_show_reason: None,
    ///     employee_note: None,
    ///     manager_note: None,
    /// };
    /// assert!(record.clock_span().is_none());
    /// ```
    pub fn clock_span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.clock_in, self.clock_out) {
            (Some(clock_in), Some(clock_out)) => Some((clock_in, clock_out)),
            _ => None,
        }
    }

    /// Returns true if the record carries a no-show reason.
    pub fn is_no_show(&self) -> bool {
        self.no_show_reason
            .as_deref()
            .is_some_and(|reason| !reason.trim().is_empty())
    }
}
