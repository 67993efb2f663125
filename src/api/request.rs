//! Request types for the Timecard Engine API.
//!
//! This module defines the JSON request structures for the `/attendance/hours`,
//! `/timecard` and `/tenure` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, Compensation};

/// Request body for the `/timecard` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimecardRequest {
    /// The employee the timecard is for.
    pub employee: EmployeeRequest,
    /// Attendance records to report, in any order.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
    /// Optional per-call policy overrides.
    #[serde(default)]
    pub policy: Option<PolicyOverrideRequest>,
}

/// Employee information in a timecard request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Hire date as an ISO-8601 date or timestamp.
    #[serde(default)]
    pub hire_date: Option<String>,
    /// Pay basis used for the wage estimate.
    #[serde(default)]
    pub compensation: Option<CompensationRequest>,
}

/// Compensation in a timecard request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompensationRequest {
    /// Annual salary.
    #[serde(default)]
    pub salary: Option<Decimal>,
    /// Hourly rate.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// ISO currency code; the configured default applies when omitted.
    #[serde(default)]
    pub currency: Option<String>,
}

impl CompensationRequest {
    /// Converts into a [`Compensation`], filling in `default_currency` when
    /// the request carries none.
    pub fn into_compensation(self, default_currency: &str) -> Compensation {
        Compensation {
            salary: self.salary,
            hourly_rate: self.hourly_rate,
            currency: self
                .currency
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| default_currency.to_string()),
        }
    }
}

/// Per-call overrides of the configured accounting policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyOverrideRequest {
    /// Paid hours per day before overtime starts.
    #[serde(default)]
    pub overtime_threshold: Option<Decimal>,
    /// Overtime rate multiplier.
    #[serde(default)]
    pub overtime_multiplier: Option<Decimal>,
}

/// Request body for the `/tenure` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TenureRequest {
    /// Hire date as an ISO-8601 date or timestamp.
    #[serde(default)]
    pub hire_date: Option<String>,
}
