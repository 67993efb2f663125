//! HTTP request handlers for the Timecard Engine API.
//!
//! This module contains the handler functions for all API endpoints. Input
//! validation happens here, before records reach the calculation functions.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{build_timecard, compute_worked_hours, inspect_record, tenure_as_of_today};
use crate::config::AccountingPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Compensation, TimecardResult};

use super::request::{TenureRequest, TimecardRequest};
use super::response::{ApiError, ApiErrorResponse, AttendanceHoursResponse, TenureResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/hours", post(attendance_hours_handler))
        .route("/timecard", post(timecard_handler))
        .route("/tenure", post(tenure_handler))
        .with_state(state)
}

/// Unwraps a JSON body or turns the rejection into an API error.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error))
}

/// Longest break duration accepted, in minutes.
const MAX_BREAK_MINUTES: u32 = 24 * 60;

/// Highest hourly rate accepted for a wage estimate.
const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Highest annual salary accepted for a wage estimate.
const MAX_ANNUAL_SALARY: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

fn invalid_record(record: &AttendanceRecord, message: impl Into<String>) -> EngineError {
    EngineError::InvalidRecord {
        employee_id: record.employee_id.clone(),
        date: record.date,
        message: message.into(),
    }
}

/// Rejects records whose timestamps run backwards or whose break durations
/// exceed a day.
fn validate_record(record: &AttendanceRecord) -> EngineResult<()> {
    if let Some((clock_in, clock_out)) = record.clock_span() {
        if clock_out < clock_in {
            return Err(invalid_record(
                record,
                format!("clock-out {} is before clock-in {}", clock_out, clock_in),
            ));
        }
    }

    for (index, b) in record.breaks.iter().enumerate() {
        if let Some(end_time) = b.end_time {
            if end_time < b.start_time {
                return Err(invalid_record(
                    record,
                    format!("break {} ends before it starts", index + 1),
                ));
            }
        }
        if let Some(duration) = b.duration.filter(|d| *d > MAX_BREAK_MINUTES) {
            return Err(invalid_record(
                record,
                format!(
                    "break {} duration {} exceeds {} minutes",
                    index + 1,
                    duration,
                    MAX_BREAK_MINUTES
                ),
            ));
        }
    }

    Ok(())
}

fn validate_compensation(compensation: &Compensation) -> EngineResult<()> {
    let fields = [
        ("compensation.salary", compensation.salary, MAX_ANNUAL_SALARY),
        ("compensation.hourly_rate", compensation.hourly_rate, MAX_HOURLY_RATE),
    ];
    for (field, value, ceiling) in fields {
        let Some(value) = value else { continue };
        let message = if value < Decimal::ZERO {
            format!("cannot be negative (got {})", value)
        } else if value > ceiling {
            format!("cannot exceed {} (got {})", ceiling, value)
        } else {
            continue;
        };
        return Err(EngineError::InvalidEmployee {
            field: field.to_string(),
            message,
        });
    }
    Ok(())
}

/// Handler for POST /attendance/hours.
///
/// Computes the total hours to persist on a record at clock-out.
async fn attendance_hours_handler(
    payload: Result<Json<AttendanceRecord>, JsonRejection>,
) -> Result<Json<AttendanceHoursResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance hours request");

    let record = parse_body(payload, correlation_id)?;

    let computed = record
        .clock_span()
        .ok_or_else(|| invalid_record(&record, "clock_in and clock_out are both required"))
        .and_then(|span| validate_record(&record).map(|_| span));
    let (clock_in, clock_out) = match computed {
        Ok(span) => span,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Attendance record rejected");
            return Err(err.into());
        }
    };

    let total_hours = compute_worked_hours(clock_in, clock_out, &record.breaks);
    let warnings = inspect_record(&record);

    info!(
        correlation_id = %correlation_id,
        employee_id = %record.employee_id,
        date = %record.date,
        total_hours = %total_hours,
        warnings = warnings.len(),
        "Attendance hours computed"
    );

    Ok(Json(AttendanceHoursResponse {
        employee_id: record.employee_id,
        date: record.date,
        total_hours,
        warnings,
    }))
}

/// Handler for POST /timecard.
///
/// Validates the records, sorts them date-ascending and returns the timecard
/// with totals, tenure and the audit trace.
async fn timecard_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimecardRequest>, JsonRejection>,
) -> Result<Json<TimecardResult>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timecard request");

    let request = parse_body(payload, correlation_id)?;
    let start_time = Instant::now();

    match perform_timecard(request, &state) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                rows = result.rows.len(),
                total_paid_hours = %result.totals.total_paid_hours,
                warnings = result.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Timecard completed successfully"
            );
            Ok(Json(result))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Timecard failed"
            );
            Err(err.into())
        }
    }
}

/// Builds the timecard for a validated request.
fn perform_timecard(request: TimecardRequest, state: &AppState) -> EngineResult<TimecardResult> {
    let config = state.config();
    let employee = request.employee;

    if employee.id.trim().is_empty() {
        return Err(EngineError::InvalidEmployee {
            field: "id".to_string(),
            message: "cannot be empty".to_string(),
        });
    }

    let compensation = employee
        .compensation
        .map(|c| c.into_compensation(config.default_currency()));
    if let Some(compensation) = &compensation {
        validate_compensation(compensation)?;
    }

    let overrides = request.policy.unwrap_or_default();
    let policy: AccountingPolicy = config
        .policy()
        .with_overrides(overrides.overtime_threshold, overrides.overtime_multiplier);
    policy.validate()?;

    let mut records = request.records;
    for record in &records {
        if record.employee_id != employee.id {
            return Err(invalid_record(
                record,
                format!("record does not belong to employee '{}'", employee.id),
            ));
        }
        validate_record(record)?;
    }
    records.sort_by_key(|r| r.date);
    debug!(
        employee_id = %employee.id,
        records = records.len(),
        overtime_threshold = %policy.overtime_threshold,
        "Records validated"
    );

    let timecard = build_timecard(&records, compensation.as_ref(), &policy);
    let currency = compensation
        .map(|c| c.currency)
        .unwrap_or_else(|| config.default_currency().to_string());

    Ok(TimecardResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        policy_version: config.metadata().version.clone(),
        employee_id: employee.id,
        currency,
        rows: timecard.rows,
        totals: timecard.totals,
        tenure: tenure_as_of_today(employee.hire_date.as_deref()),
        audit_trace: timecard.audit_trace,
    })
}

/// Handler for POST /tenure.
async fn tenure_handler(
    payload: Result<Json<TenureRequest>, JsonRejection>,
) -> Result<Json<TenureResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(payload, correlation_id)?;

    let tenure = tenure_as_of_today(request.hire_date.as_deref());
    info!(
        correlation_id = %correlation_id,
        has_tenure = tenure.is_some(),
        "Tenure calculated"
    );

    Ok(Json(TenureResponse { tenure }))
}
