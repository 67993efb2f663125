//! Response types for the Timecard Engine API.
//!
//! This module defines the success bodies that are not domain models, the
//! error response structures, and the mapping from [`EngineError`] to HTTP
//! status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{AuditWarning, TenureInfo};

/// Response body for `/attendance/hours`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceHoursResponse {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// Worked hours to persist on the record.
    pub total_hours: Decimal,
    /// Anomalies found in the record.
    pub warnings: Vec<AuditWarning>,
}

/// Response body for `/tenure`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenureResponse {
    /// Tenure as of today, `null` without a valid past hire date.
    pub tenure: Option<TenureInfo>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPolicy { field, message } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_POLICY",
                    format!("Invalid policy field '{}': {}", field, message),
                    "The policy overrides contain an out-of-range value",
                ))
            }
            EngineError::InvalidRecord {
                employee_id,
                date,
                message,
            } => ApiErrorResponse::bad_request(ApiError::with_details(
                "INVALID_RECORD",
                format!(
                    "Invalid attendance record for '{}' on {}: {}",
                    employee_id, date, message
                ),
                "The attendance data contains invalid information",
            )),
            EngineError::InvalidEmployee { field, message } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    format!("Invalid employee field '{}': {}", field, message),
                    "The employee data contains invalid information",
                ))
            }
        }
    }
}
