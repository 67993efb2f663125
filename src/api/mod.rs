//! HTTP API module for the Timecard Engine.
//!
//! This module provides the REST endpoints for computing stored hours at
//! clock-out, exporting timecards and looking up tenure.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CompensationRequest, EmployeeRequest, PolicyOverrideRequest, TenureRequest, TimecardRequest,
};
pub use response::{ApiError, ApiErrorResponse, AttendanceHoursResponse, TenureResponse};
pub use state::AppState;
