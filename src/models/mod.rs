//! Core data models for the Timecard Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod compensation;
mod summary;
mod tenure;

pub use attendance::{AttendanceRecord, BreakRecord};
pub use compensation::Compensation;
pub use summary::{
    AuditStep, AuditTrace, AuditWarning, BreakLine, DailySummary, PaidHoursSplit, Timecard,
    TimecardResult, TimecardTotals,
};
pub use tenure::{Milestone, TenureInfo};
