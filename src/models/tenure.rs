//! Tenure and milestone types.
//!
//! [`TenureInfo`] is derived from a hire date and never persisted.

use serde::{Deserialize, Serialize};

/// Milestone tier earned through years of continuous employment.
///
/// # Example
///
/// ```
/// use timecard_engine::models::Milestone;
///
/// assert_eq!(serde_json::to_string(&Milestone::Silver).unwrap(), "\"silver\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    /// Less than one year.
    None,
    /// One to under five years.
    Standard,
    /// Five to under ten years.
    Silver,
    /// Ten to under twenty years.
    Gold,
    /// Twenty to under twenty-five years.
    Platinum,
    /// Twenty-five years or more.
    Diamond,
}

/// Length of employment since the hire date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenureInfo {
    /// Whole calendar years.
    pub years: u32,
    /// Remaining whole calendar months.
    pub months: u32,
    /// Remaining days.
    pub days: u32,
    /// Total elapsed days since the hire date.
    pub total_days: i64,
    /// Long label, e.g. "3 years, 2 months".
    pub label: String,
    /// Short label, e.g. "3y 2m".
    pub short_label: String,
    /// Milestone tier for the completed years.
    pub milestone: Milestone,
}
