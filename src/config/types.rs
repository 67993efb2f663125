//! Configuration types for time accounting.
//!
//! This module contains the strongly-typed structures deserialized from
//! `policy.yaml` and the runtime [`AccountingPolicy`] passed into every
//! calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata identifying an accounting policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// Short code for the policy (e.g., "default").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

/// Overtime settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeConfig {
    /// Paid hours per day before overtime starts.
    pub daily_threshold_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub multiplier: Decimal,
}

/// Wage estimate settings.
#[derive(Debug, Clone, Deserialize)]
pub struct WageConfig {
    /// Hours per year used to derive an hourly rate from a salary.
    pub standard_annual_hours: Decimal,
    /// Currency reported when the compensation does not name one.
    pub default_currency: String,
}

/// Structure of `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Policy metadata.
    pub policy: PolicyMetadata,
    /// Overtime settings.
    pub overtime: OvertimeConfig,
    /// Wage estimate settings.
    pub wages: WageConfig,
}

/// The global accounting policy applied to a calculation.
///
/// Passed explicitly into each call so that calculations stay reentrant.
///
/// # Example
///
/// ```
/// use timecard_engine::config::AccountingPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = AccountingPolicy::default();
/// assert_eq!(policy.overtime_threshold, Decimal::new(8, 0));
/// assert_eq!(policy.overtime_multiplier, Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountingPolicy {
    /// Paid hours per day before overtime starts.
    pub overtime_threshold: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Hours per year used to derive an hourly rate from a salary.
    pub standard_annual_hours: Decimal,
}

/// Default daily overtime threshold in hours.
pub const DEFAULT_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Default overtime multiplier (time and a half).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Default working hours per year (52 weeks of 40 hours).
pub const DEFAULT_STANDARD_ANNUAL_HOURS: Decimal = Decimal::from_parts(2080, 0, 0, false, 0);

impl Default for AccountingPolicy {
    fn default() -> Self {
        Self {
            overtime_threshold: DEFAULT_OVERTIME_THRESHOLD,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
            standard_annual_hours: DEFAULT_STANDARD_ANNUAL_HOURS,
        }
    }
}

impl AccountingPolicy {
    /// Returns a copy with the given per-call overrides applied.
    pub fn with_overrides(
        &self,
        overtime_threshold: Option<Decimal>,
        overtime_multiplier: Option<Decimal>,
    ) -> Self {
        Self {
            overtime_threshold: overtime_threshold.unwrap_or(self.overtime_threshold),
            overtime_multiplier: overtime_multiplier.unwrap_or(self.overtime_multiplier),
            standard_annual_hours: self.standard_annual_hours,
        }
    }

    /// Checks that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if self.overtime_threshold < Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                field: "overtime_threshold".to_string(),
                message: format!("cannot be negative (got {})", self.overtime_threshold),
            });
        }
        if self.overtime_multiplier < Decimal::ONE {
            return Err(EngineError::InvalidPolicy {
                field: "overtime_multiplier".to_string(),
                message: format!("must be at least 1 (got {})", self.overtime_multiplier),
            });
        }
        if self.standard_annual_hours <= Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                field: "standard_annual_hours".to_string(),
                message: format!("must be positive (got {})", self.standard_annual_hours),
            });
        }
        Ok(())
    }
}

impl From<&PolicyFile> for AccountingPolicy {
    fn from(file: &PolicyFile) -> Self {
        Self {
            overtime_threshold: file.overtime.daily_threshold_hours,
            overtime_multiplier: file.overtime.multiplier,
            standard_annual_hours: file.wages.standard_annual_hours,
        }
    }
}
