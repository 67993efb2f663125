//! Error types for the Timecard Engine.
//!
//! The calculation functions themselves never fail: they degrade to neutral
//! values (`None`, zero, `"N/A"`). The errors here belong to the layers around
//! them, namely configuration loading and input validation at the API boundary.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Timecard Engine.
///
/// # Example
///
/// ```
/// use timecard_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An accounting policy value is out of range.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An attendance record was rejected before reaching the engine.
    #[error("Invalid attendance record for '{employee_id}' on {date}: {message}")]
    InvalidRecord {
        /// The employee the record belongs to.
        employee_id: String,
        /// The calendar date of the record.
        date: NaiveDate,
        /// A description of what made the record invalid.
        message: String,
    },

    /// An employee field was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_policy_displays_field_and_message() {
        let error = EngineError::InvalidPolicy {
            field: "overtime_multiplier".to_string(),
            message: "must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid policy field 'overtime_multiplier': must be at least 1"
        );
    }

    #[test]
    fn test_invalid_record_displays_employee_date_and_message() {
        let error = EngineError::InvalidRecord {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            message: "clock_out is before clock_in".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid attendance record for 'emp_001' on 2026-01-15: clock_out is before clock_in"
        );
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = EngineError::InvalidEmployee {
            field: "compensation.hourly_rate".to_string(),
            message: "cannot be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'compensation.hourly_rate': cannot be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_policy() -> EngineResult<()> {
            Err(EngineError::InvalidPolicy {
                field: "overtime_threshold".to_string(),
                message: "cannot be negative".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_policy()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
