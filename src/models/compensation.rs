//! Compensation model.
//!
//! This module defines the [`Compensation`] struct describing an employee's
//! pay basis, used only to estimate wages for reporting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "USD".to_string()
}

/// An employee's pay basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compensation {
    /// Annual salary, if the employee is salaried.
    #[serde(default)]
    pub salary: Option<Decimal>,
    /// Hourly rate, if the employee is paid by the hour.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// ISO currency code for both amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Compensation {
    /// Returns the hourly rate used for wage estimates.
    ///
    /// A non-zero `hourly_rate` wins. Otherwise a non-zero `salary` is spread
    /// over `standard_annual_hours`. Returns `None` when neither yields a rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_engine::models::Compensation;
    /// use rust_decimal::Decimal;
    ///
    /// let salaried = Compensation {
    ///     salary: Some(Decimal::new(41600, 0)),
    ///     hourly_rate: None,
    ///     currency: "USD".to_string(),
    /// };
    /// assert_eq!(
    ///     salaried.effective_hourly_rate(Decimal::new(2080, 0)),
    ///     Some(Decimal::new(20, 0))
    /// );
    /// ```
    pub fn effective_hourly_rate(&self, standard_annual_hours: Decimal) -> Option<Decimal> {
        if let Some(rate) = self.hourly_rate.filter(|r| !r.is_zero()) {
            return Some(rate);
        }

        match self.salary.filter(|s| !s.is_zero()) {
            Some(salary) => salary.checked_div(standard_annual_hours),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_hourly_rate_wins_over_salary() {
        let compensation = Compensation {
            salary: Some(dec("100000")),
            hourly_rate: Some(dec("25.50")),
            currency: "USD".to_string(),
        };
        assert_eq!(
            compensation.effective_hourly_rate(dec("2080")),
            Some(dec("25.50"))
        );
    }

    #[test]
    fn test_zero_hourly_rate_falls_back_to_salary() {
        let compensation = Compensation {
            salary: Some(dec("52000")),
            hourly_rate: Some(Decimal::ZERO),
            currency: "USD".to_string(),
        };
        assert_eq!(compensation.effective_hourly_rate(dec("2080")), Some(dec("25")));
    }

    #[test]
    fn test_no_rate_derivable() {
        let compensation = Compensation {
            salary: Some(Decimal::ZERO),
            hourly_rate: None,
            currency: "USD".to_string(),
        };
        assert_eq!(compensation.effective_hourly_rate(dec("2080")), None);
    }

    #[test]
    fn test_zero_annual_hours_yields_no_rate() {
        let compensation = Compensation {
            salary: Some(dec("52000")),
            hourly_rate: None,
            currency: "USD".to_string(),
        };
        assert_eq!(compensation.effective_hourly_rate(Decimal::ZERO), None);
    }

    #[test]
    fn test_overflowing_salary_yields_no_rate() {
        let compensation = Compensation {
            salary: Some(Decimal::MAX),
            hourly_rate: None,
            currency: "USD".to_string(),
        };
        assert_eq!(compensation.effective_hourly_rate(dec("0.0001")), None);
    }

    #[test]
    fn test_deserialize_defaults_currency() {
        let json = r#"{ "hourly_rate": "20.00" }"#;
        let compensation: Compensation = serde_json::from_str(json).unwrap();
        assert_eq!(compensation.hourly_rate, Some(dec("20.00")));
        assert_eq!(compensation.salary, None);
        assert_eq!(compensation.currency, "USD");
    }
}
