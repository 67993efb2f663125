//! Paid-hours split.
//!
//! This module turns worked hours and unpaid break hours into total paid
//! hours and splits them into regular and overtime portions around the
//! daily overtime threshold.

use rust_decimal::Decimal;

use crate::models::PaidHoursSplit;

/// Splits paid hours into regular and overtime portions.
///
/// - `total_paid_hours = max(0, worked_hours - unpaid_break_hours)`
/// - `regular_hours = min(total_paid_hours, threshold)`
/// - `overtime_hours = max(0, total_paid_hours - threshold)`
///
/// # Examples
///
/// ## Under the threshold
///
/// ```
/// use timecard_engine::calculation::split_paid_hours;
/// use timecard_engine::config::DEFAULT_OVERTIME_THRESHOLD;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = split_paid_hours(
///     Decimal::from_str("8.00").unwrap(),
///     Decimal::from_str("0.50").unwrap(),
///     DEFAULT_OVERTIME_THRESHOLD,
/// );
/// assert_eq!(split.total_paid_hours, Decimal::from_str("7.50").unwrap());
/// assert_eq!(split.regular_hours, Decimal::from_str("7.50").unwrap());
/// assert_eq!(split.overtime_hours, Decimal::ZERO);
/// ```
///
/// ## Over the threshold
///
/// ```
/// use timecard_engine::calculation::split_paid_hours;
/// use timecard_engine::config::DEFAULT_OVERTIME_THRESHOLD;
/// use rust_decimal::Decimal;
///
/// let split = split_paid_hours(Decimal::new(10, 0), Decimal::ZERO, DEFAULT_OVERTIME_THRESHOLD);
/// assert_eq!(split.regular_hours, Decimal::new(8, 0));
/// assert_eq!(split.overtime_hours, Decimal::new(2, 0));
/// ```
pub fn split_paid_hours(
    worked_hours: Decimal,
    unpaid_break_hours: Decimal,
    threshold: Decimal,
) -> PaidHoursSplit {
    let total_paid_hours = worked_hours.saturating_sub(unpaid_break_hours).max(Decimal::ZERO);
    let regular_hours = total_paid_hours.min(threshold);
    let overtime_hours = total_paid_hours.saturating_sub(threshold).max(Decimal::ZERO);

    PaidHoursSplit {
        total_paid_hours,
        regular_hours,
        overtime_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_OVERTIME_THRESHOLD;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_exactly_at_threshold() {
        let split = split_paid_hours(dec("8"), Decimal::ZERO, dec("8"));
        assert_eq!(split.regular_hours, dec("8"));
        assert_eq!(split.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_ten_hours_two_overtime() {
        let split = split_paid_hours(dec("10"), Decimal::ZERO, DEFAULT_OVERTIME_THRESHOLD);
        assert_eq!(split.total_paid_hours, dec("10"));
        assert_eq!(split.regular_hours, dec("8"));
        assert_eq!(split.overtime_hours, dec("2"));
    }

    #[test]
    fn test_unpaid_breaks_reduce_overtime() {
        let split = split_paid_hours(dec("9"), dec("0.75"), DEFAULT_OVERTIME_THRESHOLD);
        assert_eq!(split.total_paid_hours, dec("8.25"));
        assert_eq!(split.regular_hours, dec("8"));
        assert_eq!(split.overtime_hours, dec("0.25"));
    }

    #[test]
    fn test_paid_hours_floored_at_zero() {
        let split = split_paid_hours(dec("0.25"), dec("0.50"), DEFAULT_OVERTIME_THRESHOLD);
        assert_eq!(split.total_paid_hours, Decimal::ZERO);
        assert_eq!(split.regular_hours, Decimal::ZERO);
        assert_eq!(split.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_negative_worked_hours_floored_at_zero() {
        let split = split_paid_hours(dec("-8"), Decimal::ZERO, DEFAULT_OVERTIME_THRESHOLD);
        assert_eq!(split.total_paid_hours, Decimal::ZERO);
    }

    #[test]
    fn test_custom_threshold() {
        let split = split_paid_hours(dec("8.5"), Decimal::ZERO, dec("7.5"));
        assert_eq!(split.regular_hours, dec("7.5"));
        assert_eq!(split.overtime_hours, dec("1.0"));
    }

    #[test]
    fn test_zero_threshold_makes_everything_overtime() {
        let split = split_paid_hours(dec("6"), Decimal::ZERO, Decimal::ZERO);
        assert_eq!(split.regular_hours, Decimal::ZERO);
        assert_eq!(split.overtime_hours, dec("6"));
    }

    proptest! {
        #[test]
        fn prop_regular_plus_overtime_equals_paid(
            worked_cents in 0i64..2_400,
            unpaid_cents in 0i64..400,
            threshold_cents in 0i64..1_600,
        ) {
            let split = split_paid_hours(
                Decimal::new(worked_cents, 2),
                Decimal::new(unpaid_cents, 2),
                Decimal::new(threshold_cents, 2),
            );

            prop_assert_eq!(split.regular_hours + split.overtime_hours, split.total_paid_hours);
            prop_assert!(split.regular_hours >= Decimal::ZERO);
            prop_assert!(split.overtime_hours >= Decimal::ZERO);
        }
    }
}
