//! Estimated wages.
//!
//! Advisory figures for attendance reports. This is not payroll of record.

use rust_decimal::Decimal;

use super::rounding::round_2dp;

/// Estimates wages for regular and overtime hours.
///
/// Returns zero when `hourly_rate` is absent or zero. Otherwise returns
/// `regular * rate + overtime * rate * multiplier`, rounded to 2 decimal places.
/// A product too large for `Decimal` also yields zero.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::estimate_wages;
/// use timecard_engine::config::DEFAULT_OVERTIME_MULTIPLIER;
/// use rust_decimal::Decimal;
///
/// let wages = estimate_wages(
///     Decimal::new(8, 0),
///     Decimal::new(2, 0),
///     Some(Decimal::new(15, 0)),
///     DEFAULT_OVERTIME_MULTIPLIER,
/// );
/// assert_eq!(wages, Decimal::new(165, 0));
///
/// assert_eq!(
///     estimate_wages(Decimal::new(8, 0), Decimal::ZERO, None, DEFAULT_OVERTIME_MULTIPLIER),
///     Decimal::ZERO
/// );
/// ```
pub fn estimate_wages(
    regular_hours: Decimal,
    overtime_hours: Decimal,
    hourly_rate: Option<Decimal>,
    overtime_multiplier: Decimal,
) -> Decimal {
    match hourly_rate {
        Some(rate) if !rate.is_zero() => {
            let regular = regular_hours.checked_mul(rate);
            let overtime = overtime_hours
                .checked_mul(rate)
                .and_then(|pay| pay.checked_mul(overtime_multiplier));
            regular
                .zip(overtime)
                .and_then(|(regular, overtime)| regular.checked_add(overtime))
                .map(round_2dp)
                .unwrap_or(Decimal::ZERO)
        }
        _ => Decimal::ZERO,
    }
}
