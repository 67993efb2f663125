//! Two-decimal rounding shared by every hour and money figure.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to 2 decimal places, with midpoints rounded away from zero.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::round_2dp;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_2dp(Decimal::from_str("7.005").unwrap()), Decimal::from_str("7.01").unwrap());
/// assert_eq!(round_2dp(Decimal::from_str("-0.125").unwrap()), Decimal::from_str("-0.13").unwrap());
/// ```
pub fn round_2dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
