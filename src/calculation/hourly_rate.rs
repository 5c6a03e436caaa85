//! Hourly rate derivation.
//!
//! The hourly rate is the only rounded figure in a payroll computation: it is
//! rounded to cents because overtime pay and the late deduction are built on
//! top of it.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Number of paid hours in a standard working day.
pub const STANDARD_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Decimal places kept on a derived hourly rate.
pub const HOURLY_RATE_DECIMALS: u32 = 2;

/// Derives an hourly rate from a daily rate.
///
/// Computes `daily_rate / hours_per_day` and rounds the result to two decimal
/// places, with midpoints rounded away from zero.
///
/// # Errors
///
/// `InvalidInput` on `hours_per_day` when the day length is not positive, and
/// `ArithmeticOverflow` when the quotient does not fit in a decimal.
///
/// # Examples
///
/// ```
/// use site_payroll_engine::calculation::{derive_hourly_rate, STANDARD_HOURS_PER_DAY};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = derive_hourly_rate(Decimal::from(800), STANDARD_HOURS_PER_DAY).unwrap();
/// assert_eq!(rate, Decimal::from(100));
///
/// // 610 / 8 = 76.25 exactly
/// let rate = derive_hourly_rate(Decimal::from(610), STANDARD_HOURS_PER_DAY).unwrap();
/// assert_eq!(rate, Decimal::from_str("76.25").unwrap());
///
/// assert!(derive_hourly_rate(Decimal::from(800), Decimal::ZERO).is_err());
/// ```
pub fn derive_hourly_rate(daily_rate: Decimal, hours_per_day: Decimal) -> EngineResult<Decimal> {
    if hours_per_day <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "hours_per_day",
            hours_per_day.to_string(),
        ));
    }
    daily_rate
        .checked_div(hours_per_day)
        .map(round_to_cents)
        .ok_or_else(|| EngineError::overflow("hourly_rate"))
}

/// Hourly rate over a standard eight-hour day. Dividing by eight cannot fail.
pub(crate) fn standard_hourly_rate(daily_rate: Decimal) -> Decimal {
    round_to_cents(daily_rate / STANDARD_HOURS_PER_DAY)
}

fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(HOURLY_RATE_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}
