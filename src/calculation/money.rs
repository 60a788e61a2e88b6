//! Monetary rounding helpers.
//!
//! Every payment concept is rounded to cents on its own. Amounts derived from
//! another concept (the vacation premium) use the already-rounded value.
//!
//! Products and sums go through the `checked_*` helpers: an amount outside the
//! `Decimal` range is a [`EngineError::CalculationError`], never a panic.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

fn out_of_range(concept: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("{} exceeds the supported amount range", concept),
    }
}

/// Multiplies `lhs × rhs`, failing when the product overflows.
pub fn checked_product(concept: &str, lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs).ok_or_else(|| out_of_range(concept))
}

/// Sums amounts, failing when the total overflows.
pub fn checked_sum<I>(concept: &str, amounts: I) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, |total, amount| {
        total.checked_add(amount).ok_or_else(|| out_of_range(concept))
    })
}

/// Applies a percentage to a cent amount and rounds the result in binary
/// floating point: `round((amount × percentage / 100 + ε) × 100) / 100`.
///
/// This keeps parity with calculators that work in `f64`. A product sitting
/// on an exact half cent in decimal is usually just below it in `f64`, so it
/// rounds down where [`round_money`] would round up.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::{float_percentage, round_money};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let vacation = Decimal::from_str("4179.94").unwrap();
/// let premium = float_percentage("Prima Vacacional", vacation, Decimal::from(25)).unwrap();
/// assert_eq!(premium, Decimal::from_str("1044.98").unwrap());
/// assert_eq!(round_money(vacation / Decimal::from(4)), Decimal::from_str("1044.99").unwrap());
/// ```
pub fn float_percentage(
    concept: &str,
    amount: Decimal,
    percentage: Decimal,
) -> EngineResult<Decimal> {
    let (Some(amount), Some(percentage)) = (amount.to_f64(), percentage.to_f64()) else {
        return Err(out_of_range(concept));
    };

    let rounded = ((amount * (percentage / 100.0) + f64::EPSILON) * 100.0).round() / 100.0;

    Decimal::from_f64(rounded)
        .map(round_money)
        .ok_or_else(|| out_of_range(concept))
}

/// Rounds a monetary value to cents, half away from zero.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("2.465").unwrap()), Decimal::from_str("2.47").unwrap());
/// assert_eq!(round_money(Decimal::from_str("12.328767").unwrap()), Decimal::from_str("12.33").unwrap());
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a value the way it appears inside concept descriptions:
/// rounded to cents with trailing zeros dropped (`300`, `7.5`, `48.03`).
pub fn display_amount(value: Decimal) -> String {
    round_money(value).normalize().to_string()
}

/// Formats a value with exactly two decimals (`31500.00`), as in exports.
pub fn fixed_2(value: Decimal) -> String {
    let mut rounded = round_money(value);
    rounded.rescale(2);
    rounded.to_string()
}
