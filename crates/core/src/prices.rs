//! Prices
//!
//! Catalog and cart prices travel as display strings with a fixed `¥` prefix
//! (`"¥299"`, `"¥50.50"`). Arithmetic is done on [`Money`] in CNY minor units.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money, MoneyError,
    iso::{CNY, Currency},
};
use thiserror::Error;

/// Currency symbol prefixed to every display price.
pub const CURRENCY_SYMBOL: char = '¥';

/// Errors that can occur while parsing or summing display prices.
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// The numeric portion of the price could not be parsed.
    #[error("invalid price: {0:?}")]
    InvalidAmount(String),

    /// Prices can't be negative.
    #[error("negative price: {0:?}")]
    Negative(String),

    /// Wrapped money arithmetic error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Parse a display price (e.g. `"¥50.50"`) into CNY.
///
/// The currency symbol is optional so that bare amounts written by older
/// clients still parse.
///
/// # Errors
///
/// - [`PriceError::InvalidAmount`]: the amount is not a decimal number.
/// - [`PriceError::Negative`]: the amount is below zero.
pub fn parse_price(s: &str) -> Result<Money<'static, Currency>, PriceError> {
    let trimmed = s.trim();
    let amount = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed);

    let value = amount
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| PriceError::InvalidAmount(s.to_string()))?;

    if value.is_sign_negative() {
        return Err(PriceError::Negative(s.to_string()));
    }

    let minor_units = value
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor| minor.round_dp(0).to_i64())
        .ok_or_else(|| PriceError::InvalidAmount(s.to_string()))?;

    Ok(Money::from_minor(minor_units, CNY))
}

/// Format an amount as a display price.
///
/// Whole amounts drop the fractional part (`¥299`), anything else keeps two
/// decimal places (`¥50.50`).
pub fn format_price(money: &Money<'_, Currency>) -> String {
    format_minor(money.to_minor_units())
}

/// Format CNY minor units as a display price.
pub fn format_minor(minor_units: i64) -> String {
    let abs_minor = minor_units.unsigned_abs();
    let major_units = abs_minor / 100;
    let fractional = abs_minor % 100;
    let sign = if minor_units < 0 { "-" } else { "" };

    if fractional == 0 {
        format!("{sign}{CURRENCY_SYMBOL}{major_units}")
    } else {
        format!("{sign}{CURRENCY_SYMBOL}{major_units}.{fractional:02}")
    }
}

/// Format a yuan amount (`150.5` -> `¥150.50`) the same way as
/// [`format_price`].
pub fn format_amount(amount: Decimal) -> String {
    format_price(&Money::from_decimal(amount, CNY))
}

/// Sum a sequence of display prices.
///
/// An empty sequence sums to `¥0`.
///
/// # Errors
///
/// Returns the first [`PriceError`] raised while parsing a price, or a
/// wrapped [`MoneyError`] if the arithmetic fails.
pub fn sum_prices<'p>(
    prices: impl IntoIterator<Item = &'p str>,
) -> Result<Money<'static, Currency>, PriceError> {
    prices
        .into_iter()
        .try_fold(Money::from_minor(0, CNY), |acc, price| {
            Ok(acc.add(parse_price(price)?)?)
        })
}

/// Returns the major-unit decimal amount of a CNY value (`¥50.50` -> `50.50`).
pub fn to_decimal(money: &Money<'_, Currency>) -> Decimal {
    *money.amount()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_whole_amount() -> TestResult {
        assert_eq!(parse_price("¥299")?, Money::from_minor(299_00, CNY));

        Ok(())
    }

    #[test]
    fn parses_fractional_amount() -> TestResult {
        assert_eq!(parse_price("¥50.50")?, Money::from_minor(50_50, CNY));

        Ok(())
    }

    #[test]
    fn symbol_is_optional() -> TestResult {
        assert_eq!(parse_price(" 100 ")?, Money::from_minor(100_00, CNY));

        Ok(())
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_price("¥free"),
            Err(PriceError::InvalidAmount(input)) if input == "¥free"
        ));
    }

    #[test]
    fn rejects_negative() {
        assert!(matches!(parse_price("¥-1"), Err(PriceError::Negative(_))));
    }

    #[test]
    fn formats_whole_and_fractional() {
        assert_eq!(format_price(&Money::from_minor(299_00, CNY)), "¥299");
        assert_eq!(format_price(&Money::from_minor(150_50, CNY)), "¥150.50");
        assert_eq!(format_price(&Money::from_minor(5, CNY)), "¥0.05");
        assert_eq!(format_minor(-12_50), "-¥12.50");
        assert_eq!(format_amount(Decimal::new(1_505, 1)), "¥150.50");
        assert_eq!(format_amount(Decimal::new(498, 0)), "¥498");
    }

    #[test]
    fn sums_prices() -> TestResult {
        let total = sum_prices(["¥100", "¥50.50"])?;

        assert_eq!(total, Money::from_minor(150_50, CNY));
        assert_eq!(to_decimal(&total), Decimal::new(150_50, 2));

        Ok(())
    }

    #[test]
    fn empty_sum_is_zero() -> TestResult {
        assert_eq!(sum_prices([])?, Money::from_minor(0, CNY));

        Ok(())
    }
}
