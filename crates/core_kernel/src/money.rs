//! Monetary helpers with precise decimal arithmetic
//!
//! Claim amounts are pounds sterling carried as `rust_decimal::Decimal` so
//! that instalment rounding and claim totals never accumulate floating-point
//! error. The draft and claim stores exchange raw decimal numbers, so this
//! module provides helpers over `Decimal` rather than a wrapped money type.

use rust_decimal::Decimal;
use thiserror::Error;

/// Pence precision for user-facing amounts
pub const PENCE_DECIMAL_PLACES: u32 = 2;

/// Errors that can occur when handling monetary input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount must not be negative: {0}")]
    NegativeAmount(Decimal),
}

/// Rounds an amount to whole pence, half-up
///
/// Instalment amounts computed by the court calculator can carry more than
/// two decimal places; everything persisted or displayed is rounded here.
pub fn round_pence(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        PENCE_DECIMAL_PLACES,
        rust_decimal::RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Parses a user-supplied amount field into a non-negative decimal
pub fn parse_amount(input: &str) -> Result<Decimal, MoneyError> {
    let trimmed = input.trim().trim_start_matches('£').replace(',', "");
    let amount: Decimal = trimmed
        .parse()
        .map_err(|_| MoneyError::InvalidAmount(input.to_string()))?;
    if amount.is_sign_negative() {
        return Err(MoneyError::NegativeAmount(amount));
    }
    Ok(amount)
}

/// Formats an amount as pounds and pence for page models
pub fn format_pounds(amount: Decimal) -> String {
    format!("£{:.2}", round_pence(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_pence_half_up() {
        assert_eq!(round_pence(dec!(123.456)), dec!(123.46));
        assert_eq!(round_pence(dec!(123.454)), dec!(123.45));
        assert_eq!(round_pence(dec!(100)), dec!(100.00));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("50"), Ok(dec!(50)));
        assert_eq!(parse_amount("£1,250.75"), Ok(dec!(1250.75)));
        assert_eq!(parse_amount(" 10.5 "), Ok(dec!(10.5)));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(
            parse_amount("fifty"),
            Err(MoneyError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_amount_rejects_negative() {
        assert!(matches!(
            parse_amount("-1"),
            Err(MoneyError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_format_pounds() {
        assert_eq!(format_pounds(dec!(100)), "£100.00");
        assert_eq!(format_pounds(dec!(0.5)), "£0.50");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_pence_is_idempotent(minor in -1_000_000_000i64..1_000_000_000i64) {
            let amount = Decimal::new(minor, 3);
            let once = round_pence(amount);
            prop_assert_eq!(once, round_pence(once));
            prop_assert!(once.scale() <= PENCE_DECIMAL_PLACES);
        }
    }
}
