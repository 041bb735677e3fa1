//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for purchase conversion:
//! - Round half up (away from zero), never banker's rounding
//! - Amounts always carry 2 decimal places
//! - Reported rates always carry 6 decimal places, whatever the source precision

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;

use super::exchange::ExchangeRate;
use super::registry::{CurrencyRegistry, USD};

/// Decimal places of stored and converted amounts.
pub const AMOUNT_SCALE: u32 = 2;

/// Decimal places of reported exchange rates.
pub const RATE_SCALE: u32 = 6;

/// Rate applied to a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateBasis {
    /// USD to USD; no rate is needed.
    UsdIdentity,
    /// Rate resolved from the rate source.
    Quoted(ExchangeRate),
}

/// Conversion errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A non-USD target was requested without a resolved rate.
    #[error("no exchange rate supplied for {0}")]
    MissingRate(String),

    /// The converted amount does not fit in a `Decimal`.
    #[error("converting {amount} at rate {rate} overflows")]
    Overflow {
        /// USD amount being converted.
        amount: Decimal,
        /// Rate that was applied.
        rate: Decimal,
    },
}

/// Outcome of converting a USD amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    /// Original amount in USD.
    pub amount_usd: Decimal,
    /// ISO code of the target currency.
    pub target_currency: String,
    /// Rate applied, at 6 decimal places.
    pub exchange_rate: Decimal,
    /// Effective date of the rate, absent for USD.
    pub rate_date: Option<NaiveDate>,
    /// Converted amount, at 2 decimal places.
    pub converted_amount: Decimal,
}

/// Rounds an amount to 2 decimal places, half up.
#[must_use]
pub fn round_amount(value: Decimal) -> Decimal {
    round_half_up(value, AMOUNT_SCALE)
}

/// Rounds a rate to 6 decimal places, half up, padding shorter rates.
#[must_use]
pub fn round_rate(value: Decimal) -> Decimal {
    round_half_up(value, RATE_SCALE)
}

fn round_half_up(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    rounded
}

/// Returns true when converting into `target` needs no rate.
#[must_use]
pub fn is_identity_target(target: Option<&str>) -> bool {
    target.is_none_or(|code| code.trim().is_empty() || CurrencyRegistry::is_usd(code.trim()))
}

/// Applies resolved exchange rates to USD amounts.
pub struct ConversionCalculator;

impl ConversionCalculator {
    /// Converts `amount_usd` into `target_currency`.
    ///
    /// A missing, blank or USD target is the identity conversion and
    /// ignores `basis`. Any other target needs a quoted rate.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rust_decimal_macros::dec;
    /// use purchasefx_core::currency::{ConversionCalculator, ExchangeRate, RateBasis};
    ///
    /// let rate = ExchangeRate::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), dec!(1.234567));
    /// let basis = RateBasis::Quoted(rate);
    /// let result = ConversionCalculator::convert(dec!(10.00), Some("CAD"), basis).unwrap();
    /// assert_eq!(result.converted_amount, dec!(12.35));
    /// ```
    pub fn convert(
        amount_usd: Decimal,
        target_currency: Option<&str>,
        basis: RateBasis,
    ) -> Result<ConversionResult, ConversionError> {
        if is_identity_target(target_currency) {
            return Ok(Self::identity(amount_usd));
        }

        let target = target_currency
            .map(|code| code.trim().to_ascii_uppercase())
            .unwrap_or_default();

        match basis {
            RateBasis::UsdIdentity => Err(ConversionError::MissingRate(target)),
            RateBasis::Quoted(rate) => {
                let Some(converted) = amount_usd.checked_mul(rate.rate) else {
                    return Err(ConversionError::Overflow {
                        amount: amount_usd,
                        rate: rate.rate,
                    });
                };

                Ok(ConversionResult {
                    amount_usd,
                    target_currency: target,
                    exchange_rate: round_rate(rate.rate),
                    rate_date: Some(rate.rate_date),
                    converted_amount: round_amount(converted),
                })
            }
        }
    }

    /// USD to USD conversion.
    #[must_use]
    pub fn identity(amount_usd: Decimal) -> ConversionResult {
        ConversionResult {
            amount_usd,
            target_currency: USD.to_string(),
            exchange_rate: round_rate(Decimal::ONE),
            rate_date: None,
            converted_amount: round_amount(amount_usd),
        }
    }
}
