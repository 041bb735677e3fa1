//! Purchase service: records purchases and converts them on read.

use chrono::NaiveDate;
use purchasefx_shared::types::PurchaseId;
use rust_decimal::Decimal;
use tracing::{error, info, warn};

use crate::currency::conversion::{is_identity_target, round_amount};
use crate::currency::{
    ConversionCalculator, ConversionResult, CurrencyRegistry, RateBasis, RateResolver, RateSource,
};

use super::error::PurchaseError;
use super::store::PurchaseStore;
use super::types::{ConvertedPurchase, NewPurchase, Purchase};

/// Records purchases and converts them into requested currencies.
pub struct PurchaseService<P, S> {
    store: P,
    resolver: RateResolver<S>,
}

impl<P: PurchaseStore, S: RateSource> PurchaseService<P, S> {
    /// Creates a new purchase service.
    #[must_use]
    pub const fn new(store: P, resolver: RateResolver<S>) -> Self {
        Self { store, resolver }
    }

    /// Records a purchase, rounding its amount half up to cents.
    pub async fn create_purchase(&self, input: NewPurchase) -> Result<Purchase, PurchaseError> {
        info!(
            description = %input.description,
            transaction_date = %input.transaction_date,
            "Creating purchase"
        );

        let rounded = NewPurchase {
            amount_usd: round_amount(input.amount_usd),
            ..input
        };
        let purchase = self.store.insert(rounded).await?;

        info!(id = %purchase.id, "Purchase saved");
        Ok(purchase)
    }

    /// Fetches a purchase converted into `currency`, using the rate
    /// effective on its transaction date.
    pub async fn converted_purchase(
        &self,
        id: PurchaseId,
        currency: Option<&str>,
    ) -> Result<ConvertedPurchase, PurchaseError> {
        info!(%id, currency = ?currency, "Fetching purchase for conversion");

        let purchase = self.store.find(id).await?.ok_or_else(|| {
            warn!(%id, "Purchase not found");
            PurchaseError::NotFound(id)
        })?;

        let conversion = convert_usd_amount(
            &self.resolver,
            purchase.amount_usd,
            purchase.transaction_date,
            currency,
        )
        .await?;

        Ok(ConvertedPurchase::new(purchase, conversion))
    }
}

/// Converts a USD amount recorded on `date` into `currency`.
///
/// A missing or USD currency is the identity conversion and never queries
/// the rate source. `currency` may be an ISO code or a registry
/// description; either is reported under its ISO code. Unknown codes reach
/// the rate source uppercased, unknown descriptions verbatim.
pub async fn convert_usd_amount<S: RateSource>(
    resolver: &RateResolver<S>,
    amount_usd: Decimal,
    date: NaiveDate,
    currency: Option<&str>,
) -> Result<ConversionResult, PurchaseError> {
    if is_identity_target(currency) {
        info!("Target is USD, returning amount without conversion");
        return Ok(ConversionCalculator::identity(amount_usd));
    }

    let requested = currency.unwrap_or_default().trim();
    let (code, identifier) = match CurrencyRegistry::descriptor_for_code(requested)
        .or_else(|| CurrencyRegistry::descriptor_for_description(requested))
    {
        Some(descriptor) => (
            descriptor.iso_code.to_string(),
            descriptor.description.to_string(),
        ),
        None if is_code_shaped(requested) => {
            let code = requested.to_ascii_uppercase();
            (code.clone(), code)
        }
        None => (requested.to_string(), requested.to_string()),
    };

    info!(%identifier, %date, "Looking up exchange rate");

    let Some(rate) = resolver.resolve(date, &identifier).await? else {
        error!(currency = %code, %date, "No exchange rate available within window");
        return Err(PurchaseError::RateNotFound {
            currency: code,
            date,
        });
    };

    let conversion =
        ConversionCalculator::convert(amount_usd, Some(&code), RateBasis::Quoted(rate))?;
    info!(
        rate = %conversion.exchange_rate,
        converted = %conversion.converted_amount,
        "Converted amount"
    );
    Ok(conversion)
}

/// Three ASCII letters, the shape of an ISO 4217 code.
fn is_code_shaped(value: &str) -> bool {
    value.len() == 3 && value.bytes().all(|b| b.is_ascii_alphabetic())
}
