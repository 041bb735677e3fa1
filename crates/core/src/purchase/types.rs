//! Purchase domain types.

use chrono::NaiveDate;
use purchasefx_shared::types::PurchaseId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::ConversionResult;

/// Input for recording a purchase. Assumed already validated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPurchase {
    /// Free-text description.
    pub description: String,
    /// Date the purchase took place.
    pub transaction_date: NaiveDate,
    /// Purchase amount in USD, any precision.
    pub amount_usd: Decimal,
}

/// A recorded purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    /// Purchase ID.
    pub id: PurchaseId,
    /// Free-text description.
    pub description: String,
    /// Date the purchase took place.
    pub transaction_date: NaiveDate,
    /// Amount in USD at 2 decimal places.
    pub amount_usd: Decimal,
}

/// A purchase together with its conversion into a target currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedPurchase {
    /// Purchase ID.
    pub id: PurchaseId,
    /// Free-text description.
    pub description: String,
    /// Date the purchase took place.
    pub transaction_date: NaiveDate,
    /// Conversion details.
    #[serde(flatten)]
    pub conversion: ConversionResult,
}

impl ConvertedPurchase {
    /// Pairs a purchase with its conversion.
    #[must_use]
    pub fn new(purchase: Purchase, conversion: ConversionResult) -> Self {
        Self {
            id: purchase.id,
            description: purchase.description,
            transaction_date: purchase.transaction_date,
            conversion,
        }
    }
}
