//! Purchase error types.

use chrono::NaiveDate;
use purchasefx_shared::AppError;
use purchasefx_shared::types::PurchaseId;
use thiserror::Error;

use crate::currency::{ConversionError, ResolveError};

/// Purchase-related errors.
#[derive(Debug, Error)]
pub enum PurchaseError {
    /// Purchase not found.
    #[error("Purchase with id {0} was not found")]
    NotFound(PurchaseId),

    /// No rate within six months on or before the transaction date.
    #[error("No exchange rate for {currency} available within 6 months on-or-before {date}")]
    RateNotFound {
        /// Requested currency code.
        currency: String,
        /// Transaction date.
        date: NaiveDate,
    },

    /// Rate resolution could not run.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Conversion could not be computed.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Storage backend failure.
    #[error("Purchase storage error: {0}")]
    Storage(String),
}

impl From<PurchaseError> for AppError {
    fn from(error: PurchaseError) -> Self {
        match error {
            PurchaseError::NotFound(_) | PurchaseError::RateNotFound { .. } => {
                Self::NotFound(error.to_string())
            }
            PurchaseError::Resolve(resolve) => resolve.into(),
            PurchaseError::Storage(message) => Self::Internal(message),
            PurchaseError::Conversion(_) => Self::Internal(error.to_string()),
        }
    }
}

impl From<ResolveError> for AppError {
    fn from(error: ResolveError) -> Self {
        Self::Validation(error.to_string())
    }
}
