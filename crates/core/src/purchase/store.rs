//! Purchase persistence seam.

use async_trait::async_trait;
use purchasefx_shared::types::PurchaseId;

use super::error::PurchaseError;
use super::types::{NewPurchase, Purchase};

/// Storage for recorded purchases.
#[async_trait]
pub trait PurchaseStore: Send + Sync {
    /// Persists a new purchase and returns it with its assigned ID.
    ///
    /// The amount is already rounded when this is called.
    async fn insert(&self, purchase: NewPurchase) -> Result<Purchase, PurchaseError>;

    /// Looks up a purchase by ID.
    async fn find(&self, id: PurchaseId) -> Result<Option<Purchase>, PurchaseError>;
}
