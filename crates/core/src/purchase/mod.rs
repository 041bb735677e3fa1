//! Purchase recording and conversion.
//!
//! Purchases are recorded in USD and converted on read into a requested
//! currency, using the rate effective on the transaction date.

pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use error::PurchaseError;
pub use service::{PurchaseService, convert_usd_amount};
pub use store::PurchaseStore;
pub use types::{ConvertedPurchase, NewPurchase, Purchase};
