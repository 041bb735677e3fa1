//! Exchange rate source seam.

use async_trait::async_trait;
use thiserror::Error;

use super::request::RateRequest;

/// Failure of a single query against the rate source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Request could not be sent or timed out.
    #[error("rate source request failed: {0}")]
    Transport(String),

    /// Source answered with a non-success status.
    #[error("rate source returned HTTP {0}")]
    Status(u16),

    /// Response body could not be read.
    #[error("rate source body could not be read: {0}")]
    Body(String),
}

/// Transport to an external exchange rate source.
///
/// Implementations must bound every request with a timeout; the resolver
/// imposes none of its own.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Executes one query and returns the raw response body.
    ///
    /// Returns `Ok(None)` when the source answered with an empty body.
    async fn fetch(&self, request: &RateRequest) -> Result<Option<String>, SourceError>;
}

#[async_trait]
impl<S: RateSource + ?Sized> RateSource for std::sync::Arc<S> {
    async fn fetch(&self, request: &RateRequest) -> Result<Option<String>, SourceError> {
        (**self).fetch(request).await
    }
}
