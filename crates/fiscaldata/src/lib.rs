//! Treasury Fiscal Data client for PurchaseFX.
//!
//! Implements [`RateSource`] over the Fiscal Data rates-of-exchange
//! endpoint. Each query is a single bounded HTTP GET; the resolver in
//! `purchasefx-core` decides what to do with failures.

use std::time::Duration;

use async_trait::async_trait;
use purchasefx_core::currency::{RateRequest, RateSource, SourceError};
use purchasefx_shared::FiscalDataConfig;
use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::debug;

pub use purchasefx_shared::config::DEFAULT_FISCAL_DATA_URL;

/// HTTP client for the rates-of-exchange endpoint.
#[derive(Debug, Clone)]
pub struct FiscalDataClient {
    client: Client,
    base_url: String,
}

impl FiscalDataClient {
    /// Creates a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).gzip(true).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn from_config(config: &FiscalDataConfig) -> Result<Self, reqwest::Error> {
        Self::new(config.base_url.clone(), config.timeout())
    }

    /// Endpoint this client queries.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RateSource for FiscalDataClient {
    async fn fetch(&self, request: &RateRequest) -> Result<Option<String>, SourceError> {
        let url = request.url(&self.base_url);
        debug!(%url, "Fetching exchange rates");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Body(e.to_string()))?;

        Ok((!body.is_empty()).then_some(body))
    }
}
