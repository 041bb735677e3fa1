//! Exchange rate resolution against an external rate source.
//!
//! A rate is usable when it is effective on or before the transaction date
//! and no more than six months earlier. Resolution tries each
//! [`CandidateField`] in order and stops at the first one that yields a
//! usable rate. Failed or unparsable attempts fall through to the next
//! field; only "no rate anywhere" reaches the caller, as `Ok(None)`.

use chrono::{Months, NaiveDate};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use super::exchange::{ExchangeRate, RateCandidate, RateWindow};
use super::parse::parse_candidates;
use super::registry::CurrencyRegistry;
use super::request::{CandidateField, RateRequest};
use super::source::RateSource;

/// How far back from the transaction date a rate may be effective.
pub const RATE_WINDOW_MONTHS: u32 = 6;

/// Records requested per query; six months of observations fit in one page.
pub const DEFAULT_PAGE_SIZE: u32 = 200;

/// Conditions that make a resolution request itself invalid.
///
/// Absence of data is never an error; it is `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Currency identifier is empty or whitespace.
    #[error("currency identifier is blank")]
    BlankIdentifier,

    /// Window start falls outside the supported calendar.
    #[error("no rate window can be computed for {0}")]
    WindowOutOfRange(NaiveDate),
}

/// Computes the inclusive rate window ending on `target_date`.
///
/// Month subtraction clamps to the end of shorter months, so a window
/// ending 2024-08-31 starts 2024-02-29.
pub fn rate_window(target_date: NaiveDate) -> Result<RateWindow, ResolveError> {
    let start = target_date
        .checked_sub_months(Months::new(RATE_WINDOW_MONTHS))
        .ok_or(ResolveError::WindowOutOfRange(target_date))?;

    Ok(RateWindow {
        start,
        end: target_date,
    })
}

/// Maps a caller identifier onto the rate source vocabulary.
///
/// ISO codes become their registry description, known descriptions get
/// their canonical spelling, and anything else passes through trimmed.
/// Returns `None` for a blank identifier.
#[must_use]
pub fn normalize_identifier(identifier: &str) -> Option<String> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = CurrencyRegistry::description_for_code(trimmed)
        .or_else(|| {
            CurrencyRegistry::descriptor_for_description(trimmed)
                .map(|descriptor| descriptor.description)
        })
        .unwrap_or(trimmed);

    Some(normalized.to_string())
}

/// Picks the freshest candidate inside `window`.
///
/// Candidates are stable-sorted newest first before selection, so on equal
/// dates the one that appeared first wins regardless of upstream ordering.
#[must_use]
pub fn select_best(candidates: Vec<RateCandidate>, window: RateWindow) -> Option<ExchangeRate> {
    let mut usable: Vec<RateCandidate> = candidates
        .into_iter()
        .filter(|candidate| window.contains(candidate.effective_date))
        .collect();

    usable.sort_by(|a, b| b.effective_date.cmp(&a.effective_date));
    usable.first().copied().map(ExchangeRate::from)
}

/// Resolves USD exchange rates from a [`RateSource`].
///
/// Holds no state between calls; concurrent resolutions are independent.
#[derive(Debug, Clone)]
pub struct RateResolver<S> {
    source: S,
    page_size: u32,
}

impl<S: RateSource> RateResolver<S> {
    /// Creates a resolver over `source` with the default page size.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Overrides the number of records requested per query.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Finds the most recent rate for `identifier` effective within the
    /// six months up to and including `target_date`.
    ///
    /// `identifier` may be an ISO code or a rate source description.
    ///
    /// # Errors
    ///
    /// Returns an error only for a blank identifier or an unrepresentable
    /// window. Transport and parsing failures are logged and absorbed.
    pub async fn resolve(
        &self,
        target_date: NaiveDate,
        identifier: &str,
    ) -> Result<Option<ExchangeRate>, ResolveError> {
        let currency = normalize_identifier(identifier).ok_or(ResolveError::BlankIdentifier)?;
        let window = rate_window(target_date)?;

        for field in CandidateField::ORDER {
            let request = field.request(&currency, window, self.page_size);

            if let Some(rate) = self.attempt(&request).await {
                info!(
                    field = %field,
                    currency = %currency,
                    %target_date,
                    rate_date = %rate.rate_date,
                    rate = %rate.rate,
                    "Found exchange rate"
                );
                return Ok(Some(rate));
            }
            debug!(field = %field, currency = %currency, "No usable rate for filter");
        }

        warn!(
            currency = %currency,
            %target_date,
            window_start = %window.start,
            "No exchange rate found within window"
        );
        Ok(None)
    }

    /// Runs one query; every failure mode collapses to `None`.
    async fn attempt(&self, request: &RateRequest) -> Option<ExchangeRate> {
        debug!(query = %request.query_string(), "Querying rate source");

        let body = match self.source.fetch(request).await {
            Ok(Some(body)) if !body.trim().is_empty() => body,
            Ok(_) => {
                debug!(field = %request.field, "Empty response from rate source");
                return None;
            }
            Err(error) => {
                warn!(
                    field = %request.field,
                    currency = %request.currency,
                    %error,
                    "Rate source query failed"
                );
                return None;
            }
        };

        trace!(%body, "Rate source response");

        let candidates = match parse_candidates(&body) {
            Ok(candidates) => candidates,
            Err(error) => {
                debug!(field = %request.field, %error, "Unusable rate source response");
                return None;
            }
        };

        select_best(candidates, request.window)
    }
}
