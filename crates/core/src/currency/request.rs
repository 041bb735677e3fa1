//! Query descriptors sent to the exchange rate source.

use std::fmt;

use super::exchange::RateWindow;

/// Fields requested from the rate source: rate, effective date, record date.
pub const RATE_FIELDS: &str = "exchange_rate,effective_date,record_date";

/// Freshest records first; record date breaks effective-date ties.
pub const RATE_SORT: &str = "-effective_date,-record_date";

/// Date field the window filter applies to.
const EFFECTIVE_DATE_FIELD: &str = "effective_date";

/// A field the rate source can be filtered on to find a currency.
///
/// The source indexes records inconsistently, so the resolver tries each
/// field in [`CandidateField::ORDER`] until one yields a usable rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateField {
    /// Raw currency field.
    Currency,
    /// Full `<Country>-<Currency>` description field.
    CountryCurrencyDesc,
}

impl CandidateField {
    /// Fields in the order they are attempted.
    pub const ORDER: [Self; 2] = [Self::Currency, Self::CountryCurrencyDesc];

    /// Field name as the rate source spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Currency => "currency",
            Self::CountryCurrencyDesc => "country_currency_desc",
        }
    }

    /// Builds the query for this field.
    #[must_use]
    pub fn request(self, currency: &str, window: RateWindow, page_size: u32) -> RateRequest {
        RateRequest {
            field: self,
            currency: currency.to_string(),
            window,
            page_size,
        }
    }
}

impl fmt::Display for CandidateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One query against the rate source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRequest {
    /// Field the currency filter applies to.
    pub field: CandidateField,
    /// Currency value, unencoded.
    pub currency: String,
    /// Effective date range requested.
    pub window: RateWindow,
    /// Maximum records returned.
    pub page_size: u32,
}

impl RateRequest {
    /// Filter expression; the source ANDs the comma-joined clauses.
    #[must_use]
    pub fn filter(&self) -> String {
        format!(
            "{field}:eq:{value},{date}:lte:{end},{date}:gte:{start}",
            field = self.field,
            value = encode_filter_value(&self.currency),
            date = EFFECTIVE_DATE_FIELD,
            end = self.window.end.format("%Y-%m-%d"),
            start = self.window.start.format("%Y-%m-%d"),
        )
    }

    /// Query string, without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        format!(
            "fields={RATE_FIELDS}&filter={}&page[size]={}&sort={RATE_SORT}",
            self.filter(),
            self.page_size
        )
    }

    /// Full request URL against `base_url`.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        let separator = if base_url.contains('?') { '&' } else { '?' };
        format!("{base_url}{separator}{}", self.query_string())
    }
}

/// Escapes the characters that would break a filter clause.
///
/// Only space, comma and parentheses are encoded; the source expects
/// everything else verbatim.
#[must_use]
pub fn encode_filter_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            ' ' => encoded.push_str("%20"),
            ',' => encoded.push_str("%2C"),
            '(' => encoded.push_str("%28"),
            ')' => encoded.push_str("%29"),
            other => encoded.push(other),
        }
    }
    encoded
}
