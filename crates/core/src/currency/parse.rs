//! Tolerant parsing of rate source responses.
//!
//! The source's schema is not fully reliable: the record list may be bare
//! or wrapped in `data`, and field names vary between conventions. Each
//! record is parsed on its own, and a malformed one is skipped without
//! affecting the rest.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;
use thiserror::Error;
use tracing::{trace, warn};

use super::exchange::RateCandidate;

/// Rate field names, in priority order.
pub const RATE_KEYS: &[&str] = &["exchange_rate", "exchangeRate"];

/// Date field names, in priority order.
pub const DATE_KEYS: &[&str] = &["effective_date", "record_date"];

/// A response body that yields no records at all.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// Body is not JSON.
    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Body is neither an array nor an object with a `data` array.
    #[error("response has neither a top-level array nor a `data` array")]
    UnrecognizedShape,
}

/// Why a single record was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecord {
    /// No rate under any known field name.
    #[error("missing rate")]
    MissingRate,

    /// No date under any known field name.
    #[error("missing date")]
    MissingDate,

    /// Rate is not a decimal number.
    #[error("invalid rate {0}")]
    InvalidRate(String),

    /// Rate is zero or negative.
    #[error("non-positive rate {0}")]
    NonPositiveRate(Decimal),

    /// Date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date {0}")]
    InvalidDate(String),
}

/// Parses every well-formed record in a response body.
///
/// Records are returned in response order.
pub fn parse_candidates(body: &str) -> Result<Vec<RateCandidate>, ResponseError> {
    let root: Value = serde_json::from_str(body)?;

    let records = match &root {
        Value::Array(records) => records,
        Value::Object(object) => match object.get("data") {
            Some(Value::Array(records)) => records,
            _ => return Err(ResponseError::UnrecognizedShape),
        },
        _ => return Err(ResponseError::UnrecognizedShape),
    };

    let candidates = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| match parse_record(record) {
            Ok(candidate) => Some(candidate),
            Err(reason @ MalformedRecord::NonPositiveRate(_)) => {
                warn!(index, %reason, "Skipping rate record");
                None
            }
            Err(reason) => {
                trace!(index, %reason, "Skipping rate record");
                None
            }
        })
        .collect();

    Ok(candidates)
}

/// Parses one record into a candidate.
pub fn parse_record(record: &Value) -> Result<RateCandidate, MalformedRecord> {
    let rate = first_present(record, RATE_KEYS).ok_or(MalformedRecord::MissingRate)?;
    let date = first_present(record, DATE_KEYS).ok_or(MalformedRecord::MissingDate)?;

    let rate = parse_rate(rate)?;
    let effective_date = parse_date(date)?;

    Ok(RateCandidate {
        effective_date,
        rate,
    })
}

/// First value under `keys` that is present and not `null`.
fn first_present<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| record.get(key).filter(|value| !value.is_null()))
}

fn parse_rate(value: &Value) -> Result<Decimal, MalformedRecord> {
    let text = match value {
        Value::String(text) => text.trim().to_string(),
        // Source text as written; `arbitrary_precision` keeps it off f64.
        Value::Number(number) => number.to_string(),
        other => return Err(MalformedRecord::InvalidRate(other.to_string())),
    };

    let rate = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| MalformedRecord::InvalidRate(text.clone()))?;

    if rate <= Decimal::ZERO {
        return Err(MalformedRecord::NonPositiveRate(rate));
    }
    Ok(rate)
}

fn parse_date(value: &Value) -> Result<NaiveDate, MalformedRecord> {
    match value {
        Value::String(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map_err(|_| MalformedRecord::InvalidDate(text.clone())),
        other => Err(MalformedRecord::InvalidDate(other.to_string())),
    }
}
