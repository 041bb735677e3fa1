//! Exchange rate types and logic.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A resolved USD exchange rate.
///
/// The rate is the price of 1 USD in the target currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Date the rate is effective.
    pub rate_date: NaiveDate,
    /// Exchange rate (1 USD = rate target currency).
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub const fn new(rate_date: NaiveDate, rate: Decimal) -> Self {
        Self { rate_date, rate }
    }
}

/// A rate record read from a rate source response, before selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateCandidate {
    /// Date the quoted rate is valid for.
    pub effective_date: NaiveDate,
    /// Quoted rate.
    pub rate: Decimal,
}

impl From<RateCandidate> for ExchangeRate {
    fn from(candidate: RateCandidate) -> Self {
        Self::new(candidate.effective_date, candidate.rate)
    }
}

/// Inclusive date range a usable rate must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateWindow {
    /// Earliest acceptable effective date.
    pub start: NaiveDate,
    /// Latest acceptable effective date (the transaction date).
    pub end: NaiveDate,
}

impl RateWindow {
    /// Returns true if `date` lies within the window, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let window = RateWindow {
            start: date(2023, 7, 1),
            end: date(2024, 1, 1),
        };
        assert!(window.contains(date(2023, 7, 1)));
        assert!(window.contains(date(2024, 1, 1)));
        assert!(window.contains(date(2023, 10, 15)));
        assert!(!window.contains(date(2023, 6, 30)));
        assert!(!window.contains(date(2024, 1, 2)));
    }

    #[test]
    fn test_candidate_into_exchange_rate() {
        let candidate = RateCandidate {
            effective_date: date(2024, 1, 1),
            rate: dec!(1.2345),
        };
        let rate = ExchangeRate::from(candidate);
        assert_eq!(rate.rate_date, date(2024, 1, 1));
        assert_eq!(rate.rate, dec!(1.2345));
    }

    #[test]
    fn test_exchange_rate_serializes_rate_as_string() {
        let rate = ExchangeRate::new(date(2024, 1, 1), dec!(1.2345));
        let json = serde_json::to_value(rate).unwrap();
        assert_eq!(json["rate_date"], "2024-01-01");
        assert_eq!(json["rate"], "1.2345");
    }
}
