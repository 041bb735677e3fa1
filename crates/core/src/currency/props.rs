//! Property-based tests for currency operations.
//!
//! - Registry round-trip
//! - Window inclusion and best-date selection
//! - Half-up rounding at fixed scales

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{ConversionCalculator, RateBasis};
use super::exchange::{ExchangeRate, RateCandidate};
use super::registry::CurrencyRegistry;
use super::resolver::{rate_window, select_best};

/// Strategy to generate transaction dates between 2001 and 2030.
fn target_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..10_950).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2001, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

/// Strategy to generate candidate offsets from the target date, in days.
/// Negative is earlier; spans well past both window edges.
fn candidate_offsets() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((-400i64..30, 1i64..10_000_000), 0..40)
}

/// Strategy to generate positive USD amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates with up to 8 decimal places.
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000_000i64).prop_map(|v| Decimal::new(v, 8))
}

fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    date + chrono::Duration::days(days)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every code translates to a description that translates back to it,
    /// whatever the case of the input.
    #[test]
    fn prop_registry_round_trip(
        index in 0usize..CurrencyRegistry::all().len(),
        lower in any::<bool>(),
    ) {
        let code = CurrencyRegistry::all()[index].iso_code;
        let input = if lower { code.to_ascii_lowercase() } else { code.to_string() };

        let description = CurrencyRegistry::description_for_code(&input).unwrap();
        let descriptor = CurrencyRegistry::descriptor_for_description(description).unwrap();
        prop_assert_eq!(descriptor.iso_code, code);
        prop_assert_eq!(descriptor.description, description);
    }

    /// A selected rate always lies in the window and carries the latest
    /// in-window date; nothing is selected when no candidate is in range.
    #[test]
    fn prop_selection_respects_window(
        target in target_date(),
        offsets in candidate_offsets(),
    ) {
        let window = rate_window(target).unwrap();
        let candidates: Vec<RateCandidate> = offsets
            .iter()
            .map(|(days, rate)| RateCandidate {
                effective_date: shift(target, *days),
                rate: Decimal::new(*rate, 4),
            })
            .collect();

        let latest_in_window = candidates
            .iter()
            .filter(|c| window.contains(c.effective_date))
            .map(|c| c.effective_date)
            .max();

        let best = select_best(candidates.clone(), window);

        match (best, latest_in_window) {
            (Some(rate), Some(latest)) => {
                prop_assert!(window.start <= rate.rate_date && rate.rate_date <= target);
                prop_assert_eq!(rate.rate_date, latest);
                let first_at_latest = candidates
                    .iter()
                    .find(|c| c.effective_date == latest)
                    .copied()
                    .map(ExchangeRate::from);
                prop_assert_eq!(Some(rate), first_at_latest);
            }
            (None, None) => {}
            (best, latest) => {
                prop_assert!(false, "selected {:?}, expected date {:?}", best, latest);
            }
        }
    }

    /// Converted amounts carry 2 places, rates 6, and both stay within half
    /// a unit of the exact value.
    #[test]
    fn prop_conversion_scales(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let rate_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let basis = RateBasis::Quoted(ExchangeRate::new(rate_date, rate));
        let result = ConversionCalculator::convert(amount, Some("CAD"), basis).unwrap();

        prop_assert_eq!(result.converted_amount.scale(), 2);
        prop_assert_eq!(result.exchange_rate.scale(), 6);

        let exact = amount * rate;
        prop_assert!((result.converted_amount - exact).abs() <= Decimal::new(5, 3));
        prop_assert!((result.exchange_rate - rate).abs() <= Decimal::new(5, 7));
    }

    /// USD conversion never alters the amount.
    #[test]
    fn prop_identity_preserves_amount(amount in positive_amount()) {
        let result =
            ConversionCalculator::convert(amount, Some("USD"), RateBasis::UsdIdentity).unwrap();
        prop_assert_eq!(result.converted_amount, amount);
        prop_assert_eq!(result.exchange_rate, Decimal::ONE);
    }
}
