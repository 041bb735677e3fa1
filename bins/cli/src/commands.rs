//! Subcommand handlers.
//!
//! Each handler returns the JSON value printed on stdout. Failures surface
//! as [`CliError`] so `main` can pick the exit code.

use purchasefx_core::currency::conversion::round_amount;
use purchasefx_core::currency::{CurrencyRegistry, ExchangeRate, RateResolver, RateSource};
use purchasefx_core::purchase::convert_usd_amount;
use purchasefx_shared::AppError;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::cli::{Command, ConvertArgs, RateArgs};
use crate::error::CliError;

/// Resolved rate as printed by `rate`.
#[derive(Debug, Serialize)]
struct RateOutput<'a> {
    currency: &'a str,
    #[serde(flatten)]
    rate: ExchangeRate,
}

/// Runs one subcommand and returns its JSON output.
pub async fn run<S: RateSource>(
    command: &Command,
    resolver: &RateResolver<S>,
) -> Result<Value, CliError> {
    match command {
        Command::Convert(args) => convert(args, resolver).await,
        Command::Rate(args) => rate(args, resolver).await,
        Command::Currencies => Ok(serde_json::to_value(CurrencyRegistry::all())?),
    }
}

async fn convert<S: RateSource>(
    args: &ConvertArgs,
    resolver: &RateResolver<S>,
) -> Result<Value, CliError> {
    let amount = round_amount(args.amount);
    info!(%amount, date = %args.date, currency = ?args.currency, "Converting amount");

    let result = convert_usd_amount(resolver, amount, args.date, args.currency.as_deref())
        .await
        .map_err(AppError::from)?;

    Ok(serde_json::to_value(result)?)
}

async fn rate<S: RateSource>(
    args: &RateArgs,
    resolver: &RateResolver<S>,
) -> Result<Value, CliError> {
    let currency = args.currency.trim();

    let rate = resolver
        .resolve(args.date, currency)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No exchange rate for {currency} available within 6 months on-or-before {}",
                args.date
            ))
        })?;

    Ok(serde_json::to_value(RateOutput { currency, rate })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use purchasefx_core::currency::{RateRequest, SourceError};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    /// Answers every query with the same body.
    struct FixedSource(Option<&'static str>);

    #[async_trait]
    impl RateSource for FixedSource {
        async fn fetch(&self, _request: &RateRequest) -> Result<Option<String>, SourceError> {
            Ok(self.0.map(str::to_string))
        }
    }

    const CAD_BODY: &str =
        r#"{ "data": [ { "exchange_rate": "1.234567", "effective_date": "2023-12-29" } ] }"#;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn test_convert_prints_conversion() {
        let resolver = RateResolver::new(FixedSource(Some(CAD_BODY)));
        let command = Command::Convert(ConvertArgs {
            date: date(),
            amount: dec!(10.004),
            currency: Some("cad".to_string()),
        });

        let output = run(&command, &resolver).await.unwrap();

        assert_eq!(output["amount_usd"], "10.00");
        assert_eq!(output["target_currency"], "CAD");
        assert_eq!(output["exchange_rate"], "1.234567");
        assert_eq!(output["rate_date"], "2023-12-29");
        assert_eq!(output["converted_amount"], "12.35");
    }

    #[tokio::test]
    async fn test_convert_without_rate_exits_3() {
        let resolver = RateResolver::new(FixedSource(None));
        let command = Command::Convert(ConvertArgs {
            date: date(),
            amount: dec!(10),
            currency: Some("CAD".to_string()),
        });

        let error = run(&command, &resolver).await.unwrap_err();

        assert_eq!(error.exit_code(), 3);
    }

    #[tokio::test]
    async fn test_convert_overflow_exits_1() {
        let resolver = RateResolver::new(FixedSource(Some(CAD_BODY)));
        let command = Command::Convert(ConvertArgs {
            date: date(),
            amount: Decimal::MAX,
            currency: Some("CAD".to_string()),
        });

        let error = run(&command, &resolver).await.unwrap_err();

        assert_eq!(error.exit_code(), 1);
        assert_eq!(error.body().error, "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn test_rate_prints_resolved_rate() {
        let resolver = RateResolver::new(FixedSource(Some(CAD_BODY)));
        let command = Command::Rate(RateArgs {
            date: date(),
            currency: " Canada-Dollar ".to_string(),
        });

        let output = run(&command, &resolver).await.unwrap();

        assert_eq!(output["currency"], "Canada-Dollar");
        assert_eq!(output["rate_date"], "2023-12-29");
        assert_eq!(output["rate"], "1.234567");
    }

    #[tokio::test]
    async fn test_blank_rate_currency_exits_2() {
        let resolver = RateResolver::new(FixedSource(Some(CAD_BODY)));
        let command = Command::Rate(RateArgs {
            date: date(),
            currency: "  ".to_string(),
        });

        let error = run(&command, &resolver).await.unwrap_err();

        assert_eq!(error.exit_code(), 2);
    }

    #[tokio::test]
    async fn test_currencies_lists_registry() {
        let resolver = RateResolver::new(FixedSource(None));

        let output = run(&Command::Currencies, &resolver).await.unwrap();

        let entries = output.as_array().unwrap();
        assert_eq!(entries.len(), CurrencyRegistry::all().len());
        assert!(
            entries
                .iter()
                .any(|e| e["iso_code"] == "CAD" && e["description"] == "Canada-Dollar")
        );
    }
}
