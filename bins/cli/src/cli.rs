//! Command-line argument definitions.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `convert` | Convert a USD amount at the rate effective on a date |
//! | `rate` | Show the exchange rate resolved for a date |
//! | `currencies` | List known currency codes and descriptions |

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

/// Convert USD purchase amounts using Treasury reporting rates of exchange.
#[derive(Debug, Parser)]
#[command(name = "purchasefx", author, version, about)]
pub struct Cli {
    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a USD amount into another currency.
    Convert(ConvertArgs),
    /// Resolve the exchange rate for a currency on a date.
    Rate(RateArgs),
    /// List supported currencies.
    Currencies,
}

/// Arguments of `convert`.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Transaction date (YYYY-MM-DD).
    #[arg(long)]
    pub date: NaiveDate,

    /// Amount in USD; rounded half up to cents.
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Decimal,

    /// Target ISO 4217 code or rate source description. Defaults to USD.
    #[arg(long)]
    pub currency: Option<String>,
}

/// Arguments of `rate`.
#[derive(Debug, Args)]
pub struct RateArgs {
    /// Date the rate must be effective on (YYYY-MM-DD).
    #[arg(long)]
    pub date: NaiveDate,

    /// ISO 4217 code or rate source description, e.g. `CAD` or `Canada-Dollar`.
    #[arg(long)]
    pub currency: String,
}
