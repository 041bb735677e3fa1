//! PurchaseFX command-line entry point.
//!
//! Converts USD amounts at Treasury reporting rates and prints JSON on
//! stdout. Logs and errors go to stderr.

mod cli;
mod commands;
mod error;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use purchasefx_core::currency::RateResolver;
use purchasefx_fiscaldata::FiscalDataClient;
use purchasefx_shared::AppConfig;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let body = error.body();
            match serde_json::to_string(&body) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("error: {}", body.message),
            }
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let json = config.logging.json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();

    let client = FiscalDataClient::from_config(&config.fiscal_data)
        .context("Failed to build Fiscal Data client")?;
    debug!(base_url = %client.base_url(), "Rate source configured");

    let resolver = RateResolver::new(client).with_page_size(config.fiscal_data.page_size);

    let output = commands::run(&cli.command, &resolver).await?;
    render(&output, cli.pretty)
}

fn render(output: &Value, pretty: bool) -> Result<(), CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
