// src/main.rs

//! edgar-ingest: Daily SEC EDGAR filing index ingester CLI
//!
//! Intended to be triggered once per day by an external scheduler. A fatal
//! pipeline error is logged and suppressed by default so a bad day never
//! looks like a crash; pass `--strict` to surface it as a nonzero exit for
//! external monitoring.

use std::process::ExitCode;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};

use edgar_ingest::error::Result;
use edgar_ingest::logging;
use edgar_ingest::models::Config;
use edgar_ingest::pipeline::{RunSummary, run_daily};
use edgar_ingest::services::EdgarClient;
use edgar_ingest::storage::LocalStore;

#[derive(Parser, Debug)]
#[command(
    name = "edgar-ingest",
    version = "0.1.0",
    about = "Daily SEC EDGAR filing index ingester"
)]

/// CLI Arguments
struct Cli {
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

/// CLI Commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the daily ingest pipeline
    Run {
        /// Ingest the index for a specific date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Exit nonzero on a fatal pipeline error instead of only logging it
        #[arg(long)]
        strict: bool,
    },
    /// Validate the configuration file
    Validate,
}

/// Main entry point
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config);

    // Initialize logging system
    logging::init(&config.logging.level);

    match cli.command {
        Command::Run { date, strict } => {
            let date = date.unwrap_or_else(|| Utc::now().date_naive());
            match run(&config, date).await {
                Ok(_) => ExitCode::SUCCESS,
                Err(e) => {
                    log::error!("Fatal error during ingest for {}: {}", date, e);
                    if strict {
                        ExitCode::FAILURE
                    } else {
                        ExitCode::SUCCESS
                    }
                }
            }
        }
        Command::Validate => match config.validate() {
            Ok(()) => {
                log::info!("Configuration OK");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{}", e);
                ExitCode::FAILURE
            }
        },
    }
}

async fn run(config: &Config, date: NaiveDate) -> Result<RunSummary> {
    config.validate()?;

    let client = EdgarClient::new(&config.edgar)?;
    let store = LocalStore::new(&config.storage.data_dir);

    run_daily(config, &client, &store, date).await
}
