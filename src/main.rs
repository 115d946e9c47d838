//! index-maint - batch maintenance for search clusters
//!
//! `reindex` copies a range of indices into `-reindexed` destinations,
//! `unfreeze` reopens every frozen index in the cluster.

use clap::Parser;
use index_maintenance::cli::{self, Cli};
use index_maintenance::config::Config;
use index_maintenance::utils::logging;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match &cli.config {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => info!("No configuration file given, using defaults"),
    }

    match cli::run(&cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
