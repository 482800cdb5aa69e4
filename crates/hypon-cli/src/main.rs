//! hypon - log in to the Hypon cloud API and check an authenticated endpoint.
//!
//! Credentials come from `HYPON_USER` / `HYPON_PASS` (a `.env` file in the
//! working directory is honored). The process exits non-zero if either the
//! login or the fetch fails.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hypon_core::config::ENV_BASE_URL;
use hypon_core::{Config, Resource};

#[derive(Debug, Parser)]
#[command(name = "hypon", version, about)]
struct Cli {
    /// Endpoint to fetch after logging in (admin-info, plant-list)
    #[arg(long, default_value_t = Resource::AdminInfo)]
    resource: Resource,

    /// Override the API base URL
    #[arg(long, env = ENV_BASE_URL)]
    base_url: Option<String>,
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::from_env().with_resource(cli.resource);
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }

    info!(base_url = config.base_url(), resource = %config.resource, "Starting");

    let status = hypon_core::run(&config).await?;

    println!("API response: {}", status);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
