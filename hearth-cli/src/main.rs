//! Hearth CLI
//!
//! Command-line admin console for a Hearth home-automation controller:
//! configuration sync and upload, cache refresh, account link status,
//! progress watching, and remote-control database browsing.

mod commands;
mod config;
mod filter;
mod version;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hearth")]
#[command(about = "Hearth controller admin console", long_about = None)]
struct Cli {
    /// Controller URL
    #[arg(
        long,
        env = "HEARTH_CONTROLLER_URL",
        default_value = "http://localhost:8688"
    )]
    controller_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hearth_cli=warn,hearth_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        controller_url: cli.controller_url,
    };

    handle_command(cli.command, &config).await
}
