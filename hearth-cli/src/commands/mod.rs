//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod database;
mod deploy;
mod status;

pub use database::DbCommands;
pub use status::WatchArgs;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Trigger an online configuration sync
    Sync,
    /// Upload a configuration archive to the controller
    Upload {
        /// Path to the configuration zip
        path: String,
    },
    /// Reload the controller configuration and clear its caches
    Refresh,
    /// Show the controller's account link status
    Status,
    /// Watch a long-running operation until it completes
    Watch(WatchArgs),
    /// Browse the remote-control database
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Print the console version label
    Version,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Sync => deploy::sync(config).await,
        Commands::Upload { path } => deploy::upload(config, &path).await,
        Commands::Refresh => deploy::refresh(config).await,
        Commands::Status => status::link_status(config).await,
        Commands::Watch(args) => status::watch(config, args).await,
        Commands::Db { command } => database::handle_db_command(command, config).await,
        Commands::Version => {
            println!("{}", crate::version::build_label());
            Ok(())
        }
    }
}

/// Turn a client error into the console's user-facing wording
pub(crate) fn describe(err: hearth_client::ClientError) -> anyhow::Error {
    anyhow::anyhow!(err.console_message())
}
