//! Controller status commands
//!
//! Account link display and progress watching for long-running operations.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use colored::*;
use hearth_client::{ControllerClient, PollConfig, ProgressPoller};
use hearth_core::domain::link::LinkStatus;
use hearth_core::domain::progress::{CompletionSignal, StatusReport};

use super::describe;
use crate::config::Config;

/// Show the controller's account link status
pub async fn link_status(config: &Config) -> Result<()> {
    let client = ControllerClient::new(&config.controller_url);

    match client.linked_status().await.map_err(describe)? {
        LinkStatus::Unavailable => {
            println!("{}", "Link status is not available.".yellow());
        }
        LinkStatus::NotLinked { mac_address } => {
            println!("{}", "Not linked to an online account.".yellow());
            println!("  MAC address: {}", mac_address.cyan());
        }
        LinkStatus::Linked { account_id } => {
            println!("{}", "Linked to an online account.".green());
            println!("  Account: {}", account_id.cyan());
        }
    }

    Ok(())
}

/// Arguments for the watch command
#[derive(Args)]
pub struct WatchArgs {
    /// Operation topic to poll
    #[arg(long, default_value = "commit")]
    pub topic: String,

    /// Milliseconds between polls
    #[arg(long, default_value_t = 2000)]
    pub interval_ms: u64,

    /// Payload field carrying the completion signal
    #[arg(long, default_value = "status")]
    pub field: String,

    /// Field value that marks completion
    #[arg(long, default_value = "isEnd")]
    pub done: String,

    /// Poll a single time and exit
    #[arg(long)]
    pub once: bool,
}

/// Watch a long-running operation until it completes
pub async fn watch(config: &Config, args: WatchArgs) -> Result<()> {
    let client = Arc::new(ControllerClient::new(&config.controller_url));

    let poll_config = PollConfig::new(args.topic.clone(), Duration::from_millis(args.interval_ms))
        .with_signal(CompletionSignal::new(args.field, args.done));
    poll_config.validate().map_err(describe)?;

    let mut poller = ProgressPoller::new(client, poll_config, render_report, || {
        println!("{}", "Operation finished.".green().bold());
    });

    if args.once {
        poller.poll_once().await.map_err(describe)?;
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "Watching '{}' every {} ms (ctrl-c to stop)...",
            args.topic, args.interval_ms
        )
        .dimmed()
    );

    // Immediate first paint, then the periodic refresh takes over.
    poller.poll_once().await.map_err(describe)?;
    poller.start();
    poller.wait().await;

    Ok(())
}

/// Print one status report as a single line
fn render_report(report: StatusReport) {
    let stamp = chrono::Local::now().format("%H:%M:%S").to_string();

    match report.as_object() {
        Some(fields) => {
            let line = fields
                .iter()
                .map(|(key, value)| format!("{}={}", key.cyan(), display_value(value)))
                .collect::<Vec<_>>()
                .join("  ");
            println!("{} {}", stamp.dimmed(), line);
        }
        None => println!("{} {}", stamp.dimmed(), report),
    }
}

/// Strings print bare; everything else keeps its JSON form
fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
