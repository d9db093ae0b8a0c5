//! Remote-control database commands
//!
//! Cascading browse over the vendor → model → remote-section hierarchy,
//! with prefix narrowing for the long vendor and model listings.

use anyhow::{Result, anyhow, bail};
use clap::Subcommand;
use colored::*;
use hearth_client::ControllerClient;
use hearth_core::domain::device::{RemoteDetails, Vendor};

use super::describe;
use crate::config::Config;
use crate::filter::{filter_by_prefix, find_by_prefix};

/// Database subcommands
#[derive(Subcommand)]
pub enum DbCommands {
    /// List vendors
    Vendors {
        /// Only show entries starting with this prefix
        #[arg(long)]
        filter: Option<String>,
    },
    /// List the models of a vendor
    Models {
        /// Vendor id or name prefix
        vendor: String,

        /// Only show entries starting with this prefix
        #[arg(long)]
        filter: Option<String>,
    },
    /// List the remote sections of a model
    Sections {
        /// Model id
        model_id: i64,
    },
    /// Show the option table and key codes of a model or section
    Details {
        /// Model id
        #[arg(long, conflicts_with = "section_id")]
        model_id: Option<i64>,

        /// Remote-section id
        #[arg(long)]
        section_id: Option<i64>,
    },
}

/// Handle database commands
///
/// Routes database subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The database command to execute
/// * `config` - The CLI configuration
pub async fn handle_db_command(command: DbCommands, config: &Config) -> Result<()> {
    let client = ControllerClient::new(&config.controller_url);

    match command {
        DbCommands::Vendors { filter } => list_vendors(&client, filter).await,
        DbCommands::Models { vendor, filter } => list_models(&client, &vendor, filter).await,
        DbCommands::Sections { model_id } => list_sections(&client, model_id).await,
        DbCommands::Details {
            model_id,
            section_id,
        } => show_details(&client, model_id, section_id).await,
    }
}

/// List all vendors
async fn list_vendors(client: &ControllerClient, filter: Option<String>) -> Result<()> {
    println!("{}", "Fetching vendors...".dimmed());
    let vendors = client.list_vendors().await.map_err(describe)?;
    let vendors = apply_filter(vendors, filter, |vendor| vendor.name.as_str());

    if vendors.is_empty() {
        println!("{}", "No vendors found.".yellow());
    } else {
        println!("{}", format!("Found {} vendor(s):", vendors.len()).bold());
        for vendor in vendors {
            println!("  {} {}", format!("[{}]", vendor.id).dimmed(), vendor.name);
        }
    }

    Ok(())
}

/// List the models of one vendor
async fn list_models(
    client: &ControllerClient,
    vendor_key: &str,
    filter: Option<String>,
) -> Result<()> {
    let vendor = resolve_vendor(client, vendor_key).await?;

    println!(
        "{}",
        format!("Fetching models for {}...", vendor.name).dimmed()
    );
    let models = client.list_models(vendor.id).await.map_err(describe)?;
    let models = apply_filter(models, filter, |model| model.display_name());

    if models.is_empty() {
        println!(
            "{}",
            format!("No models found for vendor {}.", vendor.name).yellow()
        );
    } else {
        println!(
            "{}",
            format!("Found {} model(s) for {}:", models.len(), vendor.name).bold()
        );
        for model in &models {
            if model.file_name == model.display_name() {
                println!(
                    "  {} {}",
                    format!("[{}]", model.id).dimmed(),
                    model.display_name()
                );
            } else {
                println!(
                    "  {} {}  {}",
                    format!("[{}]", model.id).dimmed(),
                    model.display_name(),
                    model.file_name.dimmed()
                );
            }
        }
    }

    Ok(())
}

/// List the remote sections of one model
async fn list_sections(client: &ControllerClient, model_id: i64) -> Result<()> {
    let sections = client
        .list_remote_sections(model_id)
        .await
        .map_err(describe)?;

    if sections.is_empty() {
        println!("{}", "No remote sections found.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} remote section(s):", sections.len()).bold()
        );
        for section in sections {
            let raw_marker = if section.raw { " (raw)".dimmed() } else { "".dimmed() };
            println!(
                "  {} {}{}",
                format!("[{}]", section.id).dimmed(),
                section.name,
                raw_marker
            );
        }
    }

    Ok(())
}

/// Show the details of a model or a single remote section
///
/// The cascade branches on the section count: multi-section models need a
/// section choice first, single-section models go straight to details.
async fn show_details(
    client: &ControllerClient,
    model_id: Option<i64>,
    section_id: Option<i64>,
) -> Result<()> {
    let details = match (model_id, section_id) {
        (_, Some(section_id)) => {
            client
                .remote_details_by_section(section_id)
                .await
                .map_err(describe)?
        }
        (Some(model_id), None) => {
            if client.is_multi_section(model_id).await.map_err(describe)? {
                let sections = client
                    .list_remote_sections(model_id)
                    .await
                    .map_err(describe)?;

                println!(
                    "{}",
                    "This model has several remote sections; pick one with --section-id:".yellow()
                );
                for section in sections {
                    println!("  {} {}", format!("[{}]", section.id).dimmed(), section.name);
                }
                return Ok(());
            }

            client
                .remote_details_by_model(model_id)
                .await
                .map_err(describe)?
        }
        (None, None) => bail!("Provide --model-id or --section-id"),
    };

    print_details(&details);
    Ok(())
}

/// Resolve a vendor by id or by name prefix
///
/// A numeric key matches on id first; otherwise the first vendor whose name
/// starts with the key wins.
async fn resolve_vendor(client: &ControllerClient, key: &str) -> Result<Vendor> {
    let vendors = client.list_vendors().await.map_err(describe)?;

    if let Ok(id) = key.parse::<i64>() {
        if let Some(vendor) = vendors.iter().find(|vendor| vendor.id == id) {
            return Ok(vendor.clone());
        }
    }

    find_by_prefix(&vendors, key, |vendor| vendor.name.as_str())
        .cloned()
        .ok_or_else(|| anyhow!("No vendor matching '{}'", key))
}

fn apply_filter<T>(items: Vec<T>, filter: Option<String>, name: impl Fn(&T) -> &str) -> Vec<T> {
    match filter {
        Some(prefix) => filter_by_prefix(items, &prefix, name),
        None => items,
    }
}

/// Print the option table and key codes
fn print_details(details: &RemoteDetails) {
    if !details.options.is_empty() {
        println!("{}", "Options:".bold());
        for option in &details.options {
            println!("  {:<14} {}", option.name.cyan(), option.value);
        }
        println!();
    }

    if details.codes.is_empty() {
        println!("{}", "No key codes found.".yellow());
    } else {
        println!("{}", format!("Key codes ({}):", details.codes.len()).bold());
        for code in &details.codes {
            if code.comment.is_empty() {
                println!("  {:<20} {}", code.name.cyan(), code.value);
            } else {
                println!(
                    "  {:<20} {}  {}",
                    code.name.cyan(),
                    code.value,
                    code.comment.dimmed()
                );
            }
        }
    }
}
