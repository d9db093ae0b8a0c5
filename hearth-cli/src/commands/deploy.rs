//! Configuration deployment commands
//!
//! Online sync, manual archive upload, and the configuration refresh.

use anyhow::{Context, Result, bail};
use colored::*;
use hearth_client::ControllerClient;

use super::describe;
use crate::config::Config;

/// Trigger an online configuration sync
pub async fn sync(config: &Config) -> Result<()> {
    let client = ControllerClient::new(&config.controller_url);

    println!("{}", "Syncing configuration from the online account...".dimmed());
    client.sync().await.map_err(describe)?;

    println!("{}", "Sync Complete.".green());
    Ok(())
}

/// Upload a configuration archive
pub async fn upload(config: &Config, path: &str) -> Result<()> {
    validate_archive_path(path)?;

    let archive = std::fs::read(path).with_context(|| format!("Failed to read {}", path))?;
    let file_name = std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("config.zip")
        .to_string();

    let client = ControllerClient::new(&config.controller_url);

    println!("{}", "Uploading configuration...".dimmed());
    let message = client
        .upload_config(&file_name, archive)
        .await
        .map_err(describe)?;

    println!("{}", message.green());
    Ok(())
}

/// Client-side checks before an upload goes on the wire
fn validate_archive_path(path: &str) -> Result<()> {
    if path.is_empty() {
        bail!("Please select a zip first");
    }

    match path.strip_suffix(".zip") {
        Some(stem) if !stem.is_empty() => Ok(()),
        _ => bail!("Only zip is allowed"),
    }
}

/// Reload the controller configuration and clear its caches
pub async fn refresh(config: &Config) -> Result<()> {
    let client = ControllerClient::new(&config.controller_url);

    println!("{}", "Reloading controller configuration...".dimmed());
    client.refresh().await.map_err(describe)?;

    println!("{}", "Finished reloading configuration.".green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_paths_are_accepted() {
        assert!(validate_archive_path("controller-config.zip").is_ok());
        assert!(validate_archive_path("/tmp/config.zip").is_ok());
    }

    #[test]
    fn test_empty_path_is_rejected() {
        assert!(validate_archive_path("").is_err());
    }

    #[test]
    fn test_non_zip_paths_are_rejected() {
        assert!(validate_archive_path("config.tar.gz").is_err());
        assert!(validate_archive_path("config").is_err());
        assert!(validate_archive_path(".zip").is_err());
    }
}
