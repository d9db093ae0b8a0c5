//! Hearth Controller Client
//!
//! A simple, type-safe HTTP client for the administrative API of a Hearth
//! home-automation controller.
//!
//! This crate provides a unified interface for console frontends to drive
//! the controller's admin surface: configuration sync and upload, cache
//! refresh, account link status, progress polling for long-running
//! operations, and remote-control database browsing.
//!
//! # Example
//!
//! ```no_run
//! use hearth_client::ControllerClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ControllerClient::new("http://localhost:8688");
//!
//!     // Reload the deployed configuration
//!     client.refresh().await?;
//!
//!     println!("Configuration reloaded");
//!     Ok(())
//! }
//! ```

pub mod admin;
pub mod database;
pub mod error;
pub mod progress;
mod status;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use progress::{PollConfig, ProgressPoller, StatusSource};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the controller admin API
///
/// This client provides methods for all admin endpoints, organized into
/// logical groups:
/// - Configuration deployment (sync, upload, refresh)
/// - Account link status
/// - Operation status polling
/// - Remote-control database browsing (vendors, models, sections, details)
#[derive(Debug, Clone)]
pub struct ControllerClient {
    /// Base URL of the controller (e.g., "http://localhost:8688")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl ControllerClient {
    /// Create a new controller client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the controller admin API (e.g., "http://localhost:8688")
    ///
    /// # Example
    /// ```
    /// use hearth_client::ControllerClient;
    ///
    /// let client = ControllerClient::new("http://localhost:8688");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new controller client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the controller admin API
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use hearth_client::ControllerClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ControllerClient::with_client("http://localhost:8688", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the controller
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no content
    ///
    /// This method checks the status code and returns an error if the request failed.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }

    /// Handle an API response whose body is plain text
    ///
    /// Several legacy admin endpoints answer with a short text instead of a
    /// JSON document; the text is returned verbatim on success.
    async fn handle_text_response(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ControllerClient::new("http://localhost:8688");
        assert_eq!(client.base_url(), "http://localhost:8688");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = ControllerClient::new("http://localhost:8688/");
        assert_eq!(client.base_url(), "http://localhost:8688");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = ControllerClient::with_client("http://localhost:8688", http_client);
        assert_eq!(client.base_url(), "http://localhost:8688");
    }
}
