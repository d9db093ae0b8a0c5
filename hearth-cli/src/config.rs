//! Configuration module
//!
//! Handles CLI configuration including the controller URL and other settings.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the controller's admin API
    pub controller_url: String,
}
