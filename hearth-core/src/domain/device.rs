//! Remote-control database entities
//!
//! The vendor → model → remote-section hierarchy of an infrared
//! remote-control database. A model's configuration file can contain more
//! than one remote section; each section carries the option table and key
//! codes of one physical remote.

use serde::{Deserialize, Serialize};

/// A remote-control vendor, the top of the hierarchy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
}

/// A remote-control model belonging to a vendor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub id: i64,
    pub vendor_id: i64,
    pub name: String,
    pub file_name: String,
    #[serde(default)]
    pub comment: String,
}

impl Model {
    /// Display name for listings.
    ///
    /// Model names scraped from configuration files can be blank or a `?`
    /// placeholder; the file name is the fallback.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() || self.name == "?" {
            &self.file_name
        } else {
            &self.name
        }
    }
}

/// One remote configuration section within a model's configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSection {
    pub id: i64,
    pub model_id: i64,
    pub name: String,
    /// Section stores raw timing data instead of decoded key codes
    pub raw: bool,
}

/// A driver option line of a remote section (name/value pair)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteOption {
    pub name: String,
    pub value: String,
}

/// One key code of a remote section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteCode {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub comment: String,
}

/// The option table and key codes shown for a model or section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteDetails {
    pub options: Vec<RemoteOption>,
    pub codes: Vec<RemoteCode>,
}
