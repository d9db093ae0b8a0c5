//! Admin operation DTOs

use serde::{Deserialize, Serialize};

/// Result of a manual configuration upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Human-readable outcome text produced by the controller
    pub message: String,
}
