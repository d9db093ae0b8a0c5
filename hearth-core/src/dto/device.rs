//! Remote-control database DTOs

use serde::{Deserialize, Serialize};

/// Answer to the "does this model have several remote sections?" probe
///
/// Multi-section models need a section choice before their details can be
/// shown; single-section models go straight to details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiSectionResponse {
    pub multi_section: bool,
}
