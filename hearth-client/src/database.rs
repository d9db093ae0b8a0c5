//! Remote-control database endpoints
//!
//! Cascading queries over the vendor → model → remote-section hierarchy.
//! Models are listed per vendor; a model with several remote sections needs
//! a section choice before its details can be fetched.

use hearth_core::domain::device::{Model, RemoteDetails, RemoteSection, Vendor};
use hearth_core::dto::device::MultiSectionResponse;

use crate::ControllerClient;
use crate::error::Result;

impl ControllerClient {
    /// List all vendors in the remote-control database
    pub async fn list_vendors(&self) -> Result<Vec<Vendor>> {
        let url = format!("{}/api/vendors", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// List the models of a vendor
    ///
    /// # Arguments
    /// * `vendor_id` - The vendor id
    pub async fn list_models(&self, vendor_id: i64) -> Result<Vec<Model>> {
        let url = format!("{}/api/vendors/{}/models", self.base_url, vendor_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Check whether a model's configuration holds several remote sections
    pub async fn is_multi_section(&self, model_id: i64) -> Result<bool> {
        let url = format!("{}/api/models/{}/multisection", self.base_url, model_id);
        let response = self.client.get(&url).send().await?;

        let result: MultiSectionResponse = self.handle_response(response).await?;
        Ok(result.multi_section)
    }

    /// List the remote sections of a model
    pub async fn list_remote_sections(&self, model_id: i64) -> Result<Vec<RemoteSection>> {
        let url = format!("{}/api/models/{}/sections", self.base_url, model_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Fetch the option table and key codes of a single-section model
    pub async fn remote_details_by_model(&self, model_id: i64) -> Result<RemoteDetails> {
        let url = format!("{}/api/models/{}/details", self.base_url, model_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Fetch the option table and key codes of one remote section
    pub async fn remote_details_by_section(&self, section_id: i64) -> Result<RemoteDetails> {
        let url = format!("{}/api/sections/{}/details", self.base_url, section_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}
