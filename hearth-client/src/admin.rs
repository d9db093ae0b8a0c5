//! Administrative operations
//!
//! Configuration deployment (online sync, manual upload, refresh) and the
//! account link status.

use hearth_core::domain::link::LinkStatus;
use hearth_core::dto::admin::UploadResponse;

use crate::ControllerClient;
use crate::error::{ClientError, Result};

impl ControllerClient {
    // =============================================================================
    // Configuration Deployment
    // =============================================================================

    /// Trigger an online configuration sync
    ///
    /// The controller pulls its configuration from the linked online
    /// account. Requires the controller to be linked; an unlinked controller
    /// answers with an application error code.
    ///
    /// # Example
    /// ```no_run
    /// # use hearth_client::ControllerClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = ControllerClient::new("http://localhost:8688");
    /// client.sync().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn sync(&self) -> Result<()> {
        let url = format!("{}/api/sync", self.base_url);
        let response = self.client.post(&url).send().await?;

        self.handle_empty_response(response).await
    }

    /// Upload a configuration archive
    ///
    /// # Arguments
    /// * `file_name` - Name of the archive as picked by the operator
    /// * `archive` - The zip content
    ///
    /// # Returns
    /// The controller's human-readable outcome text
    pub async fn upload_config(&self, file_name: &str, archive: Vec<u8>) -> Result<String> {
        let url = format!("{}/api/config/upload", self.base_url);
        let response = self
            .client
            .post(&url)
            .query(&[("name", file_name)])
            .body(archive)
            .send()
            .await?;

        let result: UploadResponse = self.handle_response(response).await?;
        Ok(result.message)
    }

    /// Reload the controller configuration and clear its caches
    ///
    /// The controller answers with the literal text `OK`; any other body is
    /// carried back as the failure reason.
    pub async fn refresh(&self) -> Result<()> {
        let url = format!("{}/api/refresh", self.base_url);
        let response = self.client.post(&url).send().await?;

        let body = self.handle_text_response(response).await?;

        if body.trim() == "OK" {
            Ok(())
        } else {
            Err(ClientError::InternalError(format!(
                "failed to reload configuration and clear cache: {}",
                body.trim()
            )))
        }
    }

    // =============================================================================
    // Account Link
    // =============================================================================

    /// Fetch and decode the account link status
    pub async fn linked_status(&self) -> Result<LinkStatus> {
        let url = format!("{}/api/link", self.base_url);
        let response = self.client.get(&url).send().await?;

        let body = self.handle_text_response(response).await?;
        Ok(LinkStatus::parse(&body))
    }
}
