//! Status endpoint access

use async_trait::async_trait;
use hearth_core::domain::progress::StatusReport;
use uuid::Uuid;

use crate::ControllerClient;
use crate::error::Result;
use crate::progress::StatusSource;

impl ControllerClient {
    /// Fetch the current status report for a long-running operation
    ///
    /// The `r` query parameter carries a random nonce so intermediaries
    /// between the console and the controller never serve a cached report.
    ///
    /// # Arguments
    /// * `topic` - Which operation's status is being observed (e.g., "commit")
    ///
    /// # Returns
    /// The decoded report, uninterpreted
    pub async fn progress_status(&self, topic: &str) -> Result<StatusReport> {
        let url = format!("{}/api/status", self.base_url);
        let nonce = Uuid::new_v4().simple().to_string();

        let response = self
            .client
            .get(&url)
            .query(&[("type", topic), ("r", nonce.as_str())])
            .send()
            .await?;

        self.handle_response(response).await
    }
}

#[async_trait]
impl StatusSource for ControllerClient {
    async fn fetch_status(&self, topic: &str) -> Result<StatusReport> {
        self.progress_status(topic).await
    }
}
