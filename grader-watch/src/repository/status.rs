//! Status repository
//!
//! Fetches the current status of tracked submissions.

use anyhow::{Context, Result};
use async_trait::async_trait;
use grader_client::GraderClient;
use grader_core::domain::submission::SubmissionId;
use grader_core::dto::status::StatusRecord;

/// Source of submission status records
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches one status record per known submission, in server order
    ///
    /// # Arguments
    /// * `ids` - Declared ids of the submissions still being tracked
    async fn check_status(&self, ids: &[SubmissionId]) -> Result<Vec<StatusRecord>>;
}

/// HTTP implementation of StatusRepository
pub struct HttpStatusRepository {
    client: GraderClient,
    status_path: String,
}

impl HttpStatusRepository {
    /// Creates a new HTTP status repository
    ///
    /// # Arguments
    /// * `client` - Client for the grading server
    /// * `status_path` - Status-check endpoint (e.g., "/task/submission/status/")
    pub fn new(client: GraderClient, status_path: String) -> Self {
        Self {
            client,
            status_path,
        }
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn check_status(&self, ids: &[SubmissionId]) -> Result<Vec<StatusRecord>> {
        self.client
            .check_status(&self.status_path, ids)
            .await
            .context("Failed to check submission status")
    }
}
