//! Submission status endpoint

use grader_core::domain::submission::SubmissionId;
use grader_core::dto::status::{StatusRecord, StatusRequest};
use reqwest::Method;

use crate::GraderClient;
use crate::error::Result;

impl GraderClient {
    /// Ask the server for the current status of the given submissions
    ///
    /// # Arguments
    /// * `path` - Status endpoint, relative to the base URL or absolute
    /// * `ids` - Declared submission ids, sent as `{"ids": [...]}`
    ///
    /// # Returns
    /// The records in the order the server produced them; possibly empty
    pub async fn check_status(&self, path: &str, ids: &[SubmissionId]) -> Result<Vec<StatusRecord>> {
        let url = self.url_for(path);
        let body = StatusRequest::new(ids);

        tracing::debug!("Checking status of {} submission(s) at {}", ids.len(), url);

        let response = self.request(Method::POST, &url).json(&body).send().await?;

        self.handle_response(response).await
    }
}
