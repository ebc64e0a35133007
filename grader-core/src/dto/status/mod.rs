//! Status-check DTOs

use serde::{Deserialize, Serialize};

use crate::domain::submission::SubmissionId;

/// Body of a status-check request: `{"ids": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRequest {
    pub ids: Vec<String>,
}

impl StatusRequest {
    pub fn new<'a>(ids: impl IntoIterator<Item = &'a SubmissionId>) -> Self {
        Self {
            ids: ids.into_iter().map(|id| id.as_str().to_string()).collect(),
        }
    }
}

/// One submission's status as reported by the server
///
/// Which optional fields are present depends on `state`:
/// queued records carry `position`, running records carry `job_state` and
/// `progress`, checked records carry `status`, `message`, `score` and
/// `status_color`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub id: String,
    #[serde(default)]
    pub state: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_color: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}
