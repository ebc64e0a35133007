//! Watcher configuration
//!
//! Everything the watcher needs to know about the grading server: where the
//! status endpoint lives, how report links are built, how listing pages mark
//! pending rows, and how often to poll.

use std::time::Duration;

use anyhow::Result;
use grader_client::{GraderClient, join_url};

use crate::board::Presenter;
use crate::lang;

/// Default delay between a response and the next status request
pub const DEFAULT_UPDATE_RATE: Duration = Duration::from_millis(300);

/// Watcher configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Grading server base URL (e.g., "http://localhost:8000")
    pub server_url: String,

    /// Status-check endpoint, relative to the server URL
    pub status_path: String,

    /// Report link template; `{}` is replaced by the submission id
    pub report_url: String,

    /// Label of the report link
    pub report_label: String,

    /// Delay between a processed response and the next request
    pub update_rate: Duration,

    /// Class that marks a row as still pending on a listing page
    pub pending_class: String,

    /// Attribute carrying the submission id on a listing page
    pub id_attr: String,

    /// Stop polling when the server answers with an empty list
    pub stop_on_empty: bool,

    /// Verbose diagnostics (raw responses, abort reasons)
    pub dev: bool,

    /// Django session cookie for pages behind a login
    pub session_cookie: Option<String>,

    /// CSRF token sent alongside the session
    pub csrf_token: Option<String>,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(server_url: String) -> Self {
        Self {
            server_url,
            status_path: "/task/submission/status/".to_string(),
            report_url: "/task/report/{}".to_string(),
            report_label: lang::VIEW_REPORT.to_string(),
            update_rate: DEFAULT_UPDATE_RATE,
            pending_class: "pending".to_string(),
            id_attr: "data-id".to_string(),
            stop_on_empty: false,
            dev: false,
            session_cookie: None,
            csrf_token: None,
        }
    }

    /// Switches report links to the staff re-evaluation pages
    pub fn staff(mut self) -> Self {
        self.report_url = "/staff/submission/{}/report/".to_string();
        self.report_label = lang::VIEW_NEW_REPORT.to_string();
        self
    }

    /// Report link for a submission id as reported by the server
    pub fn report_href(&self, id: &str) -> String {
        join_url(&self.server_url, &self.report_url.replacen("{}", id, 1))
    }

    /// Presenter producing report links for this server
    pub fn presenter(&self) -> Presenter {
        Presenter::new(self.report_href("{}"), self.report_label.clone())
    }

    /// Builds an HTTP client carrying the configured session
    pub fn client(&self) -> Result<GraderClient> {
        let client = GraderClient::new(self.server_url.clone())
            .with_session(self.session_cookie.as_deref(), self.csrf_token.as_deref())?;
        Ok(client)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            anyhow::bail!("server_url must start with http:// or https://");
        }

        if self.status_path.is_empty() {
            anyhow::bail!("status_path cannot be empty");
        }

        if !self.report_url.contains("{}") {
            anyhow::bail!("report_url must contain a {{}} placeholder for the submission id");
        }

        if self.update_rate.is_zero() {
            anyhow::bail!("update_rate must be greater than 0");
        }

        if self.pending_class.is_empty() || self.pending_class.contains(char::is_whitespace) {
            anyhow::bail!("pending_class must be a single class name");
        }

        if self.id_attr.is_empty() {
            anyhow::bail!("id_attr cannot be empty");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("http://localhost:8000".to_string())
    }
}
