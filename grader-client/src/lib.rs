//! Grader HTTP Client
//!
//! A small, typed client for the grading server's submission status endpoint
//! and its HTML listing pages.
//!
//! # Example
//!
//! ```no_run
//! use grader_client::GraderClient;
//! use grader_core::domain::submission::SubmissionId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GraderClient::new("http://localhost:8000");
//!     let ids = vec![SubmissionId::parse("5f0c2a:1abc:sig")?];
//!
//!     for record in client.check_status("/task/submission/status/", &ids).await? {
//!         println!("{} -> {:?}", record.id, record.state);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod pages;
mod status;

pub use error::{ClientError, Result};

use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// Header Django reads the CSRF token from
const CSRF_HEADER: &str = "x-csrftoken";

/// HTTP client for the grading server
#[derive(Debug, Clone)]
pub struct GraderClient {
    /// Base URL of the server (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Headers attached to every request (session cookie, CSRF token)
    headers: HeaderMap,
}

impl GraderClient {
    /// Create a new client
    ///
    /// # Example
    /// ```
    /// use grader_client::GraderClient;
    ///
    /// let client = GraderClient::new("http://localhost:8000/");
    /// assert_eq!(client.base_url(), "http://localhost:8000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            headers: HeaderMap::new(),
        }
    }

    /// Attach a login session and CSRF token to every request
    ///
    /// Listing pages of the staff area require a session; the status
    /// endpoint does not, but accepts both.
    pub fn with_session(
        mut self,
        session_cookie: Option<&str>,
        csrf_token: Option<&str>,
    ) -> Result<Self> {
        let mut cookies = Vec::new();
        if let Some(session) = session_cookie {
            cookies.push(format!("sessionid={}", session));
        }
        if let Some(token) = csrf_token {
            cookies.push(format!("csrftoken={}", token));
            self.headers.insert(CSRF_HEADER, header_value(token)?);
        }
        if !cookies.is_empty() {
            self.headers
                .insert(COOKIE, header_value(&cookies.join("; "))?);
        }
        Ok(self)
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a server-relative path, leaving absolute URLs untouched
    pub fn url_for(&self, path_or_url: &str) -> String {
        join_url(&self.base_url, path_or_url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .headers(self.headers.clone())
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize a JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = Self::check_status_code(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Check the status code and return the body as text
    async fn handle_text_response(&self, response: reqwest::Response) -> Result<String> {
        let response = Self::check_status_code(response).await?;

        response
            .text()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to read response body: {}", e)))
    }

    async fn check_status_code(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response)
    }
}

/// Joins a server-relative path to `base_url`; absolute URLs pass through
pub fn join_url(base_url: &str, path_or_url: &str) -> String {
    if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
        return path_or_url.to_string();
    }
    let base = base_url.trim_end_matches('/');
    if path_or_url.starts_with('/') {
        format!("{}{}", base, path_or_url)
    } else {
        format!("{}/{}", base, path_or_url)
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ClientError::InvalidRequest(format!("Invalid header value: {}", e)))
}
