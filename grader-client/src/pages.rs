//! HTML listing pages

use reqwest::Method;

use crate::GraderClient;
use crate::error::Result;

impl GraderClient {
    /// Fetch a page as text
    ///
    /// # Arguments
    /// * `path_or_url` - Page path relative to the base URL, or an absolute URL
    pub async fn fetch_page(&self, path_or_url: &str) -> Result<String> {
        let url = self.url_for(path_or_url);
        tracing::debug!("Fetching page {}", url);

        let response = self.request(Method::GET, &url).send().await?;

        self.handle_text_response(response).await
    }
}
