//! HTTP client for the Serper search API.

use std::time::Duration;

use reqwest::Client;

use crate::error::SearchError;
use crate::types::{OrganicResult, SearchRequest, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://google.serper.dev";

/// Client for Serper's `POST /search` endpoint.
///
/// Use [`SerperClient::new`] for production or [`SerperClient::with_base_url`]
/// to point at a mock server in tests.
pub struct SerperClient {
    client: Client,
    api_key: String,
    search_url: String,
}

impl SerperClient {
    /// Creates a new client pointed at the production Serper API.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("podtrend/0.1 (trend-research)")
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            search_url: format!("{}/search", base_url.trim_end_matches('/')),
        })
    }

    /// Runs one search and returns its organic results in ranking order.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] on network failure or non-2xx HTTP status.
    /// - [`SearchError::Deserialize`] if the body is not the expected JSON.
    pub async fn search(
        &self,
        query: &str,
        locale: &str,
        num: u32,
    ) -> Result<Vec<OrganicResult>, SearchError> {
        let request = SearchRequest {
            q: query,
            gl: locale,
            num,
        };

        let response = self
            .client
            .post(&self.search_url)
            .header("X-API-KEY", &self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        Ok(parsed.organic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_strips_trailing_slash() {
        let client = SerperClient::with_base_url("key", 10, "http://localhost:9999/")
            .expect("client construction should not fail");
        assert_eq!(client.search_url, "http://localhost:9999/search");
    }

    #[test]
    fn production_client_targets_serper() {
        let client = SerperClient::new("key", 10).expect("client construction should not fail");
        assert_eq!(client.search_url, "https://google.serper.dev/search");
    }
}
