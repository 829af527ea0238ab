//! HTTP client for the Anthropic Messages API.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;

use crate::error::AnalysisError;
use crate::types::{MessagesRequest, MessagesResponse};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    http: Client,
    api_key: String,
    messages_url: String,
}

impl AnthropicClient {
    /// Creates a client for the production API.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, AnalysisError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, AnalysisError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.to_owned(),
            messages_url: format!("{}/v1/messages", base_url.trim_end_matches('/')),
        })
    }

    fn headers(&self) -> Result<HeaderMap, AnalysisError> {
        let mut headers = HeaderMap::new();
        let key =
            HeaderValue::from_str(&self.api_key).map_err(|_| AnalysisError::InvalidApiKey)?;
        headers.insert("x-api-key", key);
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Sends a single-turn prompt and returns the reply text.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::Http`] on network failure.
    /// - [`AnalysisError::Api`] on a non-2xx status.
    /// - [`AnalysisError::Deserialize`] if the body is not a messages response.
    /// - [`AnalysisError::EmptyReply`] if the reply has no text content.
    pub async fn complete(
        &self,
        model: &str,
        max_tokens: u32,
        prompt: &str,
    ) -> Result<String, AnalysisError> {
        let request = MessagesRequest::single_turn(model, max_tokens, prompt);

        tracing::debug!(model = %model, max_tokens, "anthropic messages request");

        let response = self
            .http
            .post(&self.messages_url)
            .headers(self.headers()?)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse =
            serde_json::from_str(&body).map_err(|e| AnalysisError::Deserialize {
                context: "messages response".to_string(),
                source: e,
            })?;

        let text = parsed.text();
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyReply);
        }
        Ok(text)
    }
}
