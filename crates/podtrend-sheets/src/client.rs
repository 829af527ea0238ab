//! HTTP client for the Sheets `values:append` endpoint.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Client;
use serde::Serialize;
use tokio::sync::OnceCell;

use crate::auth::TokenSource;
use crate::error::SheetsError;

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Characters escaped when an A1 range is placed in the URL path. `!` and
/// `:` stay literal so `Sheet!A:M` reads as the API documents it.
const RANGE_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Serialize)]
struct ValueRange<'a> {
    values: &'a [Vec<serde_json::Value>],
}

/// Client bound to one spreadsheet.
///
/// The access token is fetched on first use and reused for the client's
/// lifetime.
pub struct SheetsClient {
    http: Client,
    base_url: String,
    spreadsheet_id: String,
    auth: TokenSource,
    token: OnceCell<String>,
}

impl SheetsClient {
    /// Creates a client for the production Sheets API.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(spreadsheet_id: &str, auth: TokenSource) -> Result<Self, SheetsError> {
        Self::with_base_url(spreadsheet_id, auth, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_base_url(
        spreadsheet_id: &str,
        auth: TokenSource,
        base_url: &str,
    ) -> Result<Self, SheetsError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            spreadsheet_id: spreadsheet_id.to_owned(),
            auth,
            token: OnceCell::new(),
        })
    }

    fn append_url(&self, range: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}:append",
            self.base_url,
            utf8_percent_encode(&self.spreadsheet_id, RANGE_ENCODE_SET),
            utf8_percent_encode(range, RANGE_ENCODE_SET),
        )
    }

    /// Appends `rows` after the last row of `range`, storing values as given
    /// (`valueInputOption=RAW`).
    ///
    /// # Errors
    ///
    /// - [`SheetsError::Signing`] or [`SheetsError::TokenExchange`] if no
    ///   access token can be obtained.
    /// - [`SheetsError::Http`] on network failure.
    /// - [`SheetsError::Api`] on a non-2xx status.
    pub async fn append_rows(
        &self,
        range: &str,
        rows: &[Vec<serde_json::Value>],
    ) -> Result<(), SheetsError> {
        let token = self
            .token
            .get_or_try_init(|| self.auth.access_token(&self.http))
            .await?;

        let response = self
            .http
            .post(self.append_url(range))
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(token)
            .json(&ValueRange { values: rows })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::Api {
                status: status.as_u16(),
                range: range.to_string(),
                body,
            });
        }

        tracing::debug!(range = %range, rows = rows.len(), "appended rows");
        Ok(())
    }
}
