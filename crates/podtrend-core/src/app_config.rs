use serde::Deserialize;

use crate::market::MarketProfile;

pub const DEFAULT_GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub market: MarketProfile,
    pub serper_api_key: Option<String>,
    pub serper_base_url: String,
    pub search_timeout_secs: u64,
    pub search_delay_ms: u64,
    pub anthropic_api_key: Option<String>,
    pub anthropic_base_url: String,
    pub anthropic_model: String,
    pub anthropic_max_tokens: u32,
    pub analysis_timeout_secs: u64,
    pub spreadsheet_id: Option<String>,
    pub service_account: Option<ServiceAccountKey>,
    pub sheets_base_url: String,
}

impl AppConfig {
    /// Spreadsheet destination, present only when both the sheet id and the
    /// service-account credentials are configured.
    #[must_use]
    pub fn sheets_target(&self) -> Option<SheetsTarget> {
        match (&self.spreadsheet_id, &self.service_account) {
            (Some(id), Some(key)) => Some(SheetsTarget {
                spreadsheet_id: id.clone(),
                service_account: key.clone(),
                base_url: self.sheets_base_url.clone(),
            }),
            _ => None,
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("market", &self.market.name)
            .field(
                "serper_api_key",
                &self.serper_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("serper_base_url", &self.serper_base_url)
            .field("search_timeout_secs", &self.search_timeout_secs)
            .field("search_delay_ms", &self.search_delay_ms)
            .field(
                "anthropic_api_key",
                &self.anthropic_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("anthropic_base_url", &self.anthropic_base_url)
            .field("anthropic_model", &self.anthropic_model)
            .field("anthropic_max_tokens", &self.anthropic_max_tokens)
            .field("analysis_timeout_secs", &self.analysis_timeout_secs)
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("service_account", &self.service_account)
            .field("sheets_base_url", &self.sheets_base_url)
            .finish()
    }
}

/// Google service-account credentials, parsed from the JSON key file the
/// Cloud console issues. Unused fields of that file are ignored.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    /// PKCS#8 PEM-encoded RSA private key.
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_GOOGLE_TOKEN_URI.to_string()
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key", &"[redacted]")
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

/// Where the sheet sink writes.
#[derive(Debug, Clone)]
pub struct SheetsTarget {
    pub spreadsheet_id: String,
    pub service_account: ServiceAccountKey,
    /// Sheets API root, overridable for tests.
    pub base_url: String,
}
