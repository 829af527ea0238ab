use crate::app_config::{AppConfig, ServiceAccountKey};
use crate::market::MarketProfile;
use crate::ConfigError;

pub const DEFAULT_SERPER_BASE_URL: &str = "https://google.serper.dev";
pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every credential is optional: a missing key disables the feature that
/// needs it instead of failing the run.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        optional(var).unwrap_or_else(|| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("PODTREND_LOG_LEVEL", "info");

    let serper_api_key = optional("SERPER_API_KEY");
    let serper_base_url = or_default("SERPER_BASE_URL", DEFAULT_SERPER_BASE_URL);
    let search_timeout_secs = parse_u64("PODTREND_SEARCH_TIMEOUT_SECS", "10")?;
    let search_delay_ms = parse_u64("PODTREND_SEARCH_DELAY_MS", "500")?;

    let anthropic_api_key = optional("ANTHROPIC_API_KEY");
    let anthropic_base_url = or_default("ANTHROPIC_BASE_URL", DEFAULT_ANTHROPIC_BASE_URL);
    let anthropic_model = or_default("PODTREND_ANTHROPIC_MODEL", DEFAULT_ANTHROPIC_MODEL);
    let anthropic_max_tokens = parse_u32("PODTREND_ANTHROPIC_MAX_TOKENS", "4000")?;
    let analysis_timeout_secs = parse_u64("PODTREND_ANALYSIS_TIMEOUT_SECS", "120")?;

    let spreadsheet_id = optional("PRINTIFY_SHEET_ID");
    let service_account = optional("GOOGLE_SERVICE_ACCOUNT")
        .map(|raw| parse_service_account(&raw))
        .transpose()?;
    let sheets_base_url = or_default("SHEETS_BASE_URL", DEFAULT_SHEETS_BASE_URL);

    Ok(AppConfig {
        log_level,
        market: MarketProfile::usa(),
        serper_api_key,
        serper_base_url,
        search_timeout_secs,
        search_delay_ms,
        anthropic_api_key,
        anthropic_base_url,
        anthropic_model,
        anthropic_max_tokens,
        analysis_timeout_secs,
        spreadsheet_id,
        service_account,
        sheets_base_url,
    })
}

/// Parse the service-account JSON key held in `GOOGLE_SERVICE_ACCOUNT`.
fn parse_service_account(raw: &str) -> Result<ServiceAccountKey, ConfigError> {
    serde_json::from_str(raw).map_err(|e| ConfigError::InvalidEnvVar {
        var: "GOOGLE_SERVICE_ACCOUNT".to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
