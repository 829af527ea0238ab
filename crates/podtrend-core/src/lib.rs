//! Shared configuration and domain types for the podtrend pipeline.

pub mod app_config;
pub mod config;
pub mod market;
pub mod opportunity;
pub mod trend;

pub use app_config::{AppConfig, ServiceAccountKey, SheetsTarget};
pub use config::{load_app_config, load_app_config_from_env};
pub use market::MarketProfile;
pub use opportunity::{
    OpportunityRecord, DEFAULT_COMPETITION, DEFAULT_DEMAND_SCORE, INITIAL_STATUS,
};
pub use trend::TrendSnippet;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
