//! Opportunity analysis orchestration.

use podtrend_core::{AppConfig, TrendSnippet};

use crate::client::AnthropicClient;
use crate::error::AnalysisError;
use crate::prompt::build_prompt;

/// Text reported in place of an analysis when the model call fails.
pub const ANALYSIS_FAILED: &str = "Analysis failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// The model's raw reply.
    Completed(String),
    /// The call failed; `reason` is the logged error.
    Failed { reason: String },
}

impl AnalysisOutcome {
    /// The reply text, or [`ANALYSIS_FAILED`] when the call failed.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Completed(text) => text,
            Self::Failed { .. } => ANALYSIS_FAILED,
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Ask the model for print-on-demand opportunities based on `snippets`.
///
/// Never fails: a missing key or any call error is logged and returned as
/// [`AnalysisOutcome::Failed`].
pub async fn analyze_opportunities(
    config: &AppConfig,
    snippets: &[TrendSnippet],
) -> AnalysisOutcome {
    match request_analysis(config, snippets).await {
        Ok(text) => {
            tracing::info!(chars = text.len(), "received opportunity analysis");
            AnalysisOutcome::Completed(text)
        }
        Err(e) => {
            tracing::warn!(error = %e, "opportunity analysis failed");
            AnalysisOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

async fn request_analysis(
    config: &AppConfig,
    snippets: &[TrendSnippet],
) -> Result<String, AnalysisError> {
    let api_key = config
        .anthropic_api_key
        .as_deref()
        .ok_or(AnalysisError::MissingApiKey)?;

    let client = AnthropicClient::with_base_url(
        api_key,
        config.analysis_timeout_secs,
        &config.anthropic_base_url,
    )?;

    let prompt = build_prompt(&config.market, snippets);
    client
        .complete(
            &config.anthropic_model,
            config.anthropic_max_tokens,
            &prompt,
        )
        .await
}
