//! Trend collection loop.

use std::time::Duration;

use podtrend_core::{AppConfig, MarketProfile, TrendSnippet};

use crate::client::SerperClient;

/// Results requested from the provider per query.
pub const RESULTS_PER_QUERY: u32 = 5;

/// Leading organic results kept from each response.
pub const RESULTS_KEPT_PER_QUERY: usize = 3;

/// Result of one collection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectOutcome {
    /// No search-provider key is configured; no request was issued.
    Unconfigured,
    /// Every query was attempted. `failed_queries` counts the ones that
    /// errored and contributed nothing.
    Collected {
        snippets: Vec<TrendSnippet>,
        failed_queries: usize,
    },
}

impl CollectOutcome {
    /// Snippets across all queries, in query order. Empty when unconfigured.
    #[must_use]
    pub fn snippets(&self) -> &[TrendSnippet] {
        match self {
            Self::Unconfigured => &[],
            Self::Collected { snippets, .. } => snippets,
        }
    }

    #[must_use]
    pub fn into_snippets(self) -> Vec<TrendSnippet> {
        match self {
            Self::Unconfigured => Vec::new(),
            Self::Collected { snippets, .. } => snippets,
        }
    }
}

/// Collect trend snippets for the configured market.
///
/// Never fails: a missing key yields [`CollectOutcome::Unconfigured`], and
/// a client that cannot be built counts every query as failed.
pub async fn collect_trends(config: &AppConfig) -> CollectOutcome {
    let Some(api_key) = config.serper_api_key.as_deref() else {
        tracing::warn!("SERPER_API_KEY is not set; skipping trend collection");
        return CollectOutcome::Unconfigured;
    };

    let client = match SerperClient::with_base_url(
        api_key,
        config.search_timeout_secs,
        &config.serper_base_url,
    ) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "failed to build search client");
            return CollectOutcome::Collected {
                snippets: Vec::new(),
                failed_queries: config.market.queries.len(),
            };
        }
    };

    collect_from(
        &client,
        &config.market,
        Duration::from_millis(config.search_delay_ms),
    )
    .await
}

/// Run every market query against `client`, sleeping `delay` between
/// successive queries.
pub async fn collect_from(
    client: &SerperClient,
    market: &MarketProfile,
    delay: Duration,
) -> CollectOutcome {
    let mut snippets = Vec::new();
    let mut failed_queries = 0usize;

    for (i, query) in market.queries.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match client
            .search(query, &market.locale, RESULTS_PER_QUERY)
            .await
        {
            Ok(results) => {
                let before = snippets.len();
                snippets.extend(
                    results
                        .into_iter()
                        .take(RESULTS_KEPT_PER_QUERY)
                        .map(TrendSnippet::from),
                );
                tracing::debug!(
                    query = %query,
                    count = snippets.len() - before,
                    "collected trend snippets"
                );
            }
            Err(e) => {
                failed_queries += 1;
                tracing::warn!(query = %query, error = %e, "trend search failed");
            }
        }
    }

    tracing::info!(
        total = snippets.len(),
        failed_queries,
        "trend collection finished"
    );

    CollectOutcome::Collected {
        snippets,
        failed_queries,
    }
}
