//! Trend collection from the Serper web-search API.
//!
//! Issues the market profile's fixed search queries one at a time and
//! flattens the top organic results into [`podtrend_core::TrendSnippet`]s.
//! Individual query failures are logged and skipped.

pub mod client;
pub mod collector;
pub mod error;
pub mod types;

pub use client::SerperClient;
pub use collector::{
    collect_from, collect_trends, CollectOutcome, RESULTS_KEPT_PER_QUERY, RESULTS_PER_QUERY,
};
pub use error::SearchError;
pub use types::{OrganicResult, SearchResponse};
