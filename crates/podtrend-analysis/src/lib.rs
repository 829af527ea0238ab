//! Opportunity analysis for podtrend.
//!
//! Renders collected trend snippets into a fixed consultant prompt, sends it
//! to the Anthropic Messages API, and parses the free-text reply into
//! [`podtrend_core::OpportunityRecord`]s with label-based text splitting.

pub mod analyzer;
pub mod client;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod types;

pub use analyzer::{analyze_opportunities, AnalysisOutcome, ANALYSIS_FAILED};
pub use client::AnthropicClient;
pub use error::AnalysisError;
pub use extract::{extract_opportunities, parse_demand_score};
pub use prompt::{build_prompt, format_trends, MAX_PROMPT_TRENDS};
