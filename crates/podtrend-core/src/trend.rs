use serde::{Deserialize, Serialize};

/// A single search-result excerpt taken as evidence that a topic is trending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSnippet {
    pub title: String,
    /// Short excerpt from the result page. Empty when the provider omitted it.
    pub summary: String,
    pub url: String,
}
