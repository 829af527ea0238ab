use podtrend_core::TrendSnippet;
use serde::{Deserialize, Serialize};

/// Body of a `POST /search` request.
#[derive(Debug, Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub q: &'a str,
    /// Country code, e.g. `"us"`.
    pub gl: &'a str,
    pub num: u32,
}

/// The subset of a Serper search response the collector reads.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic: Vec<OrganicResult>,
}

/// One organic (non-ad) search result.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl From<OrganicResult> for TrendSnippet {
    fn from(result: OrganicResult) -> Self {
        Self {
            title: result.title.unwrap_or_default(),
            summary: result.snippet.unwrap_or_default(),
            url: result.link.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_snippet_becomes_empty_summary() {
        let result: OrganicResult = serde_json::from_value(serde_json::json!({
            "title": "Viral Quotes of 2025",
            "link": "https://example.com/quotes"
        }))
        .unwrap();

        let snippet = TrendSnippet::from(result);
        assert_eq!(snippet.title, "Viral Quotes of 2025");
        assert_eq!(snippet.summary, "");
        assert_eq!(snippet.url, "https://example.com/quotes");
    }

    #[test]
    fn response_without_organic_array_is_empty() {
        let response: SearchResponse =
            serde_json::from_value(serde_json::json!({ "searchParameters": {} })).unwrap();
        assert!(response.organic.is_empty());
    }

    #[test]
    fn request_serializes_locale_and_count() {
        let request = SearchRequest {
            q: "trending hobbies USA",
            gl: "us",
            num: 5,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "q": "trending hobbies USA", "gl": "us", "num": 5 })
        );
    }
}
