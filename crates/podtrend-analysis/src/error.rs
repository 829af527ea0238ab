use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ANTHROPIC_API_KEY is not set")]
    MissingApiKey,

    #[error("ANTHROPIC_API_KEY is not a valid header value")]
    InvalidApiKey,

    #[error("Anthropic API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("model reply contained no text")]
    EmptyReply,
}
