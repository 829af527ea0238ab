use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service-account signing error: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("token exchange failed ({status}): {body}")]
    TokenExchange { status: u16, body: String },

    #[error("Sheets API error ({status}) for range {range}: {body}")]
    Api {
        status: u16,
        range: String,
        body: String,
    },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
