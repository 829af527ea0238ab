//! OAuth2 access tokens for the Sheets API.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use podtrend_core::ServiceAccountKey;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::SheetsError;

pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for the signed assertion. Google caps it at one hour.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Where the client gets its bearer token from.
#[derive(Clone)]
pub enum TokenSource {
    /// Exchange a signed service-account assertion for an access token.
    ServiceAccount(ServiceAccountKey),
    /// A pre-issued access token.
    Static(String),
}

impl std::fmt::Debug for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ServiceAccount(key) => f.debug_tuple("ServiceAccount").field(key).finish(),
            Self::Static(_) => f.debug_tuple("Static").field(&"[redacted]").finish(),
        }
    }
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Sign the RS256 JWT assertion for the bearer grant, issued at `now`
/// (seconds since the Unix epoch).
pub(crate) fn sign_assertion(key: &ServiceAccountKey, now: i64) -> Result<String, SheetsError> {
    let claims = AssertionClaims {
        iss: &key.client_email,
        scope: SPREADSHEETS_SCOPE,
        aud: &key.token_uri,
        iat: now,
        exp: now + ASSERTION_LIFETIME_SECS,
    };
    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
    Ok(encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)?)
}

impl TokenSource {
    /// Obtain a bearer token, exchanging a signed assertion when needed.
    pub(crate) async fn access_token(&self, http: &Client) -> Result<String, SheetsError> {
        let key = match self {
            Self::Static(token) => return Ok(token.clone()),
            Self::ServiceAccount(key) => key,
        };

        let assertion = sign_assertion(key, chrono::Utc::now().timestamp())?;
        let response = http
            .post(&key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SheetsError::TokenExchange {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| SheetsError::Deserialize {
                context: "token response".to_string(),
                source: e,
            })?;

        tracing::debug!(client_email = %key.client_email, "obtained sheets access token");
        Ok(token.access_token)
    }
}
