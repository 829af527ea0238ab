//! Google Sheets persistence for extracted opportunities.
//!
//! Appends one row per opportunity to the `Opportunities` range and the raw
//! model reply to the `Analysis` range. Authenticates with a service-account
//! key through the OAuth2 JWT bearer grant.

pub mod auth;
pub mod client;
pub mod error;
pub mod sink;

pub use auth::TokenSource;
pub use client::SheetsClient;
pub use error::SheetsError;
pub use sink::{
    analysis_row, opportunity_row, persist_run, AppendOutcome, PersistReport, SheetsSink,
    SkipReason, ANALYSIS_RANGE, OPPORTUNITIES_RANGE, TIMESTAMP_FORMAT,
};
