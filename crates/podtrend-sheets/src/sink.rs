//! Append-only persistence of one run's opportunities and raw analysis.

use chrono::NaiveDateTime;
use podtrend_core::{OpportunityRecord, SheetsTarget, INITIAL_STATUS};
use serde_json::Value;

use crate::auth::TokenSource;
use crate::client::SheetsClient;
use crate::error::SheetsError;

/// Thirteen columns: timestamp through notes.
pub const OPPORTUNITIES_RANGE: &str = "Opportunities!A:M";

/// Two columns: timestamp and the raw model reply.
pub const ANALYSIS_RANGE: &str = "Analysis!A:B";

/// Local-time format shared by every row of a run.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Why a run wrote nothing to the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No spreadsheet id or service account was configured.
    NotConfigured,
    /// Extraction produced no opportunity records.
    NoRecords,
}

/// Result of a single append against one sheet range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended { rows: usize },
    Failed { reason: String },
}

/// What happened when a run was persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistReport {
    /// Nothing was written and no request was issued.
    Skipped(SkipReason),
    /// Both appends were attempted; each reports on its own.
    Attempted {
        opportunities: AppendOutcome,
        analysis: AppendOutcome,
    },
}

/// Render one opportunity as a sheet row, filling defaults for missing fields.
#[must_use]
pub fn opportunity_row(timestamp: &str, record: &OpportunityRecord) -> Vec<Value> {
    let text = |field: &Option<String>| Value::String(field.clone().unwrap_or_default());

    vec![
        Value::String(timestamp.to_string()),
        text(&record.niche),
        text(&record.audience),
        text(&record.design_theme),
        text(&record.products),
        Value::from(record.demand_or_default()),
        Value::String(record.competition_or_default().to_string()),
        text(&record.design_examples),
        text(&record.why_it_works),
        text(&record.ad_angle),
        text(&record.est_revenue),
        Value::String(INITIAL_STATUS.to_string()),
        Value::String(String::new()),
    ]
}

/// Render the audit row holding the raw model reply.
#[must_use]
pub fn analysis_row(timestamp: &str, raw_analysis: &str) -> Vec<Value> {
    vec![
        Value::String(timestamp.to_string()),
        Value::String(raw_analysis.to_string()),
    ]
}

/// Writes a run's records and raw analysis to the configured spreadsheet.
pub struct SheetsSink {
    client: SheetsClient,
}

impl SheetsSink {
    /// Wrap an already-built client.
    #[must_use]
    pub fn new(client: SheetsClient) -> Self {
        Self { client }
    }

    /// Build a sink that authenticates with the target's service account.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the HTTP client cannot be built.
    pub fn from_target(target: &SheetsTarget) -> Result<Self, SheetsError> {
        let client = SheetsClient::with_base_url(
            &target.spreadsheet_id,
            TokenSource::ServiceAccount(target.service_account.clone()),
            &target.base_url,
        )?;
        Ok(Self::new(client))
    }

    /// Append the run's opportunities and its raw analysis.
    ///
    /// Never fails: an empty record list skips both writes, and each append
    /// error is logged and reported in the returned [`PersistReport`].
    pub async fn persist(
        &self,
        run_at: NaiveDateTime,
        records: &[OpportunityRecord],
        raw_analysis: &str,
    ) -> PersistReport {
        if records.is_empty() {
            tracing::info!("no opportunities to save");
            return PersistReport::Skipped(SkipReason::NoRecords);
        }

        let timestamp = run_at.format(TIMESTAMP_FORMAT).to_string();

        let rows: Vec<Vec<Value>> = records
            .iter()
            .map(|record| opportunity_row(&timestamp, record))
            .collect();
        let opportunities = self.append(OPPORTUNITIES_RANGE, &rows).await;

        let audit = [analysis_row(&timestamp, raw_analysis)];
        let analysis = self.append(ANALYSIS_RANGE, &audit).await;

        PersistReport::Attempted {
            opportunities,
            analysis,
        }
    }

    async fn append(&self, range: &str, rows: &[Vec<Value>]) -> AppendOutcome {
        match self.client.append_rows(range, rows).await {
            Ok(()) => AppendOutcome::Appended { rows: rows.len() },
            Err(e) => {
                tracing::warn!(range = %range, error = %e, "failed to append rows");
                AppendOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Persist through `sink` when one is configured.
pub async fn persist_run(
    sink: Option<&SheetsSink>,
    run_at: NaiveDateTime,
    records: &[OpportunityRecord],
    raw_analysis: &str,
) -> PersistReport {
    match sink {
        Some(sink) => sink.persist(run_at, records, raw_analysis).await,
        None => {
            tracing::info!("spreadsheet not configured; skipping save");
            PersistReport::Skipped(SkipReason::NotConfigured)
        }
    }
}
