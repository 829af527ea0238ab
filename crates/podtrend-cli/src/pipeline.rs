//! One pass of the trend-finding pipeline: collect, analyze, extract, persist.

use podtrend_analysis::{analyze_opportunities, extract_opportunities};
use podtrend_core::{AppConfig, OpportunityRecord};
use podtrend_search::collect_trends;
use podtrend_sheets::{persist_run, PersistReport, SheetsSink};

use crate::report;

/// How a run ended.
#[derive(Debug)]
pub(crate) enum RunOutcome {
    /// No trends were collected; nothing was analyzed or saved.
    NoTrends,
    /// The analysis yielded no records; nothing was saved.
    NoRecords { analysis: String },
    Completed {
        records: Vec<OpportunityRecord>,
        persisted: PersistReport,
    },
}

/// Build the sheet sink when a spreadsheet and credentials are configured.
fn build_sink(config: &AppConfig) -> Option<SheetsSink> {
    let Some(target) = config.sheets_target() else {
        if config.spreadsheet_id.is_some() {
            tracing::warn!("PRINTIFY_SHEET_ID is set but GOOGLE_SERVICE_ACCOUNT is not");
        }
        return None;
    };

    match SheetsSink::from_target(&target) {
        Ok(sink) => Some(sink),
        Err(e) => {
            tracing::warn!(error = %e, "failed to build sheets client");
            None
        }
    }
}

/// Run the whole pipeline once, printing progress to stdout.
///
/// External call failures are logged and folded into the returned
/// [`RunOutcome`]; they never abort the run.
pub(crate) async fn run_pipeline(config: &AppConfig) -> RunOutcome {
    let run_at = chrono::Local::now().naive_local();
    println!("{}", report::render_header(&config.market.name, run_at));

    println!("finding trending topics in {}...", config.market.name);
    let collected = collect_trends(config).await;
    let trends = collected.snippets();
    println!("  found {} trending topics", trends.len());

    if trends.is_empty() {
        println!("\nno trends found; check SERPER_API_KEY");
        return RunOutcome::NoTrends;
    }

    println!("\nanalyzing opportunities with {}...", config.anthropic_model);
    let analysis = analyze_opportunities(config, trends).await;

    println!("\nextracting opportunities...");
    let records = extract_opportunities(analysis.text());
    println!("  extracted {} niche opportunities", records.len());

    if records.is_empty() {
        println!("\n{}", report::render_raw_excerpt(analysis.text()));
        println!("\n{}", report::render_next_steps());
        return RunOutcome::NoRecords {
            analysis: analysis.text().to_string(),
        };
    }

    println!("\nsaving to Google Sheets...");
    let sink = build_sink(config);
    let persisted = persist_run(sink.as_ref(), run_at, &records, analysis.text()).await;
    println!("{}", report::render_persist_report(&persisted));

    println!("\n{}", report::render_top_opportunities(&records));
    println!("\n{}", report::render_next_steps());

    RunOutcome::Completed { records, persisted }
}
