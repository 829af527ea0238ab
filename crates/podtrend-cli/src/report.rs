//! Console rendering for a pipeline run.

use chrono::NaiveDateTime;
use podtrend_core::OpportunityRecord;
use podtrend_sheets::{AppendOutcome, PersistReport, SkipReason, TIMESTAMP_FORMAT};

/// How many opportunities the summary shows.
pub(crate) const TOP_OPPORTUNITIES: usize = 3;

/// Characters of raw analysis shown when nothing could be extracted.
pub(crate) const RAW_EXCERPT_CHARS: usize = 500;

const RULE_WIDTH: usize = 70;

const NEXT_STEPS: &[&str] = &[
    "Review opportunities in Google Sheets",
    "Pick 1-2 niches to test",
    "Create 3-5 designs per niche",
    "Set up products in Printify",
    "Run Facebook ads ($10-20/day per niche)",
];

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub(crate) fn render_header(market: &str, run_at: NaiveDateTime) -> String {
    format!(
        "{rule}\n{market} PRINT-ON-DEMAND TREND FINDER\n{rule}\nrun at {}\n",
        run_at.format(TIMESTAMP_FORMAT),
        rule = rule(),
    )
}

/// Summary of the first [`TOP_OPPORTUNITIES`] records, in extraction order.
pub(crate) fn render_top_opportunities(records: &[OpportunityRecord]) -> String {
    let mut out = format!("{rule}\nTOP {TOP_OPPORTUNITIES} OPPORTUNITIES\n{rule}\n", rule = rule());

    for (i, record) in records.iter().take(TOP_OPPORTUNITIES).enumerate() {
        let or_na = |field: &Option<String>| field.clone().unwrap_or_else(|| "N/A".to_string());
        out.push_str(&format!(
            "\n{}. {}\n   Audience: {}\n   Demand: {}/10\n   Competition: {}\n   Products: {}\n   Est. Revenue: {}\n",
            i + 1,
            record.niche.as_deref().unwrap_or("Unknown"),
            or_na(&record.audience),
            record.demand_or_default(),
            record.competition_or_default(),
            or_na(&record.products),
            or_na(&record.est_revenue),
        ));
    }

    out
}

/// The leading part of an analysis nothing could be extracted from.
pub(crate) fn render_raw_excerpt(analysis: &str) -> String {
    let excerpt: String = analysis.chars().take(RAW_EXCERPT_CHARS).collect();
    format!("could not extract opportunities from analysis\n\nraw analysis:\n{excerpt}...")
}

pub(crate) fn render_persist_report(report: &PersistReport) -> String {
    match report {
        PersistReport::Skipped(SkipReason::NotConfigured) => {
            "  spreadsheet not configured; nothing saved".to_string()
        }
        PersistReport::Skipped(SkipReason::NoRecords) => "  no opportunities to save".to_string(),
        PersistReport::Attempted {
            opportunities,
            analysis,
        } => {
            let opportunities = match opportunities {
                AppendOutcome::Appended { rows } => {
                    format!("  saved {rows} opportunities to Google Sheets")
                }
                AppendOutcome::Failed { reason } => {
                    format!("  error saving opportunities: {reason}")
                }
            };
            let analysis = match analysis {
                AppendOutcome::Appended { .. } => "  saved raw analysis".to_string(),
                AppendOutcome::Failed { reason } => format!("  error saving raw analysis: {reason}"),
            };
            format!("{opportunities}\n{analysis}")
        }
    }
}

pub(crate) fn render_next_steps() -> String {
    let steps: Vec<String> = NEXT_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {step}", i + 1))
        .collect();
    format!("research complete\n\nnext steps:\n{}", steps.join("\n"))
}
