//! Label-based extraction of opportunity records from the model's prose.
//!
//! The reply is split into blank-line-separated sections. A section that
//! names a niche, or starts with the ordinal `1.` or `2.`, closes the record
//! being built and opens a new one. Every section is then scanned for the
//! ten field labels the prompt asks for.
//!
//! Labels are matched as plain substrings anywhere in a section, so a label
//! quoted inside prose is treated the same as a real field marker.

use podtrend_core::{OpportunityRecord, DEFAULT_DEMAND_SCORE};

const NICHE_NAME: &str = "NICHE NAME:";
const TARGET_AUDIENCE: &str = "TARGET AUDIENCE:";
const DESIGN_THEME: &str = "DESIGN THEME:";
const PRODUCTS: &str = "PRODUCTS:";
const DEMAND_SCORE: &str = "DEMAND SCORE:";
const COMPETITION: &str = "COMPETITION:";
const DESIGN_EXAMPLES: &str = "DESIGN EXAMPLES:";
const WHY_IT_WORKS: &str = "WHY IT WORKS:";
const FACEBOOK_AD_ANGLE: &str = "FACEBOOK AD ANGLE:";
const ESTIMATED_MONTHLY_REVENUE: &str = "ESTIMATED MONTHLY REVENUE:";

/// Parse the model's reply into records, in the order they appear.
///
/// Never fails. Fields whose label never appears stay `None`, and a record
/// with no recognized field is never emitted.
#[must_use]
pub fn extract_opportunities(text: &str) -> Vec<OpportunityRecord> {
    let mut records = Vec::new();
    let mut current = OpportunityRecord::default();

    for section in text.split("\n\n") {
        if starts_new_record(section) && !current.is_empty() {
            records.push(std::mem::take(&mut current));
        }
        apply_section(&mut current, section);
    }

    if !current.is_empty() {
        records.push(current);
    }

    records
}

/// Lenient demand-score parse: `"7/10"` is 7, `" 10 "` is 10, and anything
/// that is not an integer before the optional `/` is [`DEFAULT_DEMAND_SCORE`].
#[must_use]
pub fn parse_demand_score(raw: &str) -> i64 {
    raw.trim()
        .split('/')
        .next()
        .unwrap_or_default()
        .trim()
        .parse::<i64>()
        .unwrap_or(DEFAULT_DEMAND_SCORE)
}

fn starts_new_record(section: &str) -> bool {
    let stripped = section.trim();
    section.contains(NICHE_NAME) || stripped.starts_with("1.") || stripped.starts_with("2.")
}

fn apply_section(record: &mut OpportunityRecord, section: &str) {
    if let Some(v) = line_after(section, NICHE_NAME) {
        record.niche = Some(v);
    }
    if let Some(v) = line_after(section, TARGET_AUDIENCE) {
        record.audience = Some(v);
    }
    if let Some(v) = line_after(section, DESIGN_THEME) {
        record.design_theme = Some(v);
    }
    if let Some(v) = line_after(section, PRODUCTS) {
        record.products = Some(v);
    }
    if let Some(v) = line_after(section, DEMAND_SCORE) {
        record.demand_score = Some(parse_demand_score(&v));
    }
    if let Some(v) = line_after(section, COMPETITION) {
        record.competition = Some(v);
    }
    if let Some(v) = text_until(section, DESIGN_EXAMPLES, WHY_IT_WORKS) {
        record.design_examples = Some(v);
    }
    if let Some(v) = text_until(section, WHY_IT_WORKS, FACEBOOK_AD_ANGLE) {
        record.why_it_works = Some(v);
    }
    if let Some(v) = text_until(section, FACEBOOK_AD_ANGLE, ESTIMATED_MONTHLY_REVENUE) {
        record.ad_angle = Some(v);
    }
    if let Some(rest) = after_label(section, ESTIMATED_MONTHLY_REVENUE) {
        record.est_revenue = Some(rest.trim().to_string());
    }
}

/// Everything after the first occurrence of `label`.
fn after_label<'a>(section: &'a str, label: &str) -> Option<&'a str> {
    section
        .find(label)
        .map(|idx| &section[idx + label.len()..])
}

/// The rest of the label's line, trimmed.
fn line_after(section: &str, label: &str) -> Option<String> {
    after_label(section, label).map(|rest| {
        rest.split('\n')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string()
    })
}

/// Text after `label` up to `next_label` (or the section end), trimmed.
fn text_until(section: &str, label: &str, next_label: &str) -> Option<String> {
    after_label(section, label).map(|rest| {
        let end = rest.find(next_label).unwrap_or(rest.len());
        rest[..end].trim().to_string()
    })
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
