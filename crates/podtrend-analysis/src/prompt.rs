//! Prompt assembly for opportunity analysis.

use podtrend_core::{MarketProfile, TrendSnippet};

/// Only the first this-many snippets are sent to the model.
pub const MAX_PROMPT_TRENDS: usize = 15;

/// Render snippets as `Trend: <title>\n<summary>` blocks separated by blank
/// lines, keeping at most [`MAX_PROMPT_TRENDS`].
#[must_use]
pub fn format_trends(snippets: &[TrendSnippet]) -> String {
    snippets
        .iter()
        .take(MAX_PROMPT_TRENDS)
        .map(|t| format!("Trend: {}\n{}", t.title, t.summary))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the full analysis prompt for `market` around the given trends.
///
/// The ten numbered field labels are the same ones
/// [`crate::extract::extract_opportunities`] looks for in the reply.
#[must_use]
pub fn build_prompt(market: &MarketProfile, snippets: &[TrendSnippet]) -> String {
    let trends = format_trends(snippets);
    let name = &market.name;
    let audiences = market.audiences.join(", ");
    let products = market.product_types.join(", ");

    format!(
        "You are a print-on-demand business consultant specializing in {name} market Printify/Shopify stores.

Analyze these trending topics and themes from {name}:

{trends}

Provide 10 SPECIFIC print-on-demand product opportunities. For each opportunity:

1. NICHE NAME: (specific, not generic)
2. TARGET AUDIENCE: Who buys this?
3. DESIGN THEME: What should the design look like/say?
4. PRODUCTS: Which POD products? (t-shirt, hoodie, mug, etc.)
5. DEMAND SCORE: 1-10 (how hot is this trend?)
6. COMPETITION: Low/Medium/High
7. DESIGN EXAMPLES: 3 specific text/image ideas
8. WHY IT WORKS: What makes this profitable?
9. FACEBOOK AD ANGLE: How to market this?
10. ESTIMATED MONTHLY REVENUE: Realistic estimate if executed well

Focus on:
- Specific niches (not just \"dog lovers\" but \"golden retriever moms\")
- Actionable design ideas
- {name} cultural trends
- Passion-based audiences
- Gift-giving occasions
- Identity/lifestyle niches

Audience segments to draw from and narrow down: {audiences}
Available product types: {products}

Format each opportunity clearly with all 10 points."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(i: usize) -> TrendSnippet {
        TrendSnippet {
            title: format!("Title {i}"),
            summary: format!("Summary {i}"),
            url: format!("https://example.com/{i}"),
        }
    }

    #[test]
    fn format_trends_joins_blocks_with_blank_lines() {
        let rendered = format_trends(&[snippet(1), snippet(2)]);
        assert_eq!(
            rendered,
            "Trend: Title 1\nSummary 1\n\nTrend: Title 2\nSummary 2"
        );
    }

    #[test]
    fn format_trends_keeps_first_fifteen() {
        let snippets: Vec<TrendSnippet> = (1..=20).map(snippet).collect();
        let rendered = format_trends(&snippets);
        assert_eq!(rendered.matches("Trend: ").count(), 15);
        assert!(rendered.contains("Title 15"));
        assert!(!rendered.contains("Title 16"));
    }

    #[test]
    fn format_trends_of_nothing_is_empty() {
        assert_eq!(format_trends(&[]), "");
    }

    #[test]
    fn format_trends_keeps_empty_summary_line() {
        let t = TrendSnippet {
            title: "Bare".to_string(),
            summary: String::new(),
            url: String::new(),
        };
        assert_eq!(format_trends(&[t]), "Trend: Bare\n");
    }

    #[test]
    fn prompt_embeds_trends_and_all_ten_labels() {
        let prompt = build_prompt(&MarketProfile::usa(), &[snippet(1)]);
        assert!(prompt.contains("Trend: Title 1\nSummary 1"));
        for label in [
            "1. NICHE NAME:",
            "2. TARGET AUDIENCE:",
            "3. DESIGN THEME:",
            "4. PRODUCTS:",
            "5. DEMAND SCORE:",
            "6. COMPETITION:",
            "7. DESIGN EXAMPLES:",
            "8. WHY IT WORKS:",
            "9. FACEBOOK AD ANGLE:",
            "10. ESTIMATED MONTHLY REVENUE:",
        ] {
            assert!(prompt.contains(label), "prompt is missing {label}");
        }
    }

    #[test]
    fn prompt_names_market_and_reference_lists() {
        let prompt = build_prompt(&MarketProfile::usa(), &[]);
        assert!(prompt.contains("specializing in USA market"));
        assert!(prompt.contains("golden retriever moms"));
        assert!(prompt.contains("dog owners"));
        assert!(prompt.contains("canvas print"));
    }
}
