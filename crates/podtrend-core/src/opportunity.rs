use serde::{Deserialize, Serialize};

/// Demand score used when the model's answer is missing or not an integer.
pub const DEFAULT_DEMAND_SCORE: i64 = 5;

/// Competition level used when the model never named one.
pub const DEFAULT_COMPETITION: &str = "Medium";

/// Status written to the sheet for every freshly extracted opportunity.
pub const INITIAL_STATUS: &str = "Not started";

/// One print-on-demand opportunity extracted from the model's prose.
///
/// Every field is `None` until its label is seen in the text. Defaults are
/// applied only when the record is rendered for output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityRecord {
    pub niche: Option<String>,
    pub audience: Option<String>,
    pub design_theme: Option<String>,
    /// Free-text product list, e.g. `"t-shirt, hoodie, mug"`.
    pub products: Option<String>,
    pub demand_score: Option<i64>,
    /// Free-text competition level, usually `Low`, `Medium` or `High`.
    pub competition: Option<String>,
    pub design_examples: Option<String>,
    pub why_it_works: Option<String>,
    pub ad_angle: Option<String>,
    pub est_revenue: Option<String>,
}

impl OpportunityRecord {
    /// Returns `true` when no field has been recognized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Demand score, falling back to [`DEFAULT_DEMAND_SCORE`].
    #[must_use]
    pub fn demand_or_default(&self) -> i64 {
        self.demand_score.unwrap_or(DEFAULT_DEMAND_SCORE)
    }

    /// Competition level, falling back to [`DEFAULT_COMPETITION`].
    #[must_use]
    pub fn competition_or_default(&self) -> &str {
        self.competition.as_deref().unwrap_or(DEFAULT_COMPETITION)
    }
}
