/// The market a run targets: which searches to issue, where, and which
/// audience segments and product types the analysis should draw on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketProfile {
    /// Human-readable market name used in the prompt, e.g. `"USA"`.
    pub name: String,
    /// Two-letter country code sent to the search provider as `gl`.
    pub locale: String,
    pub queries: Vec<String>,
    pub audiences: Vec<String>,
    pub product_types: Vec<String>,
}

const USA_QUERIES: &[&str] = &[
    "trending memes USA 2025",
    "viral quotes 2025",
    "popular sayings 2025",
    "trending hobbies USA",
    "popular movements 2025",
    "trending lifestyle USA",
];

const USA_AUDIENCES: &[&str] = &[
    "millennials",
    "gen z",
    "parents",
    "dog owners",
    "cat owners",
    "teachers",
    "nurses",
    "fitness enthusiasts",
    "gamers",
    "book lovers",
    "coffee lovers",
    "outdoor enthusiasts",
];

const POD_PRODUCT_TYPES: &[&str] = &[
    "t-shirt",
    "hoodie",
    "mug",
    "tote bag",
    "phone case",
    "sticker",
    "poster",
    "canvas print",
    "tank top",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl MarketProfile {
    /// The US print-on-demand market.
    #[must_use]
    pub fn usa() -> Self {
        Self {
            name: "USA".to_string(),
            locale: "us".to_string(),
            queries: owned(USA_QUERIES),
            audiences: owned(USA_AUDIENCES),
            product_types: owned(POD_PRODUCT_TYPES),
        }
    }
}

impl Default for MarketProfile {
    fn default() -> Self {
        Self::usa()
    }
}
