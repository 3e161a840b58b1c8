use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub accounts: Vec<String>,
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub tweets_to_analyze: u32,
    pub tweets_to_rewrite: u32,
    pub min_likes: u32,
    pub min_retweets: u32,
    pub generate_images: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub results: Vec<RewriteResult>,
    pub summary: GenerationSummary,
}

/// One rewritten post as returned by the service. Immutable once received;
/// its position in `results` is its identity for the lifetime of the view.
#[derive(Debug, Clone, Deserialize)]
pub struct RewriteResult {
    #[serde(default)]
    pub original_url: String,
    #[serde(default)]
    pub original_text: String,
    #[serde(default)]
    pub original_likes: u64,
    #[serde(default)]
    pub original_retweets: u64,
    #[serde(default)]
    pub original_replies: u64,
    pub rewritten_text: String,
    #[serde(default)]
    pub call_to_action: Option<String>,
    #[serde(default)]
    pub thread: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub scores: Option<Scores>,
}

/// Engagement scores in [0, 10]; any of them may be missing.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Scores {
    #[serde(default)]
    pub dwell_potential: Option<f64>,
    #[serde(default)]
    pub reply_potential: Option<f64>,
    #[serde(default)]
    pub virality: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSummary {
    #[serde(default)]
    pub total_collected: u64,
    #[serde(default)]
    pub total_filtered: u64,
    #[serde(default)]
    pub total_analyzed: u64,
    #[serde(default)]
    pub total_rewritten: u64,
    /// Present only when the backend ran against the paid APIs.
    #[serde(default)]
    pub cost: Option<CostBreakdown>,
}

/// Per-request cost accounting. The backend omits fields it did not meter,
/// so everything defaults to zero for display.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostBreakdown {
    #[serde(default)]
    pub x_api_user_lookups: u64,
    #[serde(default)]
    pub x_api_tweets_read: u64,
    #[serde(default)]
    pub x_api_cost_usd: f64,
    #[serde(default)]
    pub gemini_analysis_calls: u64,
    #[serde(default)]
    pub gemini_rewrite_calls: u64,
    #[serde(default)]
    pub gemini_cost_usd: f64,
    #[serde(default)]
    pub estimated_cost_usd: f64,
    #[serde(default)]
    pub estimated_cost_jpy: f64,
}
