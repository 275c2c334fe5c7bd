//! Media kit model

use serde::{Deserialize, Serialize};

use super::user::Segment;

/// Estimated average reach per content type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatedViews {
    pub post_avg_views: u64,
    pub story_avg_views: u64,
}

/// Suggested content rates in euros
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedRates {
    pub single_post: f64,
    pub single_story: f64,
    pub bundle_post_3stories: f64,
}

/// Media kit snapshot for one profile
///
/// Scoped to exactly one user at a time; regenerating replaces the previous
/// snapshot wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaKit {
    pub username: String,
    pub main_platform: String,
    pub segment: Segment,
    pub segment_label: String,
    pub followers: u64,
    pub estimated: EstimatedViews,
    pub suggested_rates_eur: SuggestedRates,
}
