//! Derived dashboard view model
//!
//! Pure derivation from [`DashboardState`] to display-ready text. Rebuilt on
//! every render pass; never mutates state.

use serde::Serialize;

use crate::controller::DashboardState;
use crate::format::{format_count, format_price, segment_label};

/// Fallback heading when no tips are available
pub const TIPS_UNAVAILABLE: &str = "Suggerimenti non disponibili";

/// Profile and plan card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentityView {
    pub segment_badge: String,
    pub segment_tag: String,
    pub plan_label: String,
    pub plan_description: String,
    pub monthly_price: String,
    pub yearly_price: String,
    pub billing_note: Option<String>,
    pub email: String,
    pub platform: String,
    pub username: String,
    pub followers: String,
    pub profiles_count: String,
}

/// Media kit card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaKitView {
    pub title: String,
    pub profile: String,
    pub segment_label: String,
    pub followers: String,
    pub post_avg_views: String,
    pub story_avg_views: String,
    pub single_post: String,
    pub single_story: String,
    pub bundle_post_3stories: String,
}

/// Tips card, always rendered (with a fallback heading when empty)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipsView {
    pub heading: String,
    pub summary: String,
    pub items: Vec<String>,
}

/// The whole dashboard, derived from the current state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub identity: Option<IdentityView>,
    pub media_kit: Option<MediaKitView>,
    pub tips: TipsView,
}

impl DashboardView {
    pub fn from_state(state: &DashboardState) -> Self {
        let identity = state.user.as_ref().map(|user| IdentityView {
            segment_badge: segment_label(Some(user.segment)).to_string(),
            segment_tag: user.segment.as_str().to_uppercase(),
            plan_label: user.plan.label.clone(),
            plan_description: user.plan.description.clone(),
            monthly_price: format_price(Some(user.plan.monthly_price)),
            yearly_price: format_price(user.plan.yearly_price),
            billing_note: user.plan.billing_note.clone(),
            email: user.email.clone(),
            platform: user.main_platform.clone(),
            username: user.username.clone(),
            followers: format_count(user.followers),
            profiles_count: user.profiles_count.to_string(),
        });

        let media_kit = state.media_kit.as_ref().map(|kit| MediaKitView {
            title: format!("Media kit per {}", kit.username),
            profile: format!("{} su {}", kit.username, kit.main_platform),
            segment_label: kit.segment_label.clone(),
            followers: format_count(kit.followers),
            post_avg_views: format_count(kit.estimated.post_avg_views),
            story_avg_views: format_count(kit.estimated.story_avg_views),
            single_post: format_price(Some(kit.suggested_rates_eur.single_post)),
            single_story: format_price(Some(kit.suggested_rates_eur.single_story)),
            bundle_post_3stories: format_price(Some(kit.suggested_rates_eur.bundle_post_3stories)),
        });

        let tips = match state.tips.loaded() {
            Some(tips) => TipsView {
                heading: tips.level.clone(),
                summary: tips.summary.clone(),
                items: tips.tips.clone(),
            },
            None => TipsView {
                heading: TIPS_UNAVAILABLE.to_string(),
                summary: String::new(),
                items: Vec::new(),
            },
        };

        Self {
            identity,
            media_kit,
            tips,
        }
    }
}
