//! User profile model

use serde::{Deserialize, Serialize};

/// Segment assigned by the remote scoring engine.
///
/// Opaque to the client: segments are read, compared, and displayed, never
/// computed locally. Tags outside the known set deserialize to [`Segment::Unknown`]
/// instead of failing the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Casual,
    Emerging,
    Pro,
    Agency,
    #[serde(other)]
    Unknown,
}

impl Segment {
    /// Wire tag of the segment, `"-"` for unrecognized values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Casual => "casual",
            Segment::Emerging => "emerging",
            Segment::Pro => "pro",
            Segment::Agency => "agency",
            Segment::Unknown => "-",
        }
    }
}

/// Pricing plan attached to a segment
///
/// Always produced together with the segment by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub label: String,
    pub description: String,
    pub monthly_price: f64,
    pub yearly_price: Option<f64>,
    #[serde(default)]
    pub billing_note: Option<String>,
}

/// User profile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub email: String,
    pub main_platform: String,
    pub username: String,
    pub followers: u64,
    #[serde(default = "default_profiles_count")]
    pub profiles_count: u32,
    pub segment: Segment,
    pub plan: Plan,
}

fn default_profiles_count() -> u32 {
    1
}
