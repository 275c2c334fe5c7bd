//! Profile tips model

use serde::{Deserialize, Serialize};

/// Advisory content for one profile
///
/// Tips are ordered by priority and rendered in listed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileTips {
    pub level: String,
    pub summary: String,
    #[serde(default)]
    pub tips: Vec<String>,
}
