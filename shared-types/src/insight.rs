use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lead::{IntentLevel, LeadScore};

/// How soon a new lead should be contacted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FollowUpWindow {
    #[serde(rename = "Within 4 hours")]
    FourHours,
    #[serde(rename = "Within 24 hours")]
    TwentyFourHours,
}

impl FollowUpWindow {
    pub fn as_str(&self) -> &str {
        match self {
            FollowUpWindow::FourHours => "Within 4 hours",
            FollowUpWindow::TwentyFourHours => "Within 24 hours",
        }
    }
}

impl std::fmt::Display for FollowUpWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Live preview card for the add-lead form
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScorePreview {
    pub score: LeadScore,
    pub intent: IntentLevel,
    pub follow_up: FollowUpWindow,
}
