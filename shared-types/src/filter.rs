use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lead::{LeadStatus, Platform};

/// Listing filter; unset fields do not constrain
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct LeadFilter {
    /// Matched against name, email and phone
    pub text: String,
    pub status: Option<LeadStatus>,
    pub platform: Option<Platform>,
    pub assignee: Option<String>,
}
