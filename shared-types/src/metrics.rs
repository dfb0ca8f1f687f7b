use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lead::{LeadScore, LeadStatus, Platform};

/// Leads sharing a status, with share of total
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusCount {
    pub status: LeadStatus,
    pub count: u32,
    pub percentage: u32,
}

/// Leads sharing a platform, with share of total
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlatformCount {
    pub platform: Platform,
    pub count: u32,
    pub percentage: u32,
}

/// Leads sharing a score, with share of total
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreCount {
    pub score: LeadScore,
    pub count: u32,
    pub percentage: u32,
}

/// Per-member numbers over the sales team roster
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TeamMemberStats {
    pub member: String,
    pub lead_count: u32,
    /// Leads at Qualified or Closed
    pub conversions: u32,
    pub conversion_rate: u32,
}

/// One day of the dashboard trend chart
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub leads: u32,
    pub conversions: u32,
}

/// Dashboard statistics derived from the current lead snapshot
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardMetrics {
    pub total: u32,
    pub new_leads: u32,
    pub interested_leads: u32,
    pub qualified_leads: u32,
    pub closed_leads: u32,
    pub hot_leads: u32,
    /// Percentage of leads at Qualified
    pub conversion_rate: u32,
    pub by_status: Vec<StatusCount>,
    pub by_platform: Vec<PlatformCount>,
    pub by_score: Vec<ScoreCount>,
    pub team: Vec<TeamMemberStats>,
}
