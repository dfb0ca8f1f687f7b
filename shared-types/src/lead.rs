use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Channel a lead arrived through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Platform {
    Facebook,
    Google,
    Website,
    Referral,
    LinkedIn,
}

impl Platform {
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Google => "Google",
            Platform::Website => "Website",
            Platform::Referral => "Referral",
            Platform::LinkedIn => "LinkedIn",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pipeline status of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LeadStatus {
    New,
    Contacted,
    Interested,
    #[serde(rename = "Not Interested")]
    NotInterested,
    Qualified,
    Closed,
}

impl LeadStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Interested => "Interested",
            LeadStatus::NotInterested => "Not Interested",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Closed => "Closed",
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for LeadStatus {
    fn default() -> Self {
        LeadStatus::New
    }
}

/// Urgency score derived from notes and timeline at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LeadScore {
    Hot,
    Warm,
    Cold,
}

/// Purchase intent derived from budget and model at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum IntentLevel {
    High,
    Medium,
    Low,
}

/// A sales lead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub platform: Platform,
    pub status: LeadStatus,
    pub assigned_to: String,
    pub last_contacted: NaiveDate,
    pub date_received: NaiveDate,
    pub budget: String,
    pub model: String,
    pub timeline: String,
    pub notes: String,
    pub score: LeadScore,
    pub intent: IntentLevel,
}

/// Request to create a new lead; id, dates, score and intent are
/// assigned by the store
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct CreateLeadRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub platform: Option<Platform>,
    pub status: LeadStatus,
    pub assigned_to: String,
    pub budget: String,
    pub model: String,
    pub timeline: String,
    pub notes: String,
}

/// Response containing a list of leads
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LeadsResponse {
    pub leads: Vec<Lead>,
}

/// Lead store error types
#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("No lead with id: {0}")]
    NotFound(String),
}
