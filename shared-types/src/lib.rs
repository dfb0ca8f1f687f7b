pub mod activity;
pub mod catalog;
pub mod filter;
pub mod insight;
pub mod lead;
pub mod metrics;
pub mod screen;

pub use activity::{ActivityEntry, ActivityKind};
pub use catalog::Catalog;
pub use filter::LeadFilter;
pub use insight::{FollowUpWindow, ScorePreview};
pub use lead::{
    CreateLeadRequest, IntentLevel, Lead, LeadError, LeadScore, LeadStatus, LeadsResponse,
    Platform,
};
pub use metrics::{
    DashboardMetrics, PlatformCount, ScoreCount, StatusCount, TeamMemberStats, TrendPoint,
};
pub use screen::Screen;
