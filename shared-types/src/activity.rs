use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Kind of event in a lead's activity history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    StatusChange,
    Note,
    Call,
    Email,
    Created,
}

/// One row of a lead's activity history
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub message: String,
    pub date: NaiveDate,
    pub user: String,
}
