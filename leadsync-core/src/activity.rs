use chrono::Days;
use shared_types::{ActivityEntry, ActivityKind, Lead};

/// Builds the canned activity timeline shown on the details screen.
///
/// Real interaction history is not tracked yet, so the middle entries are
/// placeholders anchored to the lead's contact dates. Entries are newest
/// first and never predate `date_received`.
pub fn placeholder_timeline(lead: &Lead) -> Vec<ActivityEntry> {
    let day_before = |days: u64| {
        lead.last_contacted
            .checked_sub_days(Days::new(days))
            .unwrap_or(lead.date_received)
            .max(lead.date_received)
    };

    vec![
        ActivityEntry {
            kind: ActivityKind::StatusChange,
            message: format!("Status changed to {}", lead.status),
            date: lead.last_contacted,
            user: lead.assigned_to.clone(),
        },
        ActivityEntry {
            kind: ActivityKind::Note,
            message: "Added detailed notes about customer requirements".to_string(),
            date: day_before(1),
            user: lead.assigned_to.clone(),
        },
        ActivityEntry {
            kind: ActivityKind::Call,
            message: "Phone call - Discussed pricing and features".to_string(),
            date: day_before(2),
            user: lead.assigned_to.clone(),
        },
        ActivityEntry {
            kind: ActivityKind::Email,
            message: "Sent brochure and pricing information".to_string(),
            date: day_before(3),
            user: lead.assigned_to.clone(),
        },
        ActivityEntry {
            kind: ActivityKind::Created,
            message: format!("Lead created from {} campaign", lead.platform),
            date: lead.date_received,
            user: "System".to_string(),
        },
    ]
}
