use shared_types::{Lead, LeadFilter};

/// Apply a listing filter over a snapshot, preserving order.
///
/// Text matches name or email case-insensitively, and phone by raw
/// substring. Status, platform and assignee must equal the query value
/// when set. All constraints combine with AND.
pub fn filter_leads(leads: &[Lead], filter: &LeadFilter) -> Vec<Lead> {
    let needle = filter.text.to_lowercase();

    leads
        .iter()
        .filter(|lead| {
            let matches_text = filter.text.is_empty()
                || lead.name.to_lowercase().contains(&needle)
                || lead.email.to_lowercase().contains(&needle)
                || lead.phone.contains(&filter.text);

            let matches_status = filter.status.map_or(true, |status| lead.status == status);
            let matches_platform = filter
                .platform
                .map_or(true, |platform| lead.platform == platform);
            let matches_assignee = filter
                .assignee
                .as_ref()
                .map_or(true, |assignee| &lead.assigned_to == assignee);

            matches_text && matches_status && matches_platform && matches_assignee
        })
        .cloned()
        .collect()
}

/// Distinct assignees of a snapshot in first-appearance order, for the
/// listing's assignee dropdown.
pub fn assignees(leads: &[Lead]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for lead in leads {
        if !seen.contains(&lead.assigned_to) {
            seen.push(lead.assigned_to.clone());
        }
    }
    seen
}
