use shared_types::{CreateLeadRequest, DashboardMetrics, Platform, ScorePreview};

use crate::scoring;

/// Form hints derived from in-progress input, in display order.
pub fn smart_suggestions(request: &CreateLeadRequest) -> Vec<String> {
    let mut suggestions = Vec::new();
    let notes = request.notes.to_lowercase();

    if notes.contains("luxury") {
        suggestions.push("High-end vehicle interest detected".to_string());
    }
    if notes.contains("first") || notes.contains("new") {
        suggestions.push("First-time buyer - may need financing info".to_string());
    }
    if request.timeline == "Immediately" || request.timeline == "2 weeks" {
        suggestions.push("Urgent buyer - prioritize follow-up".to_string());
    }
    if request.platform == Some(Platform::Referral) {
        suggestions.push("Referral lead - higher conversion rate".to_string());
    }

    suggestions
}

/// Live values for the add-lead form's scoring preview card.
pub fn score_preview(request: &CreateLeadRequest) -> ScorePreview {
    ScorePreview {
        score: scoring::score_for(&request.notes, &request.timeline),
        intent: scoring::intent_for(&request.budget, &request.model),
        follow_up: scoring::follow_up_window(&request.timeline),
    }
}

/// Dashboard insight lines for the current metrics.
pub fn quick_insights(metrics: &DashboardMetrics) -> Vec<String> {
    let mut insights = Vec::new();

    // First appearance breaks ties, so the earliest-seen platform wins
    let top_platform = metrics.by_platform.iter().reduce(|best, entry| {
        if entry.count > best.count {
            entry
        } else {
            best
        }
    });
    if let Some(top) = top_platform {
        insights.push(format!("{} generates the most leads", top.platform));
    }

    insights.push(format!(
        "{} hot leads need immediate attention",
        metrics.hot_leads
    ));
    insights.push("Best contact time: 10 AM - 12 PM".to_string());
    insights.push("Average response time: 2.5 hours".to_string());

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::aggregate;
    use crate::samples::sample_leads;
    use shared_types::{Catalog, FollowUpWindow, IntentLevel, LeadScore};

    #[test]
    fn test_suggestions_from_notes() {
        let request = CreateLeadRequest {
            notes: "Wants a luxury sedan, first car".to_string(),
            ..Default::default()
        };

        assert_eq!(
            smart_suggestions(&request),
            vec![
                "High-end vehicle interest detected".to_string(),
                "First-time buyer - may need financing info".to_string(),
            ]
        );
    }

    #[test]
    fn test_suggestions_from_timeline_and_platform() {
        let request = CreateLeadRequest {
            timeline: "2 weeks".to_string(),
            platform: Some(Platform::Referral),
            ..Default::default()
        };

        assert_eq!(
            smart_suggestions(&request),
            vec![
                "Urgent buyer - prioritize follow-up".to_string(),
                "Referral lead - higher conversion rate".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_suggestions_for_empty_form() {
        assert!(smart_suggestions(&CreateLeadRequest::default()).is_empty());
    }

    #[test]
    fn test_score_preview_tracks_input() {
        let mut request = CreateLeadRequest {
            timeline: "Immediately".to_string(),
            budget: "₹15-20 Lakhs".to_string(),
            ..Default::default()
        };

        let preview = score_preview(&request);
        assert_eq!(preview.score, LeadScore::Hot);
        assert_eq!(preview.intent, IntentLevel::Medium);
        assert_eq!(preview.follow_up, FollowUpWindow::FourHours);

        request.timeline = "Undecided".to_string();
        let preview = score_preview(&request);
        assert_eq!(preview.score, LeadScore::Cold);
        assert_eq!(preview.follow_up, FollowUpWindow::TwentyFourHours);
    }

    #[test]
    fn test_quick_insights_name_top_platform() {
        let metrics = aggregate(&sample_leads(), &Catalog::default().sales_team);
        let insights = quick_insights(&metrics);

        // Five platforms with one lead each; the first seen wins the tie
        assert_eq!(insights.len(), 4);
        assert_eq!(insights[0], "Facebook generates the most leads");
        assert_eq!(insights[1], "2 hot leads need immediate attention");
    }

    #[test]
    fn test_quick_insights_follow_the_dominant_platform() {
        let mut leads = sample_leads();
        // Push Referral to three of five leads; Facebook keeps one
        leads[1].platform = Platform::Referral;
        leads[2].platform = Platform::Referral;

        let metrics = aggregate(&leads, &Catalog::default().sales_team);
        let insights = quick_insights(&metrics);

        assert_eq!(insights[0], "Referral generates the most leads");
    }

    #[test]
    fn test_quick_insights_on_empty_snapshot() {
        let metrics = aggregate(&[], &Catalog::default().sales_team);
        let insights = quick_insights(&metrics);

        assert_eq!(insights.len(), 3);
        assert_eq!(insights[0], "0 hot leads need immediate attention");
    }
}
