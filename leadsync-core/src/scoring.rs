use shared_types::{FollowUpWindow, IntentLevel, LeadScore};

/// Derive the urgency score from notes and timeline.
///
/// Notes mentioning "urgent" or an immediate timeline make a lead Hot,
/// "interested" notes or a one-month timeline make it Warm, anything
/// else is Cold. The Hot rule is checked first.
pub fn score_for(notes: &str, timeline: &str) -> LeadScore {
    let notes = notes.to_lowercase();

    if notes.contains("urgent") || timeline == "Immediately" {
        LeadScore::Hot
    } else if notes.contains("interested") || timeline == "1 month" {
        LeadScore::Warm
    } else {
        LeadScore::Cold
    }
}

/// Derive purchase intent from the budget and model selections.
///
/// Both filled means High, one filled Medium, neither Low. Emptiness is
/// the literal empty string; whitespace counts as filled.
pub fn intent_for(budget: &str, model: &str) -> IntentLevel {
    match (!budget.is_empty(), !model.is_empty()) {
        (true, true) => IntentLevel::High,
        (false, false) => IntentLevel::Low,
        _ => IntentLevel::Medium,
    }
}

/// Recommended first-contact window for a timeline selection.
pub fn follow_up_window(timeline: &str) -> FollowUpWindow {
    if timeline == "Immediately" || timeline == "2 weeks" {
        FollowUpWindow::FourHours
    } else {
        FollowUpWindow::TwentyFourHours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgent_notes_score_hot() {
        assert_eq!(score_for("URGENT: wants a callback", "Undecided"), LeadScore::Hot);
        assert_eq!(score_for("Urgent replacement for totaled car", ""), LeadScore::Hot);
    }

    #[test]
    fn test_immediate_timeline_scores_hot() {
        assert_eq!(score_for("", "Immediately"), LeadScore::Hot);
    }

    #[test]
    fn test_interested_notes_score_warm() {
        assert_eq!(score_for("Very Interested in compact SUVs", "Undecided"), LeadScore::Warm);
    }

    #[test]
    fn test_one_month_timeline_scores_warm() {
        assert_eq!(score_for("", "1 month"), LeadScore::Warm);
    }

    #[test]
    fn test_hot_rule_wins_over_warm() {
        // Notes alone would score Warm, but the timeline is immediate
        assert_eq!(score_for("interested in a sedan", "Immediately"), LeadScore::Hot);
    }

    #[test]
    fn test_everything_else_is_cold() {
        assert_eq!(score_for("", ""), LeadScore::Cold);
        assert_eq!(score_for("Comparing prices online", "6+ months"), LeadScore::Cold);
    }

    #[test]
    fn test_intent_levels() {
        assert_eq!(intent_for("₹10-15 Lakhs", "Hyundai Creta"), IntentLevel::High);
        assert_eq!(intent_for("₹10-15 Lakhs", ""), IntentLevel::Medium);
        assert_eq!(intent_for("", "Hyundai Creta"), IntentLevel::Medium);
        assert_eq!(intent_for("", ""), IntentLevel::Low);
    }

    #[test]
    fn test_follow_up_windows() {
        assert_eq!(follow_up_window("Immediately"), FollowUpWindow::FourHours);
        assert_eq!(follow_up_window("2 weeks"), FollowUpWindow::FourHours);
        assert_eq!(follow_up_window("1 month"), FollowUpWindow::TwentyFourHours);
        assert_eq!(follow_up_window(""), FollowUpWindow::TwentyFourHours);
    }
}
