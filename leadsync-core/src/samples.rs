use chrono::NaiveDate;
use shared_types::{IntentLevel, Lead, LeadScore, LeadStatus, Platform};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The demo dataset the dashboard boots with.
///
/// Scores and intents here are authored values; they are not recomputed
/// from the notes and timeline fields.
pub fn sample_leads() -> Vec<Lead> {
    vec![
        Lead {
            id: "1".to_string(),
            name: "Rahul Sharma".to_string(),
            email: "rahul.sharma@email.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            platform: Platform::Facebook,
            status: LeadStatus::Interested,
            assigned_to: "Priya Singh".to_string(),
            last_contacted: date(2024, 1, 15),
            date_received: date(2024, 1, 10),
            budget: "₹15-20 Lakhs".to_string(),
            model: "BMW X3".to_string(),
            timeline: "2-3 months".to_string(),
            notes: "Looking for luxury SUV with good fuel efficiency. Interested in test drive."
                .to_string(),
            score: LeadScore::Hot,
            intent: IntentLevel::High,
        },
        Lead {
            id: "2".to_string(),
            name: "Anita Desai".to_string(),
            email: "anita.desai@email.com".to_string(),
            phone: "+91 87654 32109".to_string(),
            platform: Platform::Google,
            status: LeadStatus::New,
            assigned_to: "Vikash Kumar".to_string(),
            last_contacted: date(2024, 1, 14),
            date_received: date(2024, 1, 14),
            budget: "₹8-12 Lakhs".to_string(),
            model: "Honda City".to_string(),
            timeline: "1 month".to_string(),
            notes: "First-time buyer, needs financing options.".to_string(),
            score: LeadScore::Warm,
            intent: IntentLevel::Medium,
        },
        Lead {
            id: "3".to_string(),
            name: "Suresh Patel".to_string(),
            email: "suresh.patel@email.com".to_string(),
            phone: "+91 76543 21098".to_string(),
            platform: Platform::Website,
            status: LeadStatus::Contacted,
            assigned_to: "Priya Singh".to_string(),
            last_contacted: date(2024, 1, 13),
            date_received: date(2024, 1, 12),
            budget: "₹25-30 Lakhs".to_string(),
            model: "Mercedes C-Class".to_string(),
            timeline: "6 months".to_string(),
            notes: "Comparing with Audi A4. Very specific about features.".to_string(),
            score: LeadScore::Warm,
            intent: IntentLevel::High,
        },
        Lead {
            id: "4".to_string(),
            name: "Deepika Rao".to_string(),
            email: "deepika.rao@email.com".to_string(),
            phone: "+91 65432 10987".to_string(),
            platform: Platform::LinkedIn,
            status: LeadStatus::Qualified,
            assigned_to: "Vikash Kumar".to_string(),
            last_contacted: date(2024, 1, 16),
            date_received: date(2024, 1, 8),
            budget: "₹5-8 Lakhs".to_string(),
            model: "Maruti Swift".to_string(),
            timeline: "2 weeks".to_string(),
            notes: "Ready to buy, just needs final financing approval.".to_string(),
            score: LeadScore::Hot,
            intent: IntentLevel::High,
        },
        Lead {
            id: "5".to_string(),
            name: "Arjun Mehta".to_string(),
            email: "arjun.mehta@email.com".to_string(),
            phone: "+91 54321 09876".to_string(),
            platform: Platform::Referral,
            status: LeadStatus::NotInterested,
            assigned_to: "Priya Singh".to_string(),
            last_contacted: date(2024, 1, 11),
            date_received: date(2024, 1, 9),
            budget: "₹12-15 Lakhs".to_string(),
            model: "Hyundai Creta".to_string(),
            timeline: "Indefinite".to_string(),
            notes: "Decided to postpone purchase due to personal reasons.".to_string(),
            score: LeadScore::Cold,
            intent: IntentLevel::Low,
        },
    ]
}
