use chrono::NaiveDate;
use shared_types::{
    DashboardMetrics, Lead, LeadScore, LeadStatus, PlatformCount, ScoreCount, StatusCount,
    TeamMemberStats, TrendPoint,
};

/// Build dashboard statistics from the current snapshot.
///
/// Distribution rows appear in first-appearance order of the data; the
/// team table covers exactly the given roster, in roster order.
pub fn aggregate(leads: &[Lead], sales_team: &[String]) -> DashboardMetrics {
    let total = leads.len() as u32;

    let count_status =
        |status: LeadStatus| leads.iter().filter(|l| l.status == status).count() as u32;

    let qualified_leads = count_status(LeadStatus::Qualified);

    let by_status = tally(leads, |l| l.status)
        .into_iter()
        .map(|(status, count)| StatusCount {
            status,
            count,
            percentage: percentage(count, total),
        })
        .collect();

    let by_platform = tally(leads, |l| l.platform)
        .into_iter()
        .map(|(platform, count)| PlatformCount {
            platform,
            count,
            percentage: percentage(count, total),
        })
        .collect();

    let by_score = tally(leads, |l| l.score)
        .into_iter()
        .map(|(score, count)| ScoreCount {
            score,
            count,
            percentage: percentage(count, total),
        })
        .collect();

    let team = sales_team
        .iter()
        .map(|member| {
            let lead_count = leads.iter().filter(|l| &l.assigned_to == member).count() as u32;
            let conversions = leads
                .iter()
                .filter(|l| {
                    &l.assigned_to == member
                        && matches!(l.status, LeadStatus::Qualified | LeadStatus::Closed)
                })
                .count() as u32;

            TeamMemberStats {
                member: member.clone(),
                lead_count,
                conversions,
                conversion_rate: percentage(conversions, lead_count),
            }
        })
        .collect();

    DashboardMetrics {
        total,
        new_leads: count_status(LeadStatus::New),
        interested_leads: count_status(LeadStatus::Interested),
        qualified_leads,
        closed_leads: count_status(LeadStatus::Closed),
        hot_leads: leads.iter().filter(|l| l.score == LeadScore::Hot).count() as u32,
        conversion_rate: percentage(qualified_leads, total),
        by_status,
        by_platform,
        by_score,
        team,
    }
}

/// Fixed seven-day series backing the dashboard trend chart.
///
/// Per-day intake is not recorded yet, so the chart runs on the demo
/// week matching the sample dataset.
pub fn daily_trend() -> Vec<TrendPoint> {
    let week = [
        (10, 2, 0),
        (11, 1, 0),
        (12, 1, 0),
        (13, 0, 1),
        (14, 1, 0),
        (15, 0, 1),
        (16, 0, 1),
    ];

    week.into_iter()
        .map(|(day, leads, conversions)| TrendPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default(),
            leads,
            conversions,
        })
        .collect()
}

/// Count leads per distinct key, keeping first-appearance order.
fn tally<K: Copy + PartialEq>(leads: &[Lead], key: impl Fn(&Lead) -> K) -> Vec<(K, u32)> {
    let mut counts: Vec<(K, u32)> = Vec::new();
    for lead in leads {
        let k = key(lead);
        match counts.iter_mut().find(|(seen, _)| *seen == k) {
            Some((_, count)) => *count += 1,
            None => counts.push((k, 1)),
        }
    }
    counts
}

/// Share of total as a whole percentage, rounded half-up. Zero when the
/// total is zero.
fn percentage(count: u32, total: u32) -> u32 {
    if total == 0 {
        0
    } else {
        (f64::from(count) * 100.0 / f64::from(total)).round() as u32
    }
}
