use common::model::donation::RecentDonation;
use common::model::stats::DashboardStats;

pub const EMPTY_FEED: &str = "No recent donations yet.";

/// Text for each counter element. A failed fetch renders every counter as 0.
pub fn counter_texts(stats: Option<&DashboardStats>) -> Vec<(&'static str, String)> {
    stats
        .copied()
        .unwrap_or_default()
        .counters()
        .iter()
        .map(|(id, value)| (*id, value.to_string()))
        .collect()
}

/// Lines of the recent-donations feed, with a placeholder when there is nothing to show.
pub fn feed_lines(rows: Option<&[RecentDonation]>) -> Vec<String> {
    match rows {
        Some(rows) if !rows.is_empty() => rows.iter().map(RecentDonation::summary).collect(),
        _ => vec![EMPTY_FEED.to_string()],
    }
}
