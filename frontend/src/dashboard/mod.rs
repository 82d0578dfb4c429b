//! Dashboard counters and the recent-donations feed.
//!
//! Both parts detect themselves by element presence: pages without the
//! counter ids or the `recentDonations` list make no request at all.

mod stats;

use common::model::donation::RecentDonation;
use common::model::stats::DashboardStats;
use common::requests::Endpoint;

use crate::{api, dom};

const COUNTER_IDS: [&str; 4] = ["mealsSaved", "donationsCount", "requestsCount", "eventsCount"];
const FEED_ID: &str = "recentDonations";

/// Re-fetches everything the current page displays. Never raises a toast.
pub async fn refresh() {
    if COUNTER_IDS.iter().any(|id| dom::element_by_id(id).is_some()) {
        refresh_counters().await;
    }
    if dom::element_by_id(FEED_ID).is_some() {
        refresh_feed().await;
    }
}

async fn refresh_counters() {
    let fetched = api::get_json::<DashboardStats>(Endpoint::DashboardStats).await.ok();
    for (id, text) in stats::counter_texts(fetched.as_ref()) {
        dom::set_text(id, &text);
    }
}

async fn refresh_feed() {
    let rows = api::get_json::<Vec<RecentDonation>>(Endpoint::RecentDonations).await.ok();
    let lines = stats::feed_lines(rows.as_deref());

    let (Some(document), Some(list)) = (dom::document(), dom::element_by_id(FEED_ID)) else {
        return;
    };
    list.set_text_content(None);
    for line in lines {
        if let Ok(item) = document.create_element("li") {
            item.set_text_content(Some(&line));
            list.append_child(&item).ok();
        }
    }
}
