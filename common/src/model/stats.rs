use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Aggregate counters served by `/api/dashboard-stats`.
///
/// Every counter is normalized to a non-negative integer on the way in, so a
/// partially broken payload still renders sensible numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "lenient_count")]
    pub meals_saved: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub donations_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub requests_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub events_count: u64,
}

impl DashboardStats {
    /// Counter values keyed by their wire name, in display order.
    pub fn counters(&self) -> [(&'static str, u64); 4] {
        [
            ("mealsSaved", self.meals_saved),
            ("donationsCount", self.donations_count),
            ("requestsCount", self.requests_count),
            ("eventsCount", self.events_count),
        ]
    }
}

/// Accepts numbers, numeric strings and null; anything negative or unusable is 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

fn count_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u
            } else if let Some(f) = n.as_f64() {
                if f.is_finite() && f > 0.0 { f.trunc() as u64 } else { 0 }
            } else {
                0
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && *f > 0.0)
            .map(|f| f.trunc() as u64)
            .unwrap_or(0),
        _ => 0,
    }
}
