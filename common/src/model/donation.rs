use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of `/api/recent-donations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentDonation {
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<Value>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl RecentDonation {
    /// Single line shown in the dashboard feed, e.g. `Alice donated 5 at Lab`.
    pub fn summary(&self) -> String {
        let donor = non_blank(self.donor_name.as_deref()).unwrap_or("Anonymous");
        let qty = match &self.quantity {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            _ => "?".to_string(),
        };
        match non_blank(self.location.as_deref()) {
            Some(location) => format!("{donor} donated {qty} at {location}"),
            None => format!("{donor} donated {qty}"),
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
