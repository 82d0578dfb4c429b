use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Minimal identity stored in the browser after a successful login.
///
/// This is a UI hint only (greeting, role-dependent links), never an
/// authorization token. Whatever else the server sent is kept in `extra`
/// so the stored marker matches the login response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionUser {
    /// Name to greet the user with: display name, then username.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.username.as_deref().filter(|n| !n.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_username() {
        let user: SessionUser =
            serde_json::from_str(r#"{"id":1,"name":" ","username":"sam"}"#).unwrap();
        assert_eq!(user.display_name(), Some("sam"));

        let nobody = SessionUser::default();
        assert_eq!(nobody.display_name(), None);
    }

    #[test]
    fn unknown_columns_round_trip() {
        let raw = r#"{"id":3,"name":"Kim","role":"ngo","created_at":"2024-01-01"}"#;
        let user: SessionUser = serde_json::from_str(raw).unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["created_at"], "2024-01-01");
        assert_eq!(json["id"], 3);
        assert!(json.get("username").is_none());
    }
}
