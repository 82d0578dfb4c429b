use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::session::SessionUser;

/// The `{success, message, ...}` envelope every mutating endpoint answers with.
///
/// Endpoint specific fields (for instance `user` on login) are kept in
/// `extra` so the body can be handed back to callers unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            extra: Map::new(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            extra: Map::new(),
        }
    }

    /// The session marker returned by `/api/login`, if the body carries a usable one.
    pub fn user(&self) -> Option<SessionUser> {
        self.extra
            .get("user")
            .filter(|v| v.is_object())
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_failure() {
        let resp: ApiResponse = serde_json::from_str("{}").unwrap();
        assert!(!resp.success);
        assert!(resp.message.is_empty());
    }

    #[test]
    fn extra_fields_are_preserved() {
        let body = r#"{"success":true,"message":"Login successful","user":{"id":7,"name":"Ada","username":"ada","role":"donor"}}"#;
        let resp: ApiResponse = serde_json::from_str(body).unwrap();
        assert!(resp.success);
        assert_eq!(resp.message, "Login successful");
        let user = resp.user().unwrap();
        assert_eq!(user.name.as_deref(), Some("Ada"));
        assert_eq!(user.role.as_deref(), Some("donor"));

        let back = serde_json::to_value(&resp).unwrap();
        assert_eq!(back["user"]["username"], "ada");
    }

    #[test]
    fn non_object_user_is_ignored() {
        let resp: ApiResponse =
            serde_json::from_str(r#"{"success":true,"message":"ok","user":"ada"}"#).unwrap();
        assert!(resp.user().is_none());
    }
}
