//! What happens after a submission settles.
//!
//! Planning is pure: it maps an outcome to a list of [`Effect`]s, which the
//! binder then applies to the page in order.

use common::model::response::ApiResponse;
use common::model::session::SessionUser;

use super::specs::{FormKind, FormSpec};
use crate::error::{ApiError, ValidationError};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ResetForm,
    Notify { message: String, is_error: bool },
    RefreshDashboard,
    StoreSession(SessionUser),
    Navigate { page: &'static str, delay_ms: u32 },
}

const DEFAULT_SUCCESS: &str = "Submitted successfully.";

/// Validation failures never reach the network; they only raise an error toast.
pub fn plan_invalid(err: &ValidationError) -> Vec<Effect> {
    vec![Effect::Notify {
        message: err.to_string(),
        is_error: true,
    }]
}

/// Effects for a settled request. Failures were already surfaced by the API
/// client, so the form is left untouched for the user to correct.
pub fn plan(
    spec: &FormSpec,
    outcome: &Result<ApiResponse, ApiError>,
    redirect_delay_ms: u32,
) -> Vec<Effect> {
    match outcome {
        Ok(response) => plan_success(spec, response, redirect_delay_ms),
        Err(_) => Vec::new(),
    }
}

fn plan_success(spec: &FormSpec, response: &ApiResponse, redirect_delay_ms: u32) -> Vec<Effect> {
    let mut effects = Vec::new();

    if spec.kind == FormKind::Login {
        if let Some(user) = response.user() {
            effects.push(Effect::StoreSession(user));
        }
        if let Some(page) = spec.follow_up {
            effects.push(Effect::Navigate { page, delay_ms: 0 });
        }
        return effects;
    }

    effects.push(Effect::ResetForm);
    let message = if response.message.trim().is_empty() {
        DEFAULT_SUCCESS.to_string()
    } else {
        response.message.clone()
    };
    effects.push(Effect::Notify {
        message,
        is_error: false,
    });
    if spec.refreshes_dashboard() {
        effects.push(Effect::RefreshDashboard);
    }
    if let Some(page) = spec.follow_up {
        effects.push(Effect::Navigate {
            page,
            delay_ms: redirect_delay_ms,
        });
    }
    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::specs::{find, FORMS};

    fn ok(message: &str) -> Result<ApiResponse, ApiError> {
        Ok(ApiResponse::ok(message))
    }

    #[test]
    fn donation_success_resets_notifies_refreshes_and_redirects() {
        let spec = find("donationForm").unwrap();
        let effects = plan(spec, &ok("Saved"), 1500);
        assert_eq!(
            effects,
            vec![
                Effect::ResetForm,
                Effect::Notify {
                    message: "Saved".into(),
                    is_error: false
                },
                Effect::RefreshDashboard,
                Effect::Navigate {
                    page: "dashboard.html",
                    delay_ms: 1500
                },
            ]
        );
    }

    #[test]
    fn signup_conflict_leaves_form_alone() {
        let spec = find("signupForm").unwrap();
        let outcome = Err(ApiError::Application {
            status: 409,
            message: "Username already exists.".into(),
        });
        assert!(plan(spec, &outcome, 1500).is_empty());
    }

    #[test]
    fn transport_failure_leaves_every_form_populated() {
        let outcome = Err(ApiError::Transport("offline".into()));
        for spec in FORMS {
            assert!(plan(spec, &outcome, 1500).is_empty(), "{}", spec.form_id);
        }
    }

    #[test]
    fn every_standard_success_resets() {
        for spec in FORMS.iter().filter(|f| f.kind == FormKind::Standard) {
            let effects = plan(spec, &ok("done"), 1500);
            assert_eq!(effects.first(), Some(&Effect::ResetForm), "{}", spec.form_id);
        }
    }

    #[test]
    fn feedback_success_has_no_refresh_or_redirect() {
        let spec = find("contactForm").unwrap();
        let effects = plan(spec, &ok(""), 1500);
        assert_eq!(
            effects,
            vec![
                Effect::ResetForm,
                Effect::Notify {
                    message: "Submitted successfully.".into(),
                    is_error: false
                },
            ]
        );
    }

    #[test]
    fn login_stores_user_and_leaves_immediately() {
        let spec = find("loginForm").unwrap();
        let body: ApiResponse = serde_json::from_str(
            r#"{"success":true,"message":"Login successful","user":{"id":1,"name":"Ada","role":"donor"}}"#,
        )
        .unwrap();
        let effects = plan(spec, &Ok(body.clone()), 1500);
        assert_eq!(
            effects,
            vec![
                Effect::StoreSession(body.user().unwrap()),
                Effect::Navigate {
                    page: "dashboard.html",
                    delay_ms: 0
                },
            ]
        );
        assert!(!effects.contains(&Effect::RefreshDashboard));
    }

    #[test]
    fn invalid_submission_only_notifies() {
        let effects = plan_invalid(&ValidationError::MissingField { field: "qty" });
        assert_eq!(
            effects,
            vec![Effect::Notify {
                message: "Fill all fields".into(),
                is_error: true
            }]
        );
    }
}
