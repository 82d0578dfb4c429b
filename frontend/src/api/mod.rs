//! JSON client for the Save N Serve backend.
//!
//! `post_json` surfaces every failure through the notifier itself and then
//! returns the error, so callers only have to skip their success path.
//! `get_json` is quiet: it logs but leaves the UI alone.

use common::model::response::ApiResponse;
use common::requests::{Endpoint, Method};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config;
use crate::error::ApiError;
use crate::notifier;

/// POSTs `payload` as JSON and returns the parsed body on success.
pub async fn post_json<T: Serialize>(
    endpoint: Endpoint,
    payload: &T,
) -> Result<ApiResponse, ApiError> {
    debug_assert_eq!(endpoint.method(), Method::Post, "{endpoint} is not a POST route");
    let url = config::current().url(endpoint);
    let result = send_post(&url, payload).await;
    if let Err(err) = &result {
        log_failure(endpoint, err);
        notifier::notify(&err.user_message(), true);
    }
    result
}

/// GETs `endpoint` and decodes the body as `T`. Failures are logged only.
pub async fn get_json<T: DeserializeOwned>(endpoint: Endpoint) -> Result<T, ApiError> {
    debug_assert_eq!(endpoint.method(), Method::Get, "{endpoint} is not a GET route");
    let url = config::current().url(endpoint);
    let result = send_get(&url).await;
    if let Err(err) = &result {
        log_failure(endpoint, err);
    }
    result
}

async fn send_post<T: Serialize>(url: &str, payload: &T) -> Result<ApiResponse, ApiError> {
    let response = Request::post(url)
        .header("Accept", "application/json")
        .json(payload)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .json::<ApiResponse>()
        .await
        .map_err(|e| e.to_string());
    classify(status, body)
}

async fn send_get<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    if !is_success(status) {
        let message = response
            .json::<ApiResponse>()
            .await
            .ok()
            .map(|body| body.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback_message(status));
        return Err(ApiError::Application { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Transport(format!("unreadable response: {e}")))
}

/// Sorts an HTTP answer into success, application failure or transport failure.
///
/// A 2xx body with `success: false` is an application failure too: the
/// backend reports some database errors that way.
pub fn classify(status: u16, body: Result<ApiResponse, String>) -> Result<ApiResponse, ApiError> {
    match body {
        Ok(resp) if is_success(status) && resp.success => Ok(resp),
        Ok(resp) => {
            let message = if resp.message.trim().is_empty() {
                fallback_message(status)
            } else {
                resp.message
            };
            Err(ApiError::Application { status, message })
        }
        Err(reason) if is_success(status) => {
            Err(ApiError::Transport(format!("unreadable response: {reason}")))
        }
        Err(_) => Err(ApiError::Application {
            status,
            message: fallback_message(status),
        }),
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn fallback_message(status: u16) -> String {
    if is_success(status) {
        "Request failed.".to_string()
    } else {
        format!("Request failed (HTTP {status})")
    }
}

fn log_failure(endpoint: Endpoint, err: &ApiError) {
    match err {
        ApiError::Transport(detail) => {
            gloo_console::error!(format!("{endpoint}: transport failure: {detail}"));
        }
        ApiError::Application { status, message } => {
            gloo_console::warn!(format!("{endpoint}: rejected with {status}: {message}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_is_returned_unchanged() {
        let body: ApiResponse =
            serde_json::from_str(r#"{"success":true,"message":"Saved","id":4}"#).unwrap();
        let resp = classify(200, Ok(body.clone())).unwrap();
        assert_eq!(resp, body);
    }

    #[test]
    fn conflict_surfaces_server_message() {
        let body = ApiResponse::failure("Username already exists.");
        let err = classify(409, Ok(body)).unwrap_err();
        assert_eq!(
            err,
            ApiError::Application {
                status: 409,
                message: "Username already exists.".into()
            }
        );
        assert_eq!(err.user_message(), "Username already exists.");
    }

    #[test]
    fn ok_status_with_failure_flag_is_application_error() {
        let body = ApiResponse::failure("Database error: duplicate entry");
        let err = classify(200, Ok(body)).unwrap_err();
        assert!(matches!(err, ApiError::Application { status: 200, .. }));
    }

    #[test]
    fn unreadable_bodies() {
        let err = classify(200, Err("expected value at line 1".into())).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.user_message(), "Connection error");

        let err = classify(502, Err("expected value".into())).unwrap_err();
        assert_eq!(err.user_message(), "Request failed (HTTP 502)");
    }

    #[test]
    fn blank_failure_message_gets_fallback() {
        let err = classify(401, Ok(ApiResponse::failure("  "))).unwrap_err();
        assert_eq!(err.user_message(), "Request failed (HTTP 401)");
    }

    #[test]
    fn dashboard_reads_use_get_routes() {
        for endpoint in [Endpoint::DashboardStats, Endpoint::RecentDonations] {
            assert_eq!(endpoint.method(), Method::Get, "{endpoint}");
        }
    }
}
