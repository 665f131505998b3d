//! HTTP helpers for the console API with consistent timeouts and error handling.
//! Feature clients use these helpers to avoid duplicating request setup and to
//! enforce a predictable timeout policy. The helpers never store tokens; they
//! only attach the bearer token handed in by the caller.

use super::{
    config::AppConfig,
    endpoint::{bearer_headers, build_url_with_base, sanitize_body},
    errors::AppError,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Fetches JSON, optionally authenticated with a bearer token.
pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, AppError> {
    let url = build_url(path);
    tracing::debug!(method = "GET", path, "sending request");
    let response = send_with_timeout(|signal| {
        with_headers(Request::get(&url), token)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(path, response).await
}

/// Posts a JSON body and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    tracing::debug!(method = "POST", path, "sending request");
    let response = send_with_timeout(move |signal| {
        with_headers(Request::post(&url), token)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(path, response).await
}

/// Posts without a request body and parses a JSON response. Used by endpoints
/// that act on the bearer identity alone (MFA enrollment, AWS sessions).
pub async fn post_json_without_body<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, AppError> {
    let url = build_url(path);
    tracing::debug!(method = "POST", path, "sending request");
    let response = send_with_timeout(move |signal| {
        with_headers(Request::post(&url), token)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(path, response).await
}

/// Sends a JSON PATCH and parses the JSON response.
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    tracing::debug!(method = "PATCH", path, "sending request");
    let response = send_with_timeout(move |signal| {
        with_headers(Request::patch(&url), token)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(path, response).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

fn with_headers(mut builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    for (name, value) in bearer_headers(token) {
        builder = builder.header(&name, &value);
    }
    builder
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(|err| {
        let err = map_request_error(err);
        tracing::warn!(error = %err, "request did not complete");
        err
    })
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(
    path: &str,
    response: Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status, path, "request rejected");
        Err(AppError::Http {
            status,
            message: sanitize_body(&body, &status_text),
        })
    }
}
