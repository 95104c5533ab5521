//! REST API client for the backend service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with the bearer
//! credential attached per call. Server-side (SSR): stubs returning
//! [`ApiError::Unsupported`] since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call is a single logical attempt: transport failures are retried a
//! bounded number of times, then the error propagates to the caller, which
//! decides whether to surface it or only log it. Non-2xx responses carry the
//! server-provided `message`/`error` payload; undecodable bodies are
//! rejected instead of leaking partial data into the UI.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, Project, User};

#[cfg(feature = "hydrate")]
use super::types::{GenerateResponse, ProjectResponse, ProjectsResponse, UsersResponse};

/// Failure surfaced by a REST call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network/transport failure).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
    /// The response body did not match the expected schema.
    #[error("malformed response body: {0}")]
    Decode(String),
    /// Called outside a browser environment.
    #[error("not available on the server")]
    Unsupported,
}

/// Base location of the backend, without a trailing slash.
///
/// A compile-time `SEARCHIFI_API_BASE` override wins; otherwise requests go
/// against the page origin.
#[must_use]
pub fn api_base() -> String {
    if let Some(base) = option_env!("SEARCHIFI_API_BASE") {
        return base.trim_end_matches('/').to_owned();
    }
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

pub(crate) fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}

/// Extract a human-readable message from an error response body.
///
/// Prefers a JSON `message` field, then `error`, then the raw body.
#[must_use]
pub fn server_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = value.get("message").and_then(|v| v.as_str()) {
            return msg.to_owned();
        }
        if let Some(msg) = value.get("error").and_then(|v| v.as_str()) {
            return msg.to_owned();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "request failed".to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(feature = "hydrate")]
const RETRY_ATTEMPTS: u32 = 3;
#[cfg(feature = "hydrate")]
const RETRY_STEP_MS: u32 = 400;

/// Attach the stored bearer credential, when one exists.
#[cfg(feature = "hydrate")]
fn authorized(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::storage::token() {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

/// Issue a request, retrying transport failures with linear backoff.
///
/// Server responses are returned as-is regardless of status; only requests
/// that never reached the server are retried.
#[cfg(feature = "hydrate")]
async fn send_with_retry<F, Fut>(send: F) -> Result<gloo_net::http::Response, ApiError>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
{
    let mut last = None;
    for attempt in 1..=RETRY_ATTEMPTS {
        match send().await {
            Ok(resp) => return Ok(resp),
            Err(e) => {
                leptos::logging::warn!("request attempt {attempt} failed: {e}");
                last = Some(e);
            }
        }
        if attempt < RETRY_ATTEMPTS {
            let delay = u64::from(attempt * RETRY_STEP_MS);
            gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
        }
    }
    Err(ApiError::Transport(
        last.map(|e| e.to_string()).unwrap_or_default(),
    ))
}

#[cfg(feature = "hydrate")]
async fn decode<T>(resp: gloo_net::http::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    if !resp.ok() {
        return Err(server_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn expect_ok(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(server_error(resp).await)
    }
}

#[cfg(feature = "hydrate")]
async fn server_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Server { status, message: server_error_message(&body) }
}

/// Register a new account via `POST /users/register`.
///
/// # Errors
///
/// Propagates transport, server, and decode failures as [`ApiError`].
pub async fn register(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url("/users/register");
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = send_with_retry(|| async {
            authorized(gloo_net::http::Request::post(&url))
                .json(&body)?
                .send()
                .await
        })
        .await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unsupported)
    }
}

/// Log in via `POST /users/login`.
///
/// # Errors
///
/// Propagates transport, server, and decode failures as [`ApiError`].
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url("/users/login");
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = send_with_retry(|| async {
            authorized(gloo_net::http::Request::post(&url))
                .json(&body)?
                .send()
                .await
        })
        .await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unsupported)
    }
}

/// Fetch every selectable collaborator via `GET /users/all`.
///
/// # Errors
///
/// Propagates transport, server, and decode failures as [`ApiError`].
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url("/users/all");
        let resp = send_with_retry(|| async {
            authorized(gloo_net::http::Request::get(&url)).send().await
        })
        .await?;
        Ok(decode::<UsersResponse>(resp).await?.users)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unsupported)
    }
}

/// Fetch the caller's project list via `GET /projects/all`.
///
/// # Errors
///
/// Propagates transport, server, and decode failures as [`ApiError`].
pub async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url("/projects/all");
        let resp = send_with_retry(|| async {
            authorized(gloo_net::http::Request::get(&url)).send().await
        })
        .await?;
        Ok(decode::<ProjectsResponse>(resp).await?.projects)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unsupported)
    }
}

/// Create a project via `POST /projects/create`.
///
/// # Errors
///
/// Propagates transport, server, and decode failures as [`ApiError`].
pub async fn create_project(name: &str) -> Result<Project, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url("/projects/create");
        let body = serde_json::json!({ "name": name });
        let resp = send_with_retry(|| async {
            authorized(gloo_net::http::Request::post(&url))
                .json(&body)?
                .send()
                .await
        })
        .await?;
        Ok(decode::<ProjectResponse>(resp).await?.project)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        Err(ApiError::Unsupported)
    }
}

/// Delete a project via `DELETE /projects/{id}/delete`.
///
/// # Errors
///
/// Propagates transport and server failures as [`ApiError`].
pub async fn delete_project(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/projects/{id}/delete"));
        let resp = send_with_retry(|| async {
            authorized(gloo_net::http::Request::delete(&url)).send().await
        })
        .await?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unsupported)
    }
}

/// Fetch one project's detail via `GET /projects/get-project/{id}`.
///
/// # Errors
///
/// Propagates transport, server, and decode failures as [`ApiError`].
pub async fn fetch_project(id: &str) -> Result<Project, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/projects/get-project/{id}"));
        let resp = send_with_retry(|| async {
            authorized(gloo_net::http::Request::get(&url)).send().await
        })
        .await?;
        Ok(decode::<ProjectResponse>(resp).await?.project)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unsupported)
    }
}

/// Grant project membership to a set of users via `PUT /projects/add-user`.
///
/// One combined request for the whole selection; there is no per-user
/// confirmation or partial-failure handling.
///
/// # Errors
///
/// Propagates transport and server failures as [`ApiError`].
pub async fn add_collaborators(project_id: &str, users: &[String]) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url("/projects/add-user");
        let body = serde_json::json!({ "projectId": project_id, "users": users });
        let resp = send_with_retry(|| async {
            authorized(gloo_net::http::Request::put(&url))
                .json(&body)?
                .send()
                .await
        })
        .await?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, users);
        Err(ApiError::Unsupported)
    }
}

/// Ask the AI code generator for a completion via `POST /api/generate`.
///
/// # Errors
///
/// Propagates transport, server, and decode failures as [`ApiError`].
pub async fn generate_code(prompt: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url("/api/generate");
        let body = serde_json::json!({ "prompt": prompt });
        let resp = send_with_retry(|| async {
            authorized(gloo_net::http::Request::post(&url))
                .json(&body)?
                .send()
                .await
        })
        .await?;
        Ok(decode::<GenerateResponse>(resp).await?.result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prompt;
        Err(ApiError::Unsupported)
    }
}
