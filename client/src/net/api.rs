//! REST API helpers for the users and books services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so a failed fetch
//! degrades into a displayed message without crashing hydration. Each call is
//! issued once; there is no retry, caching, or cancellation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Book, Session, UserProfile};
use crate::config::ApiConfig;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;

/// Password-grant form body expected by the token endpoint.
#[cfg(any(test, feature = "hydrate"))]
fn login_form_body(username: &str, password: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("grant_type", "password")
        .append_pair("username", username)
        .append_pair("password", password)
        .append_pair("scope", "")
        .finish()
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

/// Map a non-2xx response to `ApiError::Status`, keeping any server message.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message);
    ApiError::Status { status, message }
}

/// Reject absent or blank tokens before any request is built.
fn require_token(access_token: Option<&str>) -> Result<&str, ApiError> {
    access_token
        .filter(|t| !t.trim().is_empty())
        .ok_or(ApiError::MissingToken)
}

/// Exchange credentials for a session via `POST {BACKEND_API_URL}/token`.
///
/// # Errors
///
/// Returns `ApiError::Status` (with the server's message when it sent one) on
/// rejected credentials, `Network`/`Decode` on transport or body failures.
pub async fn login(config: &ApiConfig, username: &str, password: &str) -> Result<Session, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.token_endpoint())
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(login_form_body(username, password))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(status_error(resp.status(), &body));
        }
        resp.json::<Session>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, username, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the whole collection from `GET {BOOKS_API_URL}` with a bearer token.
///
/// # Errors
///
/// Returns `ApiError::MissingToken` without touching the network when no
/// token is supplied; otherwise any transport, status, or decode failure.
pub async fn fetch_books(config: &ApiConfig, access_token: Option<&str>) -> Result<Vec<Book>, ApiError> {
    let token = require_token(access_token)?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.books_api_url)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(status_error(resp.status(), &body));
        }
        resp.json::<Vec<Book>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in user from `GET {BACKEND_API_URL}/users/profile`.
///
/// # Errors
///
/// Same failure modes as [`fetch_books`].
pub async fn fetch_profile(config: &ApiConfig, access_token: Option<&str>) -> Result<UserProfile, ApiError> {
    let token = require_token(access_token)?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.profile_endpoint())
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(status_error(resp.status(), &body));
        }
        resp.json::<UserProfile>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}
