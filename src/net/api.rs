//! REST API calls for authentication and session state.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` through the shared
//! `http` configuration. Server-side (SSR): stubs returning `None`/error
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Fallible calls resolve to a single user-displayable message: the server's
//! structured `message` field when one is present, otherwise a generic
//! fallback. Callers never see a panic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, SignupRequest, User};

/// Fallback shown when the server gives no usable error message.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Pull the `message` field out of a structured error body, if any.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
}

#[cfg(feature = "hydrate")]
async fn displayable_error(resp: gloo_net::http::Response) -> String {
    let body = resp.text().await.unwrap_or_default();
    error_message_from_body(&body).unwrap_or_else(|| GENERIC_ERROR.to_owned())
}

/// Register a new account via `POST /auth/signup`.
///
/// # Errors
///
/// Returns the server's `message` when the response carries one, or the
/// generic fallback for transport failures and unstructured errors.
pub async fn signup(payload: &SignupRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::post("/auth/signup")
            .json(payload)
            .map_err(|_| GENERIC_ERROR.to_owned())?
            .send()
            .await
            .map_err(|_| GENERIC_ERROR.to_owned())?;
        if resp.ok() {
            return Ok(());
        }
        Err(displayable_error(resp).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(GENERIC_ERROR.to_owned())
    }
}

/// Sign in via `POST /auth/login`, returning the authenticated user.
///
/// # Errors
///
/// Returns the server's `message` when the response carries one, or the
/// generic fallback for transport failures and unstructured errors.
pub async fn login(payload: &LoginRequest) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::post("/auth/login")
            .json(payload)
            .map_err(|_| GENERIC_ERROR.to_owned())?
            .send()
            .await
            .map_err(|_| GENERIC_ERROR.to_owned())?;
        if !resp.ok() {
            return Err(displayable_error(resp).await);
        }
        resp.json::<User>()
            .await
            .map_err(|_| GENERIC_ERROR.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(GENERIC_ERROR.to_owned())
    }
}

/// Fetch the current cookie-session user from `/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::get("/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the current session via `POST /auth/logout`. Best-effort.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(err) = super::http::post("/auth/logout").send().await {
            log::warn!("logout request failed: {err}");
        }
    }
}
