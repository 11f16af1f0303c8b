//! Shared HTTP request configuration for the journal API.
//!
//! DESIGN
//! ======
//! Every remote call goes through this module so the base URL, JSON content
//! type, and cookie-credential policy stay identical across the client. No
//! retry, timeout, or response interception happens here; callers see
//! transport failures as-is.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

/// Base URL of the journal backend API.
pub const BASE_URL: &str = "https://travelog-backend.onrender.com/api";

/// Join an endpoint path onto the configured base URL.
#[cfg(any(test, feature = "hydrate"))]
pub fn join_url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

/// Build a `GET` request against the API with the shared configuration.
#[cfg(feature = "hydrate")]
pub fn get(path: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::get(&join_url(path))
        .credentials(web_sys::RequestCredentials::Include)
}

/// Build a `POST` request against the API with the shared configuration.
///
/// The JSON content type is set up front; body-less posts (logout) still
/// advertise it, matching the backend's expectations.
#[cfg(feature = "hydrate")]
pub fn post(path: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::post(&join_url(path))
        .credentials(web_sys::RequestCredentials::Include)
        .header("Content-Type", "application/json")
}
