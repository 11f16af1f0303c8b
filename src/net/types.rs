//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's auth payloads field-for-field so serde
//! round-trips stay lossless.

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/auth/me` and `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name chosen at sign-up.
    pub username: String,
    /// Account email address.
    pub email: String,
}

/// Payload for `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Display name; the backend stores it as `username`.
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Payload for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
