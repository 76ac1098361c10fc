//! Wire types for the remote inspection service.
//!
//! This module defines the request and response payloads exchanged with the
//! backend, separate from domain models so the wire contract can evolve
//! without leaking into business logic. Field names follow the service's
//! JSON conventions (`access_token` on the auth response, camelCase on
//! profile fields).

use crate::domain::user::UserProfile;
use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Login name entered by the inspector.
    pub username: &'a str,

    /// Password entered by the inspector.
    pub password: &'a str,
}

/// Successful response from `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent authenticated requests.
    pub access_token: String,

    /// Profile of the authenticated user.
    pub user: UserProfile,
}

/// Error body the service attaches to non-success responses.
///
/// The `message` field is optional by contract; when it is missing or the
/// body is not JSON at all, the client falls back to a generic status-based
/// message.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description, when the service provides one.
    pub message: Option<String>,
}
