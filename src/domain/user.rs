//! User profile and credential domain models.
//!
//! This module defines the signed-in user's profile as returned by the
//! authentication endpoint, and the [`Credential`] record that pairs the
//! bearer token with that profile. The credential is the unit of persistence:
//! token and user are always written and cleared together, never separately.

use serde::{Deserialize, Serialize};

/// Profile of the currently signed-in user.
///
/// Opaque to the core beyond display: no identity logic depends on these
/// fields. Wire names are camelCase, matching the remote service contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Server-side user identifier.
    pub id: i64,

    /// Login name shown in the session header.
    pub username: String,

    /// Contact email, if one is on file.
    pub email: Option<String>,

    /// Access level assigned by the backend; displayed, never interpreted.
    pub user_level: i32,

    /// Client organisation the inspector belongs to.
    pub client_id: Option<i64>,

    /// Site the inspector is assigned to.
    pub site_id: Option<i64>,

    /// Section within the site.
    pub section_id: Option<i64>,
}

/// The authentication token plus the profile of the signed-in user.
///
/// Owned exclusively by the session manager and persisted as a single
/// serialized record. Absence of a credential means unauthenticated; there is
/// no state where a token exists without its user or vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Bearer token attached to authenticated requests.
    pub token: String,

    /// Profile of the user the token belongs to.
    pub user: UserProfile,
}

impl Credential {
    /// Creates a credential from a token and the matching user profile.
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}
