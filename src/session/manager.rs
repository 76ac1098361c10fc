//! Session lifecycle management.
//!
//! This module owns the authentication state of the client: the persisted
//! [`Credential`], the transient login `loading` flag, and the last login
//! error. It bridges the credential store, the API client, and the flow
//! layer. Whether a session exists is always derived from credential
//! presence; no separate boolean can disagree with it.
//!
//! # Lifecycle
//!
//! 1. **Startup**: any persisted credential is loaded and the session starts
//!    authenticated without a network call. The token is optimistic — its
//!    validity is only tested when a real request returns unauthorized.
//! 2. **Login**: one outstanding login at a time (`loading`), credential set
//!    in memory and persisted atomically on success, error recorded on
//!    failure with any existing credential left untouched.
//! 3. **Logout**: clears memory and store unconditionally; idempotent.

use std::sync::Arc;

use crate::api::client::InspectionApi;
use crate::domain::error::{LiftscanError, Result};
use crate::domain::inspection::{InspectionRecord, SearchMethod};
use crate::domain::user::{Credential, UserProfile};
use crate::storage::backend::CredentialStore;

/// Owner of the authentication token and user profile.
///
/// Passed explicitly to call sites that need authenticated requests; there is
/// no ambient singleton. The `&mut self` receivers on `login`/`logout`
/// serialize session mutations without any locking.
pub struct SessionManager {
    /// Client used for remote calls.
    api: Arc<dyn InspectionApi>,

    /// Durable store for the credential record.
    store: Box<dyn CredentialStore>,

    /// Current session, `None` when signed out.
    credential: Option<Credential>,

    /// Whether a login request is in flight.
    loading: bool,

    /// Message of the most recent login failure, cleared on each attempt.
    last_error: Option<String>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("credential", &self.credential)
            .field("loading", &self.loading)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Creates a session manager, restoring any persisted session.
    ///
    /// A credential found in the store makes the session authenticated
    /// immediately, with no network validation.
    pub fn new(api: Arc<dyn InspectionApi>, store: Box<dyn CredentialStore>) -> Self {
        let credential = store.load();
        if let Some(ref cred) = credential {
            tracing::info!(username = %cred.user.username, "restored persisted session");
        }

        Self {
            api,
            store,
            credential,
            loading: false,
            last_error: None,
        }
    }

    /// Whether a session exists; derived purely from credential presence.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// Profile of the signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.credential.as_ref().map(|c| &c.user)
    }

    /// Whether a login request is in flight.
    ///
    /// The UI disables submission controls while this is set, which is what
    /// keeps authentication operations serialized.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Message of the most recent login failure, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Authenticates against the remote service.
    ///
    /// On success the credential is set in memory and persisted as one
    /// record. On failure the error message is recorded in
    /// [`last_error`](Self::last_error) and any existing credential is left
    /// untouched. The `loading` flag is cleared on every exit path.
    ///
    /// # Errors
    ///
    /// Returns the classified failure from the API layer, most commonly
    /// [`LiftscanError::Auth`] for rejected credentials or
    /// [`LiftscanError::Network`] when the service is unreachable.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        self.loading = true;
        self.last_error = None;

        let outcome = self.api.login(username, password).await;
        // Single release point: nothing between the await and here can
        // return, so `loading` cannot get stuck true.
        self.loading = false;

        match outcome {
            Ok(auth) => {
                let credential = Credential::new(auth.access_token, auth.user);
                if let Err(e) = self.store.save(&credential) {
                    // The session is still usable in memory; it just won't
                    // survive a restart.
                    tracing::warn!(error = %e, "failed to persist credential");
                }
                tracing::info!(username = %credential.user.username, "login succeeded");
                self.credential = Some(credential);
                Ok(())
            }
            Err(e) => {
                tracing::info!(error = %e, "login failed");
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Signs out, clearing the in-memory credential and the store.
    ///
    /// Unconditional and idempotent: signing out of an already-signed-out
    /// session is a no-op, and a store failure is logged rather than
    /// propagated so logout always completes.
    pub fn logout(&mut self) {
        self.credential = None;
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear persisted credential");
        }
        tracing::info!("signed out");
    }

    /// Fetches the latest inspection record using the current session token.
    ///
    /// # Errors
    ///
    /// Returns [`LiftscanError::Auth`] without a network call when no session
    /// exists, otherwise the classified failure from the API layer.
    pub async fn search(&self, method: SearchMethod, value: &str) -> Result<InspectionRecord> {
        let Some(credential) = self.credential.as_ref() else {
            return Err(LiftscanError::Auth("not signed in".to_string()));
        };

        self.api
            .fetch_latest_inspection(method, value, &credential.token)
            .await
    }
}
