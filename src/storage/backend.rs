//! Credential store abstraction.
//!
//! This module defines the [`CredentialStore`] trait that abstracts over the
//! persistence backend holding the signed-in session. This allows the session
//! manager to be exercised against an in-memory store in tests without
//! touching the filesystem.
//!
//! # Design Philosophy
//!
//! The trait is minimal and shaped by the session manager's actual needs: one
//! record, saved and cleared as a whole. There is deliberately no partial
//! update — token and user profile always travel together.

use crate::domain::error::Result;
use crate::domain::user::Credential;

/// Abstraction over persistent credential storage.
///
/// Implementations hold at most one [`Credential`] record that survives
/// process restarts. All operations are synchronous from the caller's
/// perspective; no implementation performs network I/O.
///
/// # Implementations
///
/// - [`JsonCredentialStore`](crate::storage::JsonCredentialStore): one JSON
///   file with atomic writes (default)
pub trait CredentialStore: Send {
    /// Persists the credential, replacing any previous record.
    ///
    /// Token and user profile are written as a single serialized record so a
    /// crash can never leave one without the other.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized or written.
    fn save(&mut self, credential: &Credential) -> Result<()>;

    /// Loads the persisted credential, if any.
    ///
    /// Returns `None` when no record exists **or** when the stored data is
    /// malformed. A corrupt record is logged and treated as absent; it never
    /// fails the caller.
    fn load(&self) -> Option<Credential>;

    /// Removes any persisted credential.
    ///
    /// Idempotent: clearing an already-empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing record cannot be removed.
    fn clear(&mut self) -> Result<()>;
}
