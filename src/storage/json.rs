//! JSON file-based credential store.
//!
//! This module provides a simple, human-readable persistence implementation
//! using JSON serialization. It uses atomic file writes (write-to-temp +
//! rename) to prevent corruption on crashes, and treats unreadable or
//! malformed content as "no session" rather than an error: a damaged file
//! must never crash the caller or block a fresh login.

use crate::domain::error::{LiftscanError, Result};
use crate::domain::user::Credential;
use crate::storage::backend::CredentialStore;
use std::path::PathBuf;

/// Well-known filename of the persisted credential record.
pub const CREDENTIAL_FILE: &str = "credential.json";

/// JSON file credential store.
///
/// Stores the signed-in session as a single JSON record with atomic writes.
///
/// # File Format
///
/// ```json
/// {
///   "token": "tok-A",
///   "user": {
///     "id": 1,
///     "username": "inspector1",
///     "email": null,
///     "userLevel": 2,
///     "clientId": 7,
///     "siteId": null,
///     "sectionId": null
///   }
/// }
/// ```
pub struct JsonCredentialStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonCredentialStore {
    /// Creates a credential store backed by the given file path.
    ///
    /// Parent directories are created automatically. The file itself is only
    /// created on the first [`save`](CredentialStore::save).
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing credential store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self { file_path })
    }

    /// Creates a store at the default location under the app data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open_default() -> Result<Self> {
        Self::new(crate::infrastructure::paths::data_dir().join(CREDENTIAL_FILE))
    }
}

impl CredentialStore for JsonCredentialStore {
    fn save(&mut self, credential: &Credential) -> Result<()> {
        let _span = tracing::debug_span!("credential_save",
            username = %credential.user.username
        )
        .entered();

        let json = serde_json::to_string_pretty(credential)
            .map_err(|e| LiftscanError::Storage(format!("failed to serialize credential: {e}")))?;

        // Temp-file + rename keeps the record whole even if the process dies
        // mid-write.
        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("credential saved");
        Ok(())
    }

    fn load(&self) -> Option<Credential> {
        let _span = tracing::debug_span!("credential_load", path = ?self.file_path).entered();

        let contents = match std::fs::read_to_string(&self.file_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no persisted credential");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted credential, treating as absent");
                return None;
            }
        };

        match serde_json::from_str::<Credential>(&contents) {
            Ok(credential) => {
                tracing::debug!(username = %credential.user.username, "credential loaded");
                Some(credential)
            }
            Err(e) => {
                tracing::warn!(error = %e, "persisted credential is malformed, treating as absent");
                None
            }
        }
    }

    fn clear(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("credential_clear", path = ?self.file_path).entered();

        match std::fs::remove_file(&self.file_path) {
            Ok(()) => {
                tracing::debug!("credential cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserProfile;
    use tempfile::TempDir;

    fn profile() -> UserProfile {
        UserProfile {
            id: 1,
            username: "inspector1".to_string(),
            email: None,
            user_level: 2,
            client_id: Some(7),
            site_id: None,
            section_id: None,
        }
    }

    fn store_in(dir: &TempDir) -> JsonCredentialStore {
        JsonCredentialStore::new(dir.path().join(CREDENTIAL_FILE))
            .expect("store should initialize in temp dir")
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = store_in(&dir);

        let credential = Credential::new("tok-A", profile());
        store.save(&credential).expect("save should succeed");

        assert_eq!(store.load(), Some(credential));
    }

    #[test]
    fn load_without_file_is_absent() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);

        assert_eq!(store.load(), None);
    }

    #[test]
    fn clear_then_load_is_absent() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = store_in(&dir);

        store
            .save(&Credential::new("tok-A", profile()))
            .expect("save should succeed");
        store.clear().expect("clear should succeed");

        assert_eq!(store.load(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = store_in(&dir);

        store.clear().expect("clearing empty store should succeed");
        store.clear().expect("second clear should also succeed");
    }

    #[test]
    fn malformed_file_degrades_to_absent() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join(CREDENTIAL_FILE);
        std::fs::write(&path, "{ not json").expect("write corrupt file");

        let store = JsonCredentialStore::new(path).expect("store should initialize");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_replaces_previous_record() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = store_in(&dir);

        store
            .save(&Credential::new("tok-A", profile()))
            .expect("first save");
        store
            .save(&Credential::new("tok-B", profile()))
            .expect("second save");

        let loaded = store.load().expect("credential should load");
        assert_eq!(loaded.token, "tok-B");
    }
}
