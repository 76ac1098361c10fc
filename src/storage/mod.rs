//! Storage layer for the persisted session credential.
//!
//! This module provides the persistence abstraction for the signed-in
//! session. One credential record (token + user profile) is stored as a whole
//! and survives process restarts; absence or malformed content means "no
//! session".
//!
//! # Modules
//!
//! - `backend`: Credential store trait abstraction
//! - `json`: JSON file-based store implementation

pub mod backend;
pub mod json;

pub use backend::CredentialStore;
pub use json::{JsonCredentialStore, CREDENTIAL_FILE};
