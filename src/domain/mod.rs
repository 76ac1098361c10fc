//! Domain layer for the Liftscan client core.
//!
//! This module contains the core domain types for the client, independent of
//! transport, storage, or presentation concerns. It keeps the contracts the
//! rest of the crate is built on — error classification, the credential unit,
//! and the inspection lookup model — isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`inspection`]: Inspection record and search query models
//! - [`user`]: User profile and credential models

pub mod error;
pub mod inspection;
pub mod user;

pub use error::{LiftscanError, Result};
pub use inspection::{InspectionRecord, SearchMethod, SearchQuery};
pub use user::{Credential, UserProfile};
