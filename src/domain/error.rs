//! Error types for the Liftscan client core.
//!
//! This module defines the centralized error type [`LiftscanError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Every remote call resolves to either a typed value or one of these variants;
//! the variant is the machine-checkable failure kind the flow controller uses to
//! phrase its messaging (a `NotFound` suggests trying the other lookup method,
//! a `Network` failure gets generic wording).

use thiserror::Error;

/// The main error type for Liftscan client operations.
///
/// This enum consolidates all failure conditions that can occur in the core:
/// transport failures, classified HTTP errors, response decoding problems,
/// authentication rejections, and local storage/configuration issues. The
/// variant doubles as the failure kind tag surfaced to the flow controller,
/// and the payload carries the human-readable message shown to the user.
#[derive(Debug, Error)]
pub enum LiftscanError {
    /// The request never produced a response.
    ///
    /// Covers DNS failures, refused connections and dropped sockets. The
    /// message is deliberately generic so the UI never shows a raw transport
    /// error dump.
    #[error("{0}")]
    Network(String),

    /// The server responded with a non-success status.
    ///
    /// The message comes from the JSON error body's `message` field when one
    /// decodes, falling back to a generic "request failed with status N".
    #[error("{message}")]
    Http {
        /// HTTP status code of the failed response.
        status: u16,
        /// Human-readable failure description.
        message: String,
    },

    /// The query matched no inspection record.
    ///
    /// Distinguished from [`LiftscanError::Http`] so the UI can offer a
    /// targeted suggestion (try the other lookup method). Signalled by an
    /// HTTP 404 from the inspection endpoints, never by message-text matching.
    #[error("{0}")]
    NotFound(String),

    /// A response body did not match the expected shape.
    ///
    /// Occurs when a success response fails JSON decoding. Never raised for
    /// error bodies, where a decode failure degrades to a generic message
    /// instead of masking the original HTTP failure.
    #[error("{0}")]
    Decode(String),

    /// Authentication was rejected or no session is available.
    ///
    /// Covers login rejections (401/403 from the login endpoint) and attempts
    /// to search without a signed-in session.
    #[error("{0}")]
    Auth(String),

    /// Credential storage operation failed.
    ///
    /// Occurs when writing to or clearing the credential store fails. Read
    /// failures never surface here; a malformed persisted credential degrades
    /// to "no session" instead.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs at startup when the base URL is malformed or a config file
    /// cannot be parsed. The string describes the specific problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LiftscanError {
    /// Returns `true` when this failure means the query matched no record.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// A specialized `Result` type for Liftscan operations.
///
/// This is a type alias for `std::result::Result<T, LiftscanError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, LiftscanError>;
