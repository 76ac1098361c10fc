//! Reqwest-backed client for the remote inspection service.
//!
//! This adapter owns transport details only: request construction, bearer
//! token attachment, HTTP status classification, and JSON decoding into
//! domain types. Every failure resolves to a [`LiftscanError`] variant so
//! callers must handle both branches explicitly; no retries, caching, or
//! cancellation.
//!
//! # Status Classification
//!
//! - Transport failure (no response) → [`LiftscanError::Network`] with a
//!   generic message, never a raw error dump
//! - 404 → [`LiftscanError::NotFound`] — the machine-checkable "no record
//!   matched" signal
//! - 401 / 403 → [`LiftscanError::Auth`]
//! - Other non-success → [`LiftscanError::Http`] with the error body's
//!   `message` when one decodes
//! - Success body that fails decoding → [`LiftscanError::Decode`]

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::dto::{AuthResponse, ErrorBody, LoginRequest};
use crate::domain::error::{LiftscanError, Result};
use crate::domain::inspection::{InspectionRecord, SearchMethod};

/// Seam between the session manager and the remote service.
///
/// The production implementation is [`ApiClient`]; tests substitute a
/// scripted fake to exercise session and flow logic without a network.
#[async_trait]
pub trait InspectionApi: Send + Sync {
    /// Authenticates with the service, returning a token and user profile.
    ///
    /// # Errors
    ///
    /// Returns [`LiftscanError::Auth`] when the credentials are rejected,
    /// or another variant describing the transport or decoding failure.
    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse>;

    /// Fetches the latest inspection record for a serial or tag number.
    ///
    /// # Errors
    ///
    /// Returns [`LiftscanError::NotFound`] when no record matches the value,
    /// or another variant describing the failure.
    async fn fetch_latest_inspection(
        &self,
        method: SearchMethod,
        value: &str,
        token: &str,
    ) -> Result<InspectionRecord>;
}

/// HTTP client for the inspection service.
///
/// Holds a `reqwest::Client` and the base URL, both fixed at construction;
/// the base URL is process-wide configuration and never changes at runtime.
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Builds a client against the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`LiftscanError::Config`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| LiftscanError::Config(format!("failed to construct HTTP client: {e}")))?;
        Ok(Self { client, base_url })
    }

    /// Joins path segments onto the base URL with percent-encoding.
    ///
    /// Lookup values are user input (or NFC payloads) and must not be able to
    /// smuggle extra path components into the request.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                LiftscanError::Config(format!("base URL cannot have paths: {}", self.base_url))
            })?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// Sends a prepared request and decodes the response as `T`.
    ///
    /// This is the single funnel every operation goes through: transport
    /// errors, status classification, and body decoding are handled here once.
    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(classify_status(status, body.as_ref()));
        }

        serde_json::from_slice(body.as_ref())
            .map_err(|e| LiftscanError::Decode(format!("unexpected response shape: {e}")))
    }
}

#[async_trait]
impl InspectionApi for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse> {
        tracing::debug!(username = %username, "sending login request");

        let url = self.endpoint(&["auth", "login"])?;
        let request = self
            .client
            .post(url)
            .json(&LoginRequest { username, password });

        let response: AuthResponse = self.execute(request).await?;
        tracing::debug!("login succeeded");
        Ok(response)
    }

    async fn fetch_latest_inspection(
        &self,
        method: SearchMethod,
        value: &str,
        token: &str,
    ) -> Result<InspectionRecord> {
        tracing::debug!(method = ?method, value = %value, "fetching latest inspection");

        let method_segment = match method {
            SearchMethod::Serial => "serial",
            SearchMethod::Tag => "tag",
        };
        let url = self.endpoint(&["inspections", method_segment, value, "latest"])?;
        let request = self
            .client
            .get(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .bearer_auth(token);

        let record: InspectionRecord = self.execute(request).await?;
        tracing::debug!(cert_number = %record.cert_number, "inspection fetched");
        Ok(record)
    }
}

/// Maps a transport-level failure to a generic network error.
///
/// The original error is logged but never shown: the UI message for an
/// unreachable service stays stable and readable.
fn map_transport_error(error: reqwest::Error) -> LiftscanError {
    tracing::debug!(error = %error, "transport failure");
    LiftscanError::Network("could not reach the inspection service".to_string())
}

/// Classifies a non-success HTTP status into a failure kind.
///
/// The error body's `message` is used when one decodes; a body that fails to
/// decode falls back to a generic status message and never masks the
/// original HTTP failure.
fn classify_status(status: StatusCode, body: &[u8]) -> LiftscanError {
    let message = error_message(status, body);

    match status {
        StatusCode::NOT_FOUND => LiftscanError::NotFound(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LiftscanError::Auth(message),
        _ => LiftscanError::Http {
            status: status.as_u16(),
            message,
        },
    }
}

/// Extracts a human-readable message from an error response body.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()))
}
