//! Liftscan: a field-inspector client core for lifting-equipment lookups.
//!
//! Liftscan lets field inspectors look up the latest inspection record for a
//! piece of lifting equipment by serial number or tag number, authenticating
//! against a remote inspection service. This crate is the client core:
//! - Session/authentication lifecycle with a persisted credential
//! - Authenticated API request layer with classified failures
//! - The search → loading → result flow state machine and its guards
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Driver Shim (main.rs)                              │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Flow state machine
//! │  - Event handling and guards                        │
//! │  - Action dispatching                               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Session Layer (session/)                           │  ← Token + user state
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐      ┌───────────────────┐
//! │ API Layer (api/)  │      │ Storage (storage/)│
//! │ - Reqwest client  │      │ - Credential JSON │
//! │ - Classification  │      │ - Atomic writes   │
//! └───────────────────┘      └───────────────────┘
//!         │                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types, records (domain/)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Flow state machine with event/action model
//! - [`domain`]: Core domain types (records, errors)
//! - [`api`]: Authenticated request layer for the remote service
//! - [`session`]: Session manager owning the credential
//! - [`storage`]: JSON credential persistence
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - `observability`: Tracing subscriber setup
//!
//! # Concurrency
//!
//! Single-threaded cooperative scheduling: operations suspend only at the
//! network boundary, and the state-machine guards — not mutexes — ensure at
//! most one outstanding login and one outstanding search. An in-flight
//! request always runs to completion; there is no cancellation or timeout.
//!
//! # Example
//!
//! ```no_run
//! use liftscan::{handle_event, initialize, Action, Config, Event, SearchMethod};
//!
//! # async fn run() -> liftscan::Result<()> {
//! let config = Config::from_env();
//! let (mut session, mut state) = initialize(&config)?;
//!
//! session.login("inspector1", "pw123").await?;
//! handle_event(&mut state, &Event::SessionStarted);
//!
//! let (_, actions) = handle_event(
//!     &mut state,
//!     &Event::Submit {
//!         method: SearchMethod::Serial,
//!         value: "99638".to_string(),
//!     },
//! );
//! for Action::DispatchSearch(query) in actions {
//!     let _outcome = session.search(query.method, &query.value).await;
//!     // feed Event::SearchCompleted back into handle_event...
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod session;
pub mod storage;

pub mod observability;

pub use api::{ApiClient, InspectionApi};
pub use app::{handle_event, Action, AppState, Event, FailureKind, FlowState, SearchOutcome};
pub use domain::{Credential, InspectionRecord, LiftscanError, Result, SearchMethod, SearchQuery, UserProfile};
pub use session::SessionManager;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

/// Process-wide client configuration.
///
/// The base URL is fixed at startup and immutable thereafter; it is not
/// user-editable at runtime. Values come from a TOML config file, environment
/// variables, or both (environment wins).
///
/// # Example
///
/// ```toml
/// # liftscan.toml
/// base_url = "https://inspections.example.com"
/// data_dir = "/var/lib/liftscan"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the remote inspection service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Override for the credential storage directory.
    ///
    /// Defaults to the platform data directory (see
    /// [`infrastructure::paths::data_dir`]).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Tracing level for diagnostics.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    #[serde(default)]
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            data_dir: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a map of environment-style values.
    ///
    /// Recognized keys: `LIFTSCAN_API_URL`, `LIFTSCAN_DATA_DIR`,
    /// `LIFTSCAN_LOG`. Empty values are ignored and fall back to the base
    /// configuration.
    #[must_use]
    pub fn from_env_map(base: Self, vars: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            vars.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            base_url: non_empty("LIFTSCAN_API_URL").unwrap_or(base.base_url),
            data_dir: non_empty("LIFTSCAN_DATA_DIR")
                .map(PathBuf::from)
                .or(base.data_dir),
            trace_level: non_empty("LIFTSCAN_LOG").or(base.trace_level),
        }
    }

    /// Builds configuration from defaults overlaid with the process
    /// environment.
    #[must_use]
    pub fn from_env() -> Self {
        let vars: BTreeMap<String, String> = std::env::vars().collect();
        Self::from_env_map(Self::default(), &vars)
    }

    /// Loads configuration from a TOML file, then overlays the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`LiftscanError::Config`] when the file cannot be read or
    /// parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LiftscanError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let file_config: Self = toml::from_str(&contents).map_err(|e| {
            LiftscanError::Config(format!("invalid config file {}: {e}", path.display()))
        })?;

        let vars: BTreeMap<String, String> = std::env::vars().collect();
        Ok(Self::from_env_map(file_config, &vars))
    }
}

/// Initializes the client core from configuration.
///
/// Builds the API client against the configured base URL, opens the
/// credential store (restoring any persisted session without a network
/// call), and creates the flow state machine in its initial `Search` state —
/// authenticated when a session was restored.
///
/// # Errors
///
/// Returns [`LiftscanError::Config`] for a malformed base URL and
/// [`LiftscanError::Io`] when the storage directory cannot be created.
pub fn initialize(config: &Config) -> Result<(SessionManager, AppState)> {
    tracing::debug!(base_url = %config.base_url, "initializing liftscan client");

    let base_url = Url::parse(&config.base_url)
        .map_err(|e| LiftscanError::Config(format!("invalid base URL {}: {e}", config.base_url)))?;
    let api = ApiClient::new(base_url)?;

    let store = match &config.data_dir {
        Some(dir) => storage::JsonCredentialStore::new(dir.join(storage::CREDENTIAL_FILE))?,
        None => storage::JsonCredentialStore::open_default()?,
    };

    let session = SessionManager::new(Arc::new(api), Box::new(store));
    let state = AppState::new(session.is_authenticated());
    Ok((session, state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_map_overrides_non_empty_values_only() {
        let mut vars = BTreeMap::new();
        vars.insert(
            "LIFTSCAN_API_URL".to_string(),
            "https://inspections.example.com".to_string(),
        );
        vars.insert("LIFTSCAN_LOG".to_string(), "  ".to_string());

        let config = Config::from_env_map(Config::default(), &vars);
        assert_eq!(config.base_url, "https://inspections.example.com");
        assert_eq!(config.trace_level, None, "blank values fall back");
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn config_file_parses_with_partial_keys() {
        let config: Config = toml::from_str("base_url = \"https://api.example.com\"")
            .expect("partial config should parse");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn initialize_rejects_malformed_base_url() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let config = Config {
            base_url: "not a url".to_string(),
            data_dir: Some(dir.path().to_path_buf()),
            trace_level: None,
        };

        let error = initialize(&config).expect_err("bad URL must be rejected");
        assert!(matches!(error, LiftscanError::Config(_)));
    }

    #[test]
    fn initialize_starts_unauthenticated_without_persisted_session() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let config = Config {
            base_url: default_base_url(),
            data_dir: Some(dir.path().to_path_buf()),
            trace_level: None,
        };

        let (session, state) = initialize(&config).expect("initialize should succeed");
        assert!(!session.is_authenticated());
        assert_eq!(state.flow, FlowState::Search);
        assert!(!state.authenticated);
    }
}
