//! Flow state machine types and state container.
//!
//! This module defines [`FlowState`], the search → loading → result state
//! machine driving the lookup screens, and [`AppState`], the container the
//! event handler mutates. The flow is cyclic with no terminal state: `Back`
//! always returns to `Search`.
//!
//! # States
//!
//! - **Search**: idle, ready for a submission
//! - **Loading**: exactly one lookup in flight, holding the submitted query
//! - **Result**: the outcome of the last lookup, success or classified
//!   failure, still holding the query for "searched for X" context
//!
//! The `authenticated` flag mirrors the session manager (updated via session
//! events); the whole flow is only reachable while it is set.

use crate::domain::error::LiftscanError;
use crate::domain::inspection::{InspectionRecord, SearchMethod, SearchQuery};

/// Failure kind tag carried into the result state.
///
/// A flattened, cloneable projection of [`LiftscanError`] so the flow can
/// phrase messaging per kind without holding the error itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The service never responded.
    Network,
    /// The service responded with a failure status.
    Http(u16),
    /// No inspection record matched the query.
    NotFound,
    /// The response body did not match the expected shape.
    Decode,
    /// The session was rejected.
    Auth,
    /// A local fault (storage, I/O, configuration) rather than a remote one.
    Internal,
}

/// A classified failure shown in the result state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureNotice {
    /// Which kind of failure occurred.
    pub kind: FailureKind,

    /// Message shown verbatim to the user.
    pub message: String,
}

impl From<&LiftscanError> for FailureNotice {
    fn from(error: &LiftscanError) -> Self {
        let kind = match error {
            LiftscanError::Network(_) => FailureKind::Network,
            LiftscanError::Http { status, .. } => FailureKind::Http(*status),
            LiftscanError::NotFound(_) => FailureKind::NotFound,
            LiftscanError::Decode(_) => FailureKind::Decode,
            LiftscanError::Auth(_) => FailureKind::Auth,
            LiftscanError::Storage(_) | LiftscanError::Io(_) | LiftscanError::Config(_) => {
                FailureKind::Internal
            }
        };
        Self {
            kind,
            message: error.to_string(),
        }
    }
}

impl From<LiftscanError> for FailureNotice {
    fn from(error: LiftscanError) -> Self {
        Self::from(&error)
    }
}

/// Outcome of a completed lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The latest inspection record for the queried equipment.
    Found(InspectionRecord),

    /// The lookup failed; kind and message drive the error presentation.
    Failed(FailureNotice),
}

/// The search → loading → result state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    /// Idle, ready for a submission.
    Search,

    /// One lookup in flight. Holds the query so a completion can carry it
    /// into the result state.
    Loading {
        /// The submitted query.
        query: SearchQuery,
    },

    /// Outcome of the last lookup, kept until `Back`.
    Result {
        /// The query that produced this outcome.
        query: SearchQuery,

        /// Success or classified failure.
        outcome: SearchOutcome,
    },
}

/// Central state container mutated by the event handler.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Current position in the search flow.
    pub flow: FlowState,

    /// Mirror of the session manager's authentication state.
    ///
    /// Updated only by `SessionStarted`/`SessionEnded` events, which the
    /// driver emits whenever the session manager changes. The submit guard
    /// checks this flag.
    pub authenticated: bool,
}

impl AppState {
    /// Creates a state container in the initial `Search` state.
    #[must_use]
    pub fn new(authenticated: bool) -> Self {
        Self {
            flow: FlowState::Search,
            authenticated,
        }
    }

    /// Whether a lookup is currently in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.flow, FlowState::Loading { .. })
    }

    /// The lookup method worth suggesting after a "no record found" result.
    ///
    /// Returns `Some` only in a result state whose failure kind is
    /// [`FailureKind::NotFound`]: the one failure where switching between
    /// serial and tag lookup is a useful next step.
    #[must_use]
    pub fn suggested_method(&self) -> Option<SearchMethod> {
        match &self.flow {
            FlowState::Result {
                query,
                outcome: SearchOutcome::Failed(notice),
            } if notice.kind == FailureKind::NotFound => Some(query.method.other()),
            _ => None,
        }
    }
}
