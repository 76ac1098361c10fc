//! Application layer coordinating flow state, events, and actions.
//!
//! This module implements the search → loading → result state machine that
//! drives the lookup screens, sitting between the driver (main.rs) and the
//! session/API layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → Flow Transitions → Actions → Side Effects
//!                           ↑                                   ↓
//!                           └────── Search Completions ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`handler`]: Event processing, guards, and the [`Action`] commands
//! - [`state`]: Flow state machine types and the state container

pub mod handler;
pub mod state;

pub use handler::{handle_event, Action, Event};
pub use state::{AppState, FailureKind, FailureNotice, FlowState, SearchOutcome};
