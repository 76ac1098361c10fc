//! Event handling and flow transition logic.
//!
//! This module implements the event handler that processes user input and
//! search completions, translating them into flow state changes and actions
//! for the driver to execute. It is the only place flow transitions happen,
//! which keeps the guards — authentication, non-empty input, one in-flight
//! lookup — in one spot.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//!
//! 1. Events arrive from the driver (user input, session changes, completed
//!    lookups)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. Flow transitions mutate [`AppState`]
//! 4. Actions are returned for the driver to execute
//!
//! The handler itself is pure and synchronous; the single suspension point
//! per lookup lives in the driver, which awaits [`Action::DispatchSearch`]
//! and feeds the outcome back as [`Event::SearchCompleted`]. A new
//! submission cannot be dispatched until the prior one resolves — enforced
//! here by the `Loading` guard, not by the runtime.

use crate::app::state::{AppState, FlowState, SearchOutcome};
use crate::domain::inspection::{SearchMethod, SearchQuery};

/// Events triggered by user input, session changes, or completed lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The user submitted a lookup value.
    Submit {
        /// Whether the value is a serial or tag number.
        method: SearchMethod,
        /// Raw input; trimmed before any guard is applied.
        value: String,
    },

    /// The NFC reader produced a tag value.
    ///
    /// Consumed identically to a typed tag-number submission; the core does
    /// not distinguish the origin.
    TagScanned {
        /// Tag number read from the hardware.
        value: String,
    },

    /// A dispatched lookup resolved.
    SearchCompleted(SearchOutcome),

    /// The user left the result screen.
    Back,

    /// The session manager became authenticated.
    SessionStarted,

    /// The session manager became unauthenticated (logout).
    ///
    /// Forcibly resets the flow to `Search` regardless of current state.
    SessionEnded,
}

/// Commands for the driver to execute after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Run the lookup through the session manager and feed the outcome back
    /// as [`Event::SearchCompleted`].
    DispatchSearch(SearchQuery),
}

/// Processes an event, mutates flow state, and returns actions to execute.
///
/// Returns `(changed, actions)`: whether the state changed (the driver
/// re-renders only when it did) and the side effects to run. Guarded events
/// that fail their guard — blank input, unauthenticated submit, submit while
/// loading — are no-ops, not errors.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Submit { method, value } => submit(state, *method, value),
        Event::TagScanned { value } => submit(state, SearchMethod::Tag, value),

        Event::SearchCompleted(outcome) => {
            // Take ownership of the flow to move the query into the result.
            match std::mem::replace(&mut state.flow, FlowState::Search) {
                FlowState::Loading { query } => {
                    tracing::debug!(value = %query.value, "search completed");
                    state.flow = FlowState::Result {
                        query,
                        outcome: outcome.clone(),
                    };
                    (true, vec![])
                }
                // A completion with nothing in flight is stale, e.g. the
                // flow was force-reset by a logout while a request ran to
                // completion. Drop it.
                other => {
                    tracing::debug!("ignoring completion outside Loading");
                    state.flow = other;
                    (false, vec![])
                }
            }
        }

        Event::Back => {
            if matches!(state.flow, FlowState::Result { .. }) {
                tracing::debug!("returning to search");
                state.flow = FlowState::Search;
                (true, vec![])
            } else {
                (false, vec![])
            }
        }

        Event::SessionStarted => {
            let changed = !state.authenticated;
            state.authenticated = true;
            (changed, vec![])
        }

        Event::SessionEnded => {
            let changed = state.authenticated || state.flow != FlowState::Search;
            state.authenticated = false;
            state.flow = FlowState::Search;
            (changed, vec![])
        }
    }
}

/// Applies the submit guards and, when they pass, enters `Loading`.
///
/// Guards, in order: the session must be authenticated, the flow must be in
/// `Search` (at most one in-flight lookup), and the trimmed value must be
/// non-empty. Every rejected submission leaves the state unchanged.
fn submit(state: &mut AppState, method: SearchMethod, value: &str) -> (bool, Vec<Action>) {
    if !state.authenticated {
        tracing::debug!("submit rejected: not authenticated");
        return (false, vec![]);
    }

    if state.flow != FlowState::Search {
        tracing::debug!("submit rejected: lookup already in flight or result showing");
        return (false, vec![]);
    }

    let Some(query) = SearchQuery::from_input(method, value) else {
        tracing::debug!("submit ignored: blank value");
        return (false, vec![]);
    };

    tracing::debug!(method = ?query.method, value = %query.value, "dispatching search");
    state.flow = FlowState::Loading {
        query: query.clone(),
    };
    (true, vec![Action::DispatchSearch(query)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{FailureKind, FailureNotice};
    use crate::domain::inspection::InspectionRecord;

    fn record() -> InspectionRecord {
        InspectionRecord {
            cert_number: "C-2024-0042".to_string(),
            serial_no: "99638".to_string(),
            tag_number: "T-1187".to_string(),
            equip_description: "Chain sling, 2-leg".to_string(),
            test_date: "2024-03-11".to_string(),
            valid_date: "2025-03-11".to_string(),
            status: "Passed".to_string(),
            wwl: "3.2t".to_string(),
            height_length: "4m".to_string(),
            comments: String::new(),
            client: "FB Cranes".to_string(),
            site: "Melbourne Yard".to_string(),
            section: "Rigging".to_string(),
            responsible: "J. Mercer".to_string(),
            test_id: 8841,
            test_type: "Periodic".to_string(),
            inspect_type: None,
        }
    }

    fn submit_serial(state: &mut AppState, value: &str) -> (bool, Vec<Action>) {
        handle_event(
            state,
            &Event::Submit {
                method: SearchMethod::Serial,
                value: value.to_string(),
            },
        )
    }

    #[test]
    fn submit_enters_loading_and_dispatches() {
        let mut state = AppState::new(true);
        let (changed, actions) = submit_serial(&mut state, "99638");

        assert!(changed);
        let expected = SearchQuery::from_input(SearchMethod::Serial, "99638").expect("query");
        assert_eq!(actions, vec![Action::DispatchSearch(expected.clone())]);
        assert_eq!(state.flow, FlowState::Loading { query: expected });
    }

    #[test]
    fn blank_submit_is_a_noop() {
        let mut state = AppState::new(true);
        for value in ["", "   ", "\t\n"] {
            let (changed, actions) = submit_serial(&mut state, value);
            assert!(!changed, "blank value {value:?} must not change state");
            assert!(actions.is_empty());
            assert_eq!(state.flow, FlowState::Search);
        }
    }

    #[test]
    fn unauthenticated_submit_is_rejected() {
        let mut state = AppState::new(false);
        let (changed, actions) = submit_serial(&mut state, "99638");

        assert!(!changed);
        assert!(actions.is_empty());
        assert_eq!(state.flow, FlowState::Search);
    }

    #[test]
    fn submit_while_loading_is_rejected() {
        let mut state = AppState::new(true);
        submit_serial(&mut state, "99638");

        let (changed, actions) = submit_serial(&mut state, "77111");
        assert!(!changed, "only one lookup may be in flight");
        assert!(actions.is_empty());

        // The original query is still the one in flight.
        let expected = SearchQuery::from_input(SearchMethod::Serial, "99638").expect("query");
        assert_eq!(state.flow, FlowState::Loading { query: expected });
    }

    #[test]
    fn completion_moves_loading_to_success_result() {
        let mut state = AppState::new(true);
        submit_serial(&mut state, "99638");

        let (changed, actions) = handle_event(
            &mut state,
            &Event::SearchCompleted(SearchOutcome::Found(record())),
        );

        assert!(changed);
        assert!(actions.is_empty());
        match &state.flow {
            FlowState::Result { query, outcome } => {
                assert_eq!(query.value, "99638");
                assert_eq!(*outcome, SearchOutcome::Found(record()));
            }
            other => panic!("expected Result, got {other:?}"),
        }
    }

    #[test]
    fn not_found_completion_keeps_message_and_suggests_other_method() {
        let mut state = AppState::new(true);
        submit_serial(&mut state, "99638");

        handle_event(
            &mut state,
            &Event::SearchCompleted(SearchOutcome::Failed(FailureNotice {
                kind: FailureKind::NotFound,
                message: "No inspection found with serial 99638".to_string(),
            })),
        );

        match &state.flow {
            FlowState::Result {
                outcome: SearchOutcome::Failed(notice),
                ..
            } => {
                assert_eq!(notice.kind, FailureKind::NotFound);
                assert_eq!(notice.message, "No inspection found with serial 99638");
            }
            other => panic!("expected failed Result, got {other:?}"),
        }
        assert_eq!(state.suggested_method(), Some(SearchMethod::Tag));
    }

    #[test]
    fn back_returns_to_search_and_clears_the_result() {
        let mut state = AppState::new(true);
        submit_serial(&mut state, "99638");
        handle_event(
            &mut state,
            &Event::SearchCompleted(SearchOutcome::Found(record())),
        );

        let (changed, _) = handle_event(&mut state, &Event::Back);
        assert!(changed);
        assert_eq!(state.flow, FlowState::Search);

        // Ready for a fresh submission.
        let (changed, actions) = submit_serial(&mut state, "77111");
        assert!(changed);
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn back_outside_result_is_a_noop() {
        let mut state = AppState::new(true);
        let (changed, _) = handle_event(&mut state, &Event::Back);
        assert!(!changed);

        submit_serial(&mut state, "99638");
        let (changed, _) = handle_event(&mut state, &Event::Back);
        assert!(!changed, "Back must not abandon an in-flight lookup");
        assert!(state.is_loading());
    }

    #[test]
    fn session_end_resets_flow_from_any_state() {
        let mut state = AppState::new(true);
        submit_serial(&mut state, "99638");
        assert!(state.is_loading());

        let (changed, _) = handle_event(&mut state, &Event::SessionEnded);
        assert!(changed);
        assert!(!state.authenticated);
        assert_eq!(state.flow, FlowState::Search);
    }

    #[test]
    fn stale_completion_after_reset_is_dropped() {
        let mut state = AppState::new(true);
        submit_serial(&mut state, "99638");
        handle_event(&mut state, &Event::SessionEnded);

        // The request ran to completion after the forced reset.
        let (changed, actions) = handle_event(
            &mut state,
            &Event::SearchCompleted(SearchOutcome::Found(record())),
        );
        assert!(!changed);
        assert!(actions.is_empty());
        assert_eq!(state.flow, FlowState::Search);
    }

    #[test]
    fn tag_scan_behaves_like_typed_tag_submission() {
        let mut state = AppState::new(true);
        let (changed, actions) = handle_event(
            &mut state,
            &Event::TagScanned {
                value: " T-1187 ".to_string(),
            },
        );

        assert!(changed);
        let expected = SearchQuery::from_input(SearchMethod::Tag, "T-1187").expect("query");
        assert_eq!(actions, vec![Action::DispatchSearch(expected)]);
    }
}
