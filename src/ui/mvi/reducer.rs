//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Effects)
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Side effects the caller performs after the transition
    /// (notifications, timers, re-rendering).
    type Effect;

    /// Process an intent and return the new state plus the effects it requests.
    ///
    /// This should be a pure function. An empty effect list means the intent
    /// was a no-op for the given state.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Vec<Self::Effect>);
}
