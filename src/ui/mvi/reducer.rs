//! Reducer trait for the MVI layer.

use super::intent::Intent;
use super::state::UiState;

/// The only place where view state changes.
///
/// `reduce` must stay pure: no timers, no notifications, no logging of
/// decisions that callers cannot observe in the returned state.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
