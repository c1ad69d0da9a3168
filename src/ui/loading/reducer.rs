//! Reducer for the loading intro.

use crate::ui::mvi::Reducer;

use super::intent::LoadingIntent;
use super::state::{LoadingPhase, LoadingState};

/// Forward-only transitions. Intents that do not apply to the current phase
/// leave the state untouched.
pub struct LoadingReducer;

impl Reducer for LoadingReducer {
    type State = LoadingState;
    type Intent = LoadingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoadingIntent::Tick { step } => match state.phase {
                LoadingPhase::Loading => LoadingState {
                    progress: state
                        .progress
                        .saturating_add(step)
                        .min(LoadingState::MAX_PROGRESS),
                    ..state
                },
                _ => state,
            },

            LoadingIntent::EnterWelcome => match state.phase {
                LoadingPhase::Loading if state.is_loaded() => LoadingState {
                    phase: LoadingPhase::Welcome,
                    ..state
                },
                _ => state,
            },

            LoadingIntent::EnterComplete => match state.phase {
                LoadingPhase::Welcome => LoadingState {
                    phase: LoadingPhase::Complete,
                    ..state
                },
                _ => state,
            },
        }
    }
}
