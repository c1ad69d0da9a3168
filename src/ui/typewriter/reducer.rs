use crate::ui::mvi::Reducer;

use super::intent::TypewriterIntent;
use super::state::{Direction, TypewriterState};

pub struct TypewriterReducer;

impl Reducer for TypewriterReducer {
    type State = TypewriterState;
    type Intent = TypewriterIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TypewriterIntent::TypeChar(c) => {
                if state.direction == Direction::Typing {
                    state.displayed.push(c);
                }
                state
            }
            TypewriterIntent::DeleteChar => {
                if state.direction == Direction::Deleting {
                    state.displayed.pop();
                }
                state
            }
            TypewriterIntent::BeginDeleting => TypewriterState {
                direction: Direction::Deleting,
                ..state
            },
            TypewriterIntent::NextPhrase { phrase_count } => {
                if state.direction != Direction::Deleting || !state.displayed.is_empty() {
                    return state;
                }
                TypewriterState {
                    phrase_index: (state.phrase_index + 1) % phrase_count.max(1),
                    displayed: String::new(),
                    direction: Direction::Typing,
                }
            }
        }
    }
}
