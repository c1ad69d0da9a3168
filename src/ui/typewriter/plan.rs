use std::time::Duration;

use super::cycler::TypewriterTimings;
use super::intent::TypewriterIntent;
use super::state::{Direction, TypewriterState};

/// The next keystroke and how long to wait before applying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub intent: TypewriterIntent,
    pub delay: Duration,
}

/// Decides what happens next for `state` typing `phrase`.
///
/// `phrase_count` is the length of the whole phrase list, used for the wrap.
pub fn plan_step(
    state: &TypewriterState,
    phrase: &str,
    phrase_count: usize,
    timings: &TypewriterTimings,
) -> Step {
    match state.direction {
        Direction::Typing => match phrase.chars().nth(state.shown_chars()) {
            Some(next) => Step {
                intent: TypewriterIntent::TypeChar(next),
                delay: timings.type_delay,
            },
            None => Step {
                intent: TypewriterIntent::BeginDeleting,
                delay: timings.hold,
            },
        },
        Direction::Deleting if state.displayed.is_empty() => Step {
            intent: TypewriterIntent::NextPhrase { phrase_count },
            delay: timings.delete_delay,
        },
        Direction::Deleting => Step {
            intent: TypewriterIntent::DeleteChar,
            delay: timings.delete_delay,
        },
    }
}
