use std::time::Duration;

use crate::scheduler::{SchedulerHandle, TimerGuard, TimerId};
use crate::ui::mvi::Reducer;

use super::error::TypewriterError;
use super::plan::{plan_step, Step};
use super::reducer::TypewriterReducer;
use super::state::TypewriterState;

/// Cursor blink half-period.
const CURSOR_BLINK: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTimings {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    /// Pause with the full phrase on screen before deleting.
    pub hold: Duration,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(150),
            delete_delay: Duration::from_millis(100),
            hold: Duration::from_millis(2000),
        }
    }
}

/// Self-driving typewriter. There is always exactly one pending step
/// until teardown.
pub struct TypewriterCycler {
    phrases: Vec<String>,
    timings: TypewriterTimings,
    state: TypewriterState,
    timer: TimerGuard,
    torn_down: bool,
}

impl TypewriterCycler {
    /// Creates the cycler and arms its first keystroke.
    pub fn mount(
        scheduler: &SchedulerHandle,
        phrases: Vec<String>,
        timings: TypewriterTimings,
    ) -> Result<Self, TypewriterError> {
        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }

        let mut cycler = Self {
            phrases,
            timings,
            state: TypewriterState::default(),
            timer: TimerGuard::new(scheduler),
            torn_down: false,
        };
        cycler.schedule_next();
        tracing::debug!(phrases = cycler.phrases.len(), "typewriter mounted");
        Ok(cycler)
    }

    pub fn state(&self) -> &TypewriterState {
        &self.state
    }

    pub fn text(&self) -> &str {
        &self.state.displayed
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.state.phrase_index]
    }

    pub fn owns(&self, id: TimerId) -> bool {
        self.timer.armed_id() == Some(id)
    }

    /// Step that will be applied when the pending timer fires.
    pub fn pending_step(&self) -> Step {
        plan_step(
            &self.state,
            self.current_phrase(),
            self.phrases.len(),
            &self.timings,
        )
    }

    /// Blinking cursor: visible for the first half of every blink period.
    pub fn cursor_visible(now: Duration) -> bool {
        (now.as_millis() / CURSOR_BLINK.as_millis()) % 2 == 0
    }

    /// Applies the pending step and arms the next one. Returns false if the
    /// timer is not ours.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.torn_down || !self.timer.fired(id) {
            return false;
        }

        let step = self.pending_step();
        self.state = TypewriterReducer::reduce(std::mem::take(&mut self.state), step.intent);
        tracing::trace!(
            phrase = self.state.phrase_index,
            text = %self.state.displayed,
            "typewriter step"
        );
        self.schedule_next();
        true
    }

    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.timer.release();
        tracing::debug!("typewriter torn down");
    }

    fn schedule_next(&mut self) {
        let delay = self.pending_step().delay;
        // arm_once cancels whatever was still pending.
        self.timer.arm_once(delay);
    }
}

impl Drop for TypewriterCycler {
    fn drop(&mut self) {
        self.teardown();
    }
}
