use std::time::Duration;

use crate::scheduler::{SchedulerHandle, TimerGuard, TimerId};
use crate::ui::mvi::Reducer;

use super::completion::{self, Completion, CompletionNotifier};
use super::error::SequencerError;
use super::intent::LoadingIntent;
use super::reducer::LoadingReducer;
use super::state::{LoadingPhase, LoadingState};

/// Pacing of the intro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingTimings {
    /// Interval of the progress tick.
    pub tick: Duration,
    /// Percentage points added per tick.
    pub step: u8,
    /// Pause between reaching 100% and showing the welcome message.
    pub welcome_delay: Duration,
    /// How long the welcome message stays up.
    pub welcome_dwell: Duration,
    /// Fade-out time between Complete and notifying the host.
    pub complete_delay: Duration,
}

impl Default for LoadingTimings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(50),
            step: 2,
            welcome_delay: Duration::from_millis(500),
            welcome_dwell: Duration::from_millis(2500),
            complete_delay: Duration::from_millis(1000),
        }
    }
}

/// Owns the intro's state and its single timer.
///
/// The timer is either the repeating progress tick or one of the one-shot
/// phase delays, never both. Which one is pending follows from the state:
///
/// | state                 | pending timer     | on fire          |
/// |-----------------------|-------------------|------------------|
/// | Loading, < 100        | tick (repeating)  | `Tick`           |
/// | Loading, 100          | welcome delay     | `EnterWelcome`   |
/// | Welcome               | welcome dwell     | `EnterComplete`  |
/// | Complete              | complete delay    | notify the host  |
pub struct LoadingSequencer {
    state: LoadingState,
    timings: LoadingTimings,
    timer: TimerGuard,
    notifier: Option<CompletionNotifier>,
    torn_down: bool,
}

impl LoadingSequencer {
    /// A zero `step` is raised to 1 so the bar always reaches 100.
    pub fn new(scheduler: &SchedulerHandle, timings: LoadingTimings) -> Self {
        let timings = LoadingTimings {
            step: timings.step.max(1),
            ..timings
        };
        Self {
            state: LoadingState::default(),
            timings,
            timer: TimerGuard::new(scheduler),
            notifier: None,
            torn_down: false,
        }
    }

    /// Starts the progress tick and returns the completion signal.
    pub fn run(&mut self) -> Result<Completion, SequencerError> {
        if self.torn_down {
            return Err(SequencerError::TornDown);
        }
        if self.notifier.is_some() {
            return Err(SequencerError::AlreadyStarted);
        }

        let (notifier, completion) = completion::channel();
        self.notifier = Some(notifier);
        self.timer.arm_repeating(self.timings.tick);
        tracing::debug!(
            tick_ms = self.timings.tick.as_millis() as u64,
            step = self.timings.step,
            "loading sequence started"
        );
        Ok(completion)
    }

    pub fn state(&self) -> &LoadingState {
        &self.state
    }

    pub fn timings(&self) -> &LoadingTimings {
        &self.timings
    }

    pub fn owns(&self, id: TimerId) -> bool {
        self.timer.armed_id() == Some(id)
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Handles a fired timer. Returns false if the timer is not ours.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.torn_down || !self.timer.fired(id) {
            return false;
        }

        match self.state.phase {
            LoadingPhase::Loading if !self.state.is_loaded() => {
                self.dispatch(LoadingIntent::Tick {
                    step: self.timings.step,
                });
                if self.state.is_loaded() {
                    // Replaces the repeating tick.
                    self.timer.arm_once(self.timings.welcome_delay);
                }
            }
            LoadingPhase::Loading => {
                self.dispatch(LoadingIntent::EnterWelcome);
                self.timer.arm_once(self.timings.welcome_dwell);
            }
            LoadingPhase::Welcome => {
                self.dispatch(LoadingIntent::EnterComplete);
                self.timer.arm_once(self.timings.complete_delay);
            }
            LoadingPhase::Complete => {
                self.complete();
            }
        }
        true
    }

    /// Notifies the host that the intro is over.
    ///
    /// Only meaningful once the phase is `Complete`; any later call is a
    /// no-op. Returns whether this call delivered the notification.
    pub fn complete(&mut self) -> bool {
        if self.torn_down || self.state.phase != LoadingPhase::Complete {
            return false;
        }
        let Some(notifier) = self.notifier.as_mut() else {
            return false;
        };
        if !notifier.notify() {
            return false;
        }

        self.timer.release();
        tracing::info!("loading sequence complete");
        true
    }

    /// Cancels every pending timer and abandons the completion signal if it
    /// has not fired yet. Nothing changes after this returns.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.timer.release();
        if let Some(notifier) = self.notifier.as_mut() {
            notifier.abandon();
        }
        tracing::debug!(
            progress = self.state.progress,
            phase = ?self.state.phase,
            "loading sequence torn down"
        );
    }

    fn dispatch(&mut self, intent: LoadingIntent) {
        let before = self.state.phase;
        self.state = LoadingReducer::reduce(std::mem::take(&mut self.state), intent);
        if self.state.phase != before {
            tracing::debug!(from = ?before, to = ?self.state.phase, "loading phase changed");
        }
    }
}

impl Drop for LoadingSequencer {
    fn drop(&mut self) {
        self.teardown();
    }
}
