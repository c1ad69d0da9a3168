use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::{Scheduler, SchedulerHandle, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Armed {
    Once(TimerId),
    Repeating(TimerId),
}

impl Armed {
    fn id(self) -> TimerId {
        match self {
            Armed::Once(id) | Armed::Repeating(id) => id,
        }
    }
}

/// Owns at most one pending timer on a scheduler.
///
/// Arming always cancels whatever was armed before, and dropping the guard
/// cancels the pending timer. The scheduler is held weakly: a guard that
/// outlives its scheduler simply has nothing left to cancel.
pub struct TimerGuard {
    scheduler: Weak<RefCell<dyn Scheduler>>,
    armed: Option<Armed>,
}

impl TimerGuard {
    pub fn new(scheduler: &SchedulerHandle) -> Self {
        Self {
            scheduler: Rc::downgrade(scheduler),
            armed: None,
        }
    }

    /// Arms a one-shot timer, replacing any pending one.
    pub fn arm_once(&mut self, delay: Duration) -> Option<TimerId> {
        self.release();
        let id = self.with_scheduler(|s| s.schedule_once(delay))?;
        self.armed = Some(Armed::Once(id));
        Some(id)
    }

    /// Arms a repeating timer, replacing any pending one.
    pub fn arm_repeating(&mut self, interval: Duration) -> Option<TimerId> {
        self.release();
        let id = self.with_scheduler(|s| s.schedule_repeating(interval))?;
        self.armed = Some(Armed::Repeating(id));
        Some(id)
    }

    /// Records that `id` fired. Returns false when the guard does not own it,
    /// in which case the event belongs to someone else (or is stale).
    pub fn fired(&mut self, id: TimerId) -> bool {
        match self.armed {
            Some(Armed::Once(armed)) if armed == id => {
                self.armed = None;
                true
            }
            Some(Armed::Repeating(armed)) => armed == id,
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn armed_id(&self) -> Option<TimerId> {
        self.armed.map(Armed::id)
    }

    /// Cancels the pending timer, if any. Safe to call repeatedly.
    pub fn release(&mut self) {
        let Some(armed) = self.armed.take() else {
            return;
        };
        let Some(scheduler) = self.scheduler.upgrade() else {
            return;
        };
        let borrowed = scheduler.try_borrow_mut();
        match borrowed {
            Ok(mut scheduler) => {
                scheduler.cancel(armed.id());
            }
            Err(_) => {
                tracing::warn!(id = %armed.id(), "scheduler busy, timer left pending");
            }
        }
    }

    fn with_scheduler<R>(&self, f: impl FnOnce(&mut dyn Scheduler) -> R) -> Option<R> {
        let scheduler = self.scheduler.upgrade()?;
        let mut scheduler = scheduler.try_borrow_mut().ok()?;
        Some(f(&mut *scheduler))
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.release();
    }
}
