//! Timer scheduling for the intro and hero animations.
//!
//! Choreographies never read the wall clock. They ask a [`Scheduler`] for
//! one-shot or repeating timers and react when the host loop reports a timer
//! as fired. The host owns a [`TimerQueue`], drives it from a [`Clock`], and
//! routes every due [`TimerId`] back to whoever armed it.
//!
//! ```text
//! Clock ──→ TimerQueue::poll_due ──→ TimerId ──→ App::on_timer ──→ component
//!                 ↑                                                  │
//!                 └──────────── TimerGuard::arm_* ───────────────────┘
//! ```
//!
//! Everything here is single-threaded: handles are `Rc<RefCell<..>>` and a
//! component holds at most one pending timer through its [`TimerGuard`].

mod clock;
mod guard;
mod queue;

pub use clock::{Clock, SystemClock, VirtualClock};
pub use guard::TimerGuard;
pub use queue::TimerQueue;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Identifier of a scheduled timer. Never reused within one scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Schedule-once / schedule-repeating / cancel.
pub trait Scheduler {
    /// Logical time since the scheduler was created.
    fn now(&self) -> Duration;

    fn schedule_once(&mut self, delay: Duration) -> TimerId;

    fn schedule_repeating(&mut self, interval: Duration) -> TimerId;

    /// Removes a pending timer. Returns false if it already fired or never existed.
    fn cancel(&mut self, id: TimerId) -> bool;

    fn is_pending(&self, id: TimerId) -> bool;

    fn pending_count(&self) -> usize;

    /// Number of `schedule_*` calls made over the scheduler's lifetime.
    fn scheduled_total(&self) -> u64;
}

/// Shared handle given to components that arm timers.
pub type SchedulerHandle = Rc<RefCell<dyn Scheduler>>;

/// Pops due timers one by one and hands each to `dispatch`.
///
/// The queue borrow is released before `dispatch` runs, so handlers are free
/// to arm or cancel timers on the same queue. Returns how many timers fired.
pub fn drain_due<C, F>(queue: &Rc<RefCell<TimerQueue<C>>>, mut dispatch: F) -> usize
where
    C: Clock,
    F: FnMut(TimerId),
{
    let mut fired = 0;
    loop {
        let next = queue.borrow_mut().poll_due();
        match next {
            Some(id) => {
                fired += 1;
                dispatch(id);
            }
            None => return fired,
        }
    }
}
