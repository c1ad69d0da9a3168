//! Shared test utilities: a virtual-time scheduler harness.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use termfolio::scheduler::{drain_due, Scheduler, SchedulerHandle, TimerId, TimerQueue, VirtualClock};

/// A timer queue on a virtual clock. Time only moves when the test says so.
pub struct Harness {
    pub clock: VirtualClock,
    pub queue: Rc<RefCell<TimerQueue<VirtualClock>>>,
}

impl Harness {
    pub fn new() -> Self {
        let clock = VirtualClock::new();
        let queue = Rc::new(RefCell::new(TimerQueue::new(clock.clone())));
        Self { clock, queue }
    }

    pub fn handle(&self) -> SchedulerHandle {
        self.queue.clone()
    }

    /// Advances time by `ms` and hands every timer that came due to `dispatch`.
    pub fn advance<F: FnMut(TimerId)>(&self, ms: u64, dispatch: F) -> usize {
        self.clock.advance_ms(ms);
        drain_due(&self.queue, dispatch)
    }

    pub fn now(&self) -> Duration {
        self.queue.borrow().now()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().pending_count()
    }

    pub fn scheduled_total(&self) -> u64 {
        self.queue.borrow().scheduled_total()
    }
}

/// Writes `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}
