use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use super::clock::Clock;
use super::{Scheduler, TimerId};

/// Shortest delay or interval accepted. A handler that re-arms with a zero
/// delay would otherwise be due again at the same instant, forever.
const MIN_DELAY: Duration = Duration::from_millis(1);

/// Deadline-ordered timer queue driven by a [`Clock`].
///
/// Logical time (`Scheduler::now`) only moves forward when the queue is
/// polled. While a fired timer is being handled it equals that timer's
/// deadline, so anything the handler schedules is measured from the moment
/// the timer was due rather than from whenever the host got around to
/// polling.
pub struct TimerQueue<C: Clock> {
    clock: C,
    now: Duration,
    next_id: u64,
    /// (deadline, id) -> repeat interval
    timers: BTreeMap<(Duration, TimerId), Option<Duration>>,
    deadlines: HashMap<TimerId, Duration>,
    scheduled_total: u64,
    fired_total: u64,
}

impl<C: Clock> TimerQueue<C> {
    pub fn new(clock: C) -> Self {
        let now = clock.elapsed();
        Self {
            clock,
            now,
            next_id: 0,
            timers: BTreeMap::new(),
            deadlines: HashMap::new(),
            scheduled_total: 0,
            fired_total: 0,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the next timer whose deadline has passed, if any.
    ///
    /// Repeating timers are re-armed one interval after their previous
    /// deadline before being returned.
    pub fn poll_due(&mut self) -> Option<TimerId> {
        let limit = self.clock.elapsed();
        let key = match self.timers.first_key_value() {
            Some((&key, _)) if key.0 <= limit => key,
            _ => {
                self.now = self.now.max(limit);
                return None;
            }
        };

        let interval = self.timers.remove(&key)?;
        let (deadline, id) = key;
        self.now = self.now.max(deadline);
        self.fired_total += 1;

        match interval {
            Some(interval) => {
                let next = deadline + interval;
                self.timers.insert((next, id), Some(interval));
                self.deadlines.insert(id, next);
            }
            None => {
                self.deadlines.remove(&id);
            }
        }

        tracing::trace!(%id, at_ms = deadline.as_millis() as u64, "timer fired");
        Some(id)
    }

    /// Deadline of the earliest pending timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.first_key_value().map(|(&(deadline, _), _)| deadline)
    }

    /// Time until the earliest pending timer is due, measured on the clock.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(self.clock.elapsed()))
    }

    pub fn fired_total(&self) -> u64 {
        self.fired_total
    }

    fn insert(&mut self, delay: Duration, interval: Option<Duration>) -> TimerId {
        let id = TimerId::new(self.next_id);
        self.next_id += 1;
        self.scheduled_total += 1;

        let deadline = self.now + delay;
        self.timers.insert((deadline, id), interval);
        self.deadlines.insert(id, deadline);
        id
    }
}

impl<C: Clock> Scheduler for TimerQueue<C> {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        let delay = delay.max(MIN_DELAY);
        let id = self.insert(delay, None);
        tracing::trace!(%id, delay_ms = delay.as_millis() as u64, "scheduled one-shot");
        id
    }

    fn schedule_repeating(&mut self, interval: Duration) -> TimerId {
        let interval = interval.max(MIN_DELAY);
        let id = self.insert(interval, Some(interval));
        tracing::trace!(%id, interval_ms = interval.as_millis() as u64, "scheduled repeating");
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(deadline) => {
                self.timers.remove(&(deadline, id));
                tracing::trace!(%id, "timer cancelled");
                true
            }
            None => false,
        }
    }

    fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    fn pending_count(&self) -> usize {
        self.timers.len()
    }

    fn scheduled_total(&self) -> u64 {
        self.scheduled_total
    }
}
