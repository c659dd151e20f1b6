//! Repeating slideshow timer.
//!
//! The timer is driven by the frame clock: callers hand in `Instant`s and
//! poll once per frame. At most one timer is armed at a time; its handle id
//! changes only when a new timer is armed.

use std::time::{Duration, Instant};

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ArmedTimer {
    id: u64,
    due: Instant,
}

#[derive(Debug)]
pub struct AutoplayTimer {
    interval: Duration,
    armed: Option<ArmedTimer>,
    next_id: u64,
}

impl AutoplayTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            armed: None,
            next_id: 1,
        }
    }

    /// Arms the timer. Returns false when it was already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.armed.is_some() {
            return false;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.armed = Some(ArmedTimer {
            id,
            due: now + self.interval,
        });
        trace!(id, interval = ?self.interval, "autoplay timer armed");
        true
    }

    /// Disarms the timer. Returns false when it was not running.
    pub fn stop(&mut self) -> bool {
        match self.armed.take() {
            Some(timer) => {
                trace!(id = timer.id, "autoplay timer cleared");
                true
            }
            None => false,
        }
    }

    /// Changes the period; a running timer restarts with it.
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        if interval == self.interval {
            return;
        }
        self.interval = interval;
        if self.stop() {
            self.start(now);
        }
    }

    /// True once per elapsed period. Missed periods are dropped.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(timer) = self.armed.as_mut() else {
            return false;
        };
        if now < timer.due {
            return false;
        }
        timer.due += self.interval;
        if timer.due <= now {
            timer.due = now + self.interval;
        }
        true
    }

    /// Time left until the next tick, if running.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.armed
            .map(|timer| timer.due.saturating_duration_since(now))
    }

    pub fn is_running(&self) -> bool {
        self.armed.is_some()
    }

    /// Id of the armed timer.
    pub fn handle(&self) -> Option<u64> {
        self.armed.map(|timer| timer.id)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Unconditional stop used when the owning gallery goes away.
    pub fn teardown(&mut self) {
        self.armed = None;
    }
}
