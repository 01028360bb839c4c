//! Fixed-period tick scheduler.
//!
//! Callers pass `now` explicitly so the scheduler can be tested without
//! sleeping.

use std::time::{Duration, Instant};

use crate::types::TickStatus;

#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    next_due: Instant,
    armed: bool,
}

impl TickScheduler {
    /// Create a scheduler whose first tick is due one interval after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
            armed: true,
        }
    }

    pub fn from_millis(ms: u32, now: Instant) -> Self {
        Self::new(Duration::from_millis(ms as u64), now)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Whether a tick should run at `now`.
    pub fn due(&self, now: Instant) -> bool {
        self.armed && now >= self.next_due
    }

    /// How long an input poll may block before the next tick is due.
    ///
    /// A disarmed scheduler still returns one interval so the front end keeps
    /// polling input (quit/restart) at the same cadence.
    pub fn timeout(&self, now: Instant) -> Duration {
        if !self.armed {
            return self.interval;
        }
        self.next_due.saturating_duration_since(now)
    }

    pub fn rearm(&mut self, now: Instant) {
        self.next_due = now + self.interval;
        self.armed = true;
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Record the outcome of a step: re-arm on `Continue`, disarm otherwise.
    pub fn complete(&mut self, status: TickStatus, now: Instant) {
        match status {
            TickStatus::Continue => self.rearm(now),
            TickStatus::Stopped => self.disarm(),
        }
    }
}
