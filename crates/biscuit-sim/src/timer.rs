//! Deadline bookkeeping for the simulation.
//!
//! Both timers are polled with an explicit `Instant` rather than reading the
//! clock themselves, so tests can drive them with virtual time.

use std::time::{Duration, Instant};

/// A repeating timer that reports how many whole periods have elapsed.
///
/// Polling after a long stall reports every missed period, so callers can
/// catch up instead of silently dropping cycles.
#[derive(Debug, Clone)]
pub struct Periodic {
    period: Duration,
    next_due: Instant,
}

impl Periodic {
    /// Starts a timer whose first firing is one period after `now`.
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    /// Returns the number of periods that elapsed since the last poll.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut fired = 0;
        while now >= self.next_due {
            self.next_due += self.period;
            fired += 1;
        }
        fired
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

/// A cancellable single deadline.
///
/// Re-arming replaces any pending deadline, so the latest caller always
/// wins. Polling at or after the deadline fires exactly once.
#[derive(Debug, Clone, Default)]
pub struct OneShot {
    due: Option<Instant>,
}

impl OneShot {
    /// A timer with nothing scheduled.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Schedules (or reschedules) the deadline.
    pub fn arm(&mut self, due: Instant) {
        self.due = Some(due);
    }

    /// Drops any pending deadline.
    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    /// True exactly once, the first poll at or past the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
