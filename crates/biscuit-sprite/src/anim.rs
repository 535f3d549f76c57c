use std::time::{Duration, Instant};

/// Number of animation phases in the cycle.
pub const PHASES: u8 = 4;

/// Interval between phase advances.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(400);

/// Free-running four-phase animation clock.
///
/// The phase advances every [`FRAME_INTERVAL`] regardless of mood, so a
/// mood change mid-cycle never stutters the walk bob or the tail wag.
/// [`tick`](Self::tick) catches up when polled late.
#[derive(Debug, Clone)]
pub struct FrameClock {
    phase: u8,
    interval: Duration,
    last_advance: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self {
            phase: 0,
            interval: FRAME_INTERVAL,
            last_advance: now,
        }
    }

    /// Advances the clock, stepping once per elapsed interval.
    pub fn tick(&mut self, now: Instant) {
        if let Some(mut dt) = now.checked_duration_since(self.last_advance) {
            while dt >= self.interval {
                self.phase = (self.phase + 1) % PHASES;
                self.last_advance += self.interval;
                dt -= self.interval;
            }
        }
    }

    /// Current phase in `0..PHASES`.
    pub fn phase(&self) -> u8 {
        self.phase
    }
}
