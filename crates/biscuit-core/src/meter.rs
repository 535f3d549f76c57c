use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Measures loop ticks-per-second over a sliding time window.
///
/// The app records one tick per loop iteration; the console's `tps` command
/// and the shell footer read the rate back. Timestamps older than the
/// window are pruned on each tick.
pub struct TickMeter {
    timestamps: VecDeque<Instant>,
    window: Duration,
}

impl Default for TickMeter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl TickMeter {
    /// Create a meter with the given measurement window.
    pub fn new(window: Duration) -> Self {
        Self {
            timestamps: VecDeque::new(),
            window,
        }
    }

    /// Record a tick at the given instant and prune expired timestamps.
    pub fn tick(&mut self, now: Instant) {
        self.timestamps.push_back(now);
        let cutoff = now - self.window;
        while let Some(&front) = self.timestamps.front() {
            if front < cutoff {
                self.timestamps.pop_front();
            } else {
                break;
            }
        }
    }

    /// Current ticks-per-second based on timestamps in the window.
    ///
    /// Returns `0.0` until at least two ticks have been recorded.
    pub fn tps(&self) -> f64 {
        if self.timestamps.len() < 2 {
            return 0.0;
        }
        let now = match self.timestamps.back() {
            Some(t) => *t,
            None => return 0.0,
        };
        let window_start = now - self.window;
        let count = self
            .timestamps
            .iter()
            .filter(|&&t| t >= window_start)
            .count();
        count as f64 / self.window.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_meter_reads_zero() {
        assert_eq!(TickMeter::default().tps(), 0.0);
    }

    #[test]
    fn single_tick_reads_zero() {
        let mut meter = TickMeter::default();
        meter.tick(Instant::now());
        assert_eq!(meter.tps(), 0.0);
    }

    #[test]
    fn steady_ticks_read_the_true_rate() {
        let mut meter = TickMeter::new(Duration::from_secs(1));
        let base = Instant::now();
        for i in 0..10 {
            meter.tick(base + Duration::from_millis(i * 100));
        }
        let tps = meter.tps();
        assert!(tps > 9.0 && tps < 11.0, "tps was {tps}");
    }

    #[test]
    fn old_timestamps_fall_out_of_the_window() {
        let mut meter = TickMeter::new(Duration::from_secs(1));
        let base = Instant::now();
        for i in 0..5 {
            meter.tick(base + Duration::from_millis(i * 200));
        }
        for i in 0..3 {
            meter.tick(base + Duration::from_millis(1000 + i * 300));
        }
        assert!(
            meter.timestamps.len() <= 5,
            "timestamps: {}",
            meter.timestamps.len()
        );
    }

    #[test]
    fn a_stall_drops_the_reported_rate() {
        let mut meter = TickMeter::new(Duration::from_secs(1));
        let base = Instant::now();
        for i in 0..20 {
            meter.tick(base + Duration::from_millis(i * 50));
        }
        let busy = meter.tps();
        meter.tick(base + Duration::from_millis(3000));
        meter.tick(base + Duration::from_millis(3500));
        assert!(meter.tps() < busy);
    }
}
