//! Bounded care gauges.
//!
//! Every stat the dog has is a [`Gauge`]: a float pinned to `0.0..=100.0`.
//! All mutation goes through [`Gauge::apply`] so a caller can never push a
//! value out of range, no matter how large the delta.

use serde::Serialize;

/// Lower bound for every gauge.
pub const GAUGE_MIN: f32 = 0.0;
/// Upper bound for every gauge.
pub const GAUGE_MAX: f32 = 100.0;

/// A single care stat clamped to `[GAUGE_MIN, GAUGE_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Gauge(f32);

impl Gauge {
    /// Creates a gauge, clamping the initial value into range.
    pub fn new(value: f32) -> Self {
        Self(value.clamp(GAUGE_MIN, GAUGE_MAX))
    }

    /// Adds `delta` (which may be negative) and clamps the result.
    pub fn apply(&mut self, delta: f32) {
        self.0 = (self.0 + delta).clamp(GAUGE_MIN, GAUGE_MAX);
    }

    /// Current value in `[0.0, 100.0]`.
    pub fn value(&self) -> f32 {
        self.0
    }

    /// Value rounded to a whole percent for display.
    pub fn percent(&self) -> u8 {
        self.0.round() as u8
    }
}

impl Default for Gauge {
    fn default() -> Self {
        Self(GAUGE_MAX)
    }
}
