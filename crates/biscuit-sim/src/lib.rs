//! Dog simulation for the Biscuit dashboard.
//!
//! This crate owns all pet state: the three decaying care gauges, the mood
//! state machine with its timed reverts, the capped activity log, and the
//! seeded colleague roll. It has no I/O and no internal clock; callers feed
//! it `Instant`s, which keeps every rule testable with virtual time.
//!
//! # Quick start
//!
//! ```
//! use std::time::{Duration, Instant};
//! use biscuit_sim::{ActionOutcome, Mood, PetSim};
//!
//! let t0 = Instant::now();
//! let mut sim = PetSim::with_default_roster(42, t0);
//! assert_eq!(sim.feed(t0), ActionOutcome::Applied);
//! assert_eq!(sim.mood(), Mood::Eating);
//! sim.tick(t0 + Duration::from_millis(2000));
//! assert!(!sim.is_busy());
//! ```

mod activity;
mod gauge;
mod mood;
pub mod peer;
mod sim;
pub mod timer;

pub use activity::{Action, ActivityItem, ActivityLog, ACTIVITY_CAP, USER_ACTOR};
pub use gauge::{Gauge, GAUGE_MAX, GAUGE_MIN};
pub use mood::Mood;
pub use sim::{
    ActionOutcome, PetSim, SimSnapshot, DECAY_INTERVAL, PEER_INTERVAL, SLEEP_THRESHOLD,
};
