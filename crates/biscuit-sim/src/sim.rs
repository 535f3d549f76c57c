use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::activity::{Action, ActivityLog, USER_ACTOR};
use crate::gauge::Gauge;
use crate::mood::Mood;
use crate::peer;
use crate::timer::{OneShot, Periodic};

/// Interval between passive stat decay steps.
pub const DECAY_INTERVAL: Duration = Duration::from_millis(3000);
/// Interval between colleague activity rolls.
pub const PEER_INTERVAL: Duration = Duration::from_millis(8000);
/// Energy level below which an idle dog dozes off.
pub const SLEEP_THRESHOLD: f32 = 15.0;

const START_HUNGER: f32 = 70.0;
const START_HAPPINESS: f32 = 65.0;
const START_ENERGY: f32 = 80.0;

const DECAY_HUNGER: f32 = -0.5;
const DECAY_HAPPINESS: f32 = -0.3;
const DECAY_ENERGY: f32 = -0.2;

/// Result of attempting a local care action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action started and the dog is now busy with it.
    Applied,
    /// Ignored: the dog was already busy.
    Busy,
}

/// Serializable view of the simulation, used by the console `dump` command.
#[derive(Debug, Serialize)]
pub struct SimSnapshot {
    pub hunger: f32,
    pub happiness: f32,
    pub energy: f32,
    pub mood: &'static str,
    pub busy: Option<&'static str>,
    pub activity_len: usize,
    pub seed: u64,
}

/// The dog simulation: three decaying gauges, a mood, and an activity log.
///
/// The sim never reads the clock itself. Callers pass `now` into every
/// mutating method, and [`tick`](Self::tick) catches up on all deadlines
/// that `now` has crossed, so the whole state machine can be driven with
/// virtual time in tests.
pub struct PetSim {
    hunger: Gauge,
    happiness: Gauge,
    energy: Gauge,
    mood: Mood,
    busy: Option<Action>,
    busy_clear: OneShot,
    mood_revert: OneShot,
    decay: Periodic,
    peers: Periodic,
    log: ActivityLog,
    roster: Vec<String>,
    rng: StdRng,
    seed: u64,
}

impl PetSim {
    /// Creates a fresh dog with the given colleague roster and RNG seed.
    pub fn new(roster: Vec<String>, seed: u64, now: Instant) -> Self {
        Self {
            hunger: Gauge::new(START_HUNGER),
            happiness: Gauge::new(START_HAPPINESS),
            energy: Gauge::new(START_ENERGY),
            mood: Mood::Idle,
            busy: None,
            busy_clear: OneShot::idle(),
            mood_revert: OneShot::idle(),
            decay: Periodic::new(DECAY_INTERVAL, now),
            peers: Periodic::new(PEER_INTERVAL, now),
            log: ActivityLog::new(),
            roster,
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// [`new`](Self::new) with the built-in colleague roster.
    pub fn with_default_roster(seed: u64, now: Instant) -> Self {
        Self::new(peer::default_roster(), seed, now)
    }

    pub fn hunger(&self) -> Gauge {
        self.hunger
    }

    pub fn happiness(&self) -> Gauge {
        self.happiness
    }

    pub fn energy(&self) -> Gauge {
        self.energy
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// The action currently in progress, if any.
    pub fn busy(&self) -> Option<Action> {
        self.busy
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.log
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Feed the dog: hunger +20, energy +5, eating for 2s.
    pub fn feed(&mut self, now: Instant) -> ActionOutcome {
        self.begin(Action::Feed, now)
    }

    /// Pet the dog: happiness +20, energy +3, happy for 2.5s.
    pub fn pet(&mut self, now: Instant) -> ActionOutcome {
        self.begin(Action::Pet, now)
    }

    /// Walk the dog: happiness +10, energy -15, hunger -10, walking for 3s.
    pub fn walk(&mut self, now: Instant) -> ActionOutcome {
        self.begin(Action::Walk, now)
    }

    /// Dispatches to [`feed`](Self::feed) / [`pet`](Self::pet) /
    /// [`walk`](Self::walk).
    pub fn apply(&mut self, action: Action, now: Instant) -> ActionOutcome {
        self.begin(action, now)
    }

    /// Advances the simulation to `now`: clears an expired busy flag,
    /// reverts an expired transient mood, then applies every decay step and
    /// colleague roll whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.busy_clear.poll(now) {
            self.busy = None;
        }
        if self.mood_revert.poll(now) {
            self.mood = Mood::Idle;
            self.settle();
        }
        for _ in 0..self.decay.poll(now) {
            self.decay_step();
        }
        for _ in 0..self.peers.poll(now) {
            self.roll_peer(now);
        }
    }

    /// Current state as plain data.
    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            hunger: self.hunger.value(),
            happiness: self.happiness.value(),
            energy: self.energy.value(),
            mood: self.mood.name(),
            busy: self.busy.map(|a| a.name()),
            activity_len: self.log.len(),
            seed: self.seed,
        }
    }

    fn begin(&mut self, action: Action, now: Instant) -> ActionOutcome {
        if self.busy.is_some() {
            debug!(action = action.name(), "care action ignored while busy");
            return ActionOutcome::Busy;
        }
        self.busy = Some(action);
        self.busy_clear.arm(now + action.duration());
        self.set_transient_mood(action.mood(), action.duration(), now);
        match action {
            Action::Feed => {
                self.hunger.apply(20.0);
                self.energy.apply(5.0);
            }
            Action::Pet => {
                self.happiness.apply(20.0);
                self.energy.apply(3.0);
            }
            Action::Walk => {
                self.happiness.apply(10.0);
                self.energy.apply(-15.0);
                self.hunger.apply(-10.0);
            }
        }
        self.log.push(action, USER_ACTOR, now);
        info!(action = action.name(), "care action started");
        ActionOutcome::Applied
    }

    /// Sets a transient mood and (re)schedules the revert to idle. Re-arming
    /// replaces any pending revert, so the newest action always wins.
    fn set_transient_mood(&mut self, mood: Mood, hold: Duration, now: Instant) {
        self.mood = mood;
        self.mood_revert.arm(now + hold);
    }

    fn decay_step(&mut self) {
        self.hunger.apply(DECAY_HUNGER);
        self.happiness.apply(DECAY_HAPPINESS);
        self.energy.apply(DECAY_ENERGY);
        self.settle();
    }

    fn roll_peer(&mut self, now: Instant) {
        let Some(ev) = peer::roll(&mut self.rng, &self.roster) else {
            return;
        };
        match ev.action {
            Action::Feed => self.hunger.apply(5.0),
            Action::Pet => self.happiness.apply(5.0),
            Action::Walk => {
                self.happiness.apply(3.0);
                self.energy.apply(-3.0);
            }
        }
        info!(actor = %ev.actor, action = ev.action.name(), "colleague pitched in");
        self.log.push(ev.action, ev.actor, now);
        self.settle();
    }

    /// Puts an idle dog to sleep once energy is below the threshold. Called
    /// wherever energy can fall or the mood returns to idle; sleeping then
    /// persists until the next care action.
    fn settle(&mut self) {
        if self.mood == Mood::Idle && self.energy.value() < SLEEP_THRESHOLD {
            self.mood = Mood::Sleeping;
            debug!(energy = self.energy.value(), "dozed off");
        }
    }
}
