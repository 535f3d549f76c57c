//! Simulated colleague activity.
//!
//! Once per interval the simulation rolls a single chance; on a hit one
//! colleague performs one action. The roll is pure over an injected RNG so
//! its distribution can be pinned down in tests.

use rand::Rng;

use crate::activity::Action;

/// Probability that any given interval produces a colleague action.
pub const PEER_CHANCE: f32 = 0.3;

/// Colleagues used when the config file does not supply a roster.
pub const DEFAULT_ROSTER: [&str; 8] = [
    "Patricia", "Marcus", "Emily", "Raj", "Sofia", "Jordan", "Aiko", "Leon",
];

/// A colleague action produced by a successful roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerEvent {
    pub action: Action,
    pub actor: String,
}

/// Rolls one interval's worth of colleague activity.
///
/// Hits with probability [`PEER_CHANCE`]; on a hit the action and the actor
/// are each drawn uniformly. An empty roster never produces an event.
pub fn roll(rng: &mut impl Rng, roster: &[String]) -> Option<PeerEvent> {
    if roster.is_empty() || rng.gen::<f32>() >= PEER_CHANCE {
        return None;
    }
    let action = Action::ALL[rng.gen_range(0..Action::ALL.len())];
    let actor = roster[rng.gen_range(0..roster.len())].clone();
    Some(PeerEvent { action, actor })
}

/// [`DEFAULT_ROSTER`] as owned strings.
pub fn default_roster() -> Vec<String> {
    DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect()
}
