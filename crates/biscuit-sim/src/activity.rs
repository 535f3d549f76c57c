use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::mood::Mood;

/// Actor name recorded for actions taken at this keyboard.
pub const USER_ACTOR: &str = "You";

/// Maximum number of entries the activity log retains.
pub const ACTIVITY_CAP: usize = 50;

/// A care action, whether performed locally or by a remote colleague.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Feed,
    Pet,
    Walk,
}

impl Action {
    /// All actions in ordinal order.
    pub const ALL: [Action; 3] = [Action::Feed, Action::Pet, Action::Walk];

    /// Lowercase identifier, also the console command name.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Feed => "feed",
            Action::Pet => "pet",
            Action::Walk => "walk",
        }
    }

    /// The transient mood a local action puts the dog in.
    pub fn mood(&self) -> Mood {
        match self {
            Action::Feed => Mood::Eating,
            Action::Pet => Mood::Happy,
            Action::Walk => Mood::Walking,
        }
    }

    /// How long the dog stays busy (and in the transient mood).
    pub fn duration(&self) -> Duration {
        match self {
            Action::Feed => Duration::from_millis(2000),
            Action::Pet => Duration::from_millis(2500),
            Action::Walk => Duration::from_millis(3000),
        }
    }

    /// Past-tense sentence fragment for the activity feed.
    pub fn message(&self) -> &'static str {
        match self {
            Action::Feed => "fed the dog",
            Action::Pet => "pet the dog",
            Action::Walk => "walked the dog",
        }
    }

    /// Progress caption shown while the dog is busy with this action.
    pub fn busy_label(&self) -> &'static str {
        match self {
            Action::Feed => "Feeding...",
            Action::Pet => "Petting...",
            Action::Walk => "Walking...",
        }
    }
}

/// One entry in the activity feed.
#[derive(Debug, Clone)]
pub struct ActivityItem {
    /// Monotonic id, unique within a session.
    pub id: u64,
    pub action: Action,
    /// Who did it: [`USER_ACTOR`] or a colleague name.
    pub actor: String,
    /// When it happened.
    pub at: Instant,
}

/// Newest-first ring of recent activity, capped at [`ACTIVITY_CAP`] entries.
#[derive(Debug, Default)]
pub struct ActivityLog {
    items: VecDeque<ActivityItem>,
    next_id: u64,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an action, evicting the oldest entry once the cap is hit.
    /// Returns the id assigned to the new entry.
    pub fn push(&mut self, action: Action, actor: impl Into<String>, at: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_front(ActivityItem {
            id,
            action,
            actor: actor.into(),
            at,
        });
        while self.items.len() > ACTIVITY_CAP {
            self.items.pop_back();
        }
        id
    }

    /// Entries newest first.
    pub fn items(&self) -> impl Iterator<Item = &ActivityItem> {
        self.items.iter()
    }

    /// Most recent entry, if any.
    pub fn latest(&self) -> Option<&ActivityItem> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_orders_newest_first() {
        let now = Instant::now();
        let mut log = ActivityLog::new();
        log.push(Action::Feed, USER_ACTOR, now);
        log.push(Action::Walk, "Marcus", now + Duration::from_secs(1));

        let items: Vec<_> = log.items().collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].action, Action::Walk);
        assert_eq!(items[0].actor, "Marcus");
        assert_eq!(items[1].action, Action::Feed);
    }

    #[test]
    fn ids_are_monotonic_and_unique() {
        let now = Instant::now();
        let mut log = ActivityLog::new();
        let a = log.push(Action::Feed, USER_ACTOR, now);
        let b = log.push(Action::Pet, USER_ACTOR, now);
        assert!(b > a);
    }

    #[test]
    fn cap_evicts_oldest_entries() {
        let now = Instant::now();
        let mut log = ActivityLog::new();
        for i in 0..60 {
            log.push(Action::Pet, format!("actor-{i}"), now);
        }
        assert_eq!(log.len(), ACTIVITY_CAP);
        // Newest entry survives at the front, oldest ten are gone.
        assert_eq!(log.latest().map(|i| i.actor.as_str()), Some("actor-59"));
        let oldest = log.items().last().map(|i| i.actor.clone());
        assert_eq!(oldest.as_deref(), Some("actor-10"));
    }

    #[test]
    fn ids_stay_unique_across_eviction() {
        let now = Instant::now();
        let mut log = ActivityLog::new();
        for _ in 0..55 {
            log.push(Action::Feed, USER_ACTOR, now);
        }
        let mut ids: Vec<_> = log.items().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ACTIVITY_CAP);
        assert_eq!(log.push(Action::Feed, USER_ACTOR, now), 55);
    }

    #[test]
    fn action_durations_match_moods() {
        assert_eq!(Action::Feed.duration(), Duration::from_millis(2000));
        assert_eq!(Action::Pet.duration(), Duration::from_millis(2500));
        assert_eq!(Action::Walk.duration(), Duration::from_millis(3000));
        assert_eq!(Action::Feed.mood(), Mood::Eating);
        assert_eq!(Action::Pet.mood(), Mood::Happy);
        assert_eq!(Action::Walk.mood(), Mood::Walking);
    }
}
