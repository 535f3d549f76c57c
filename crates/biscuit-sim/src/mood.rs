/// The five moods the dog can display.
///
/// `Idle` and `Sleeping` are resting states the simulation settles into;
/// the other three are transient and revert to `Idle` on a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    /// Default resting state.
    Idle = 0,
    /// Post-petting glow.
    Happy = 1,
    /// Chowing down after being fed.
    Eating = 2,
    /// Dozing off when energy runs low.
    Sleeping = 3,
    /// Out on a walk.
    Walking = 4,
}

impl Mood {
    /// Total number of mood variants.
    pub const COUNT: usize = 5;

    /// All moods in ordinal order.
    pub const ALL: [Mood; Self::COUNT] = [
        Mood::Idle,
        Mood::Happy,
        Mood::Eating,
        Mood::Sleeping,
        Mood::Walking,
    ];

    /// Short status caption shown next to the pet's name.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Idle => "Chillin",
            Mood::Happy => "So Happy!",
            Mood::Eating => "Nom Nom",
            Mood::Sleeping => "Zzz...",
            Mood::Walking => "Walkin!",
        }
    }

    /// Lowercase identifier used in logs and snapshots.
    pub fn name(&self) -> &'static str {
        match self {
            Mood::Idle => "idle",
            Mood::Happy => "happy",
            Mood::Eating => "eating",
            Mood::Sleeping => "sleeping",
            Mood::Walking => "walking",
        }
    }
}

impl Default for Mood {
    fn default() -> Self {
        Mood::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_ordinal_values() {
        assert_eq!(Mood::Idle as usize, 0);
        assert_eq!(Mood::Happy as usize, 1);
        assert_eq!(Mood::Eating as usize, 2);
        assert_eq!(Mood::Sleeping as usize, 3);
        assert_eq!(Mood::Walking as usize, 4);
    }

    #[test]
    fn mood_all_matches_count() {
        assert_eq!(Mood::ALL.len(), Mood::COUNT);
    }

    #[test]
    fn labels_are_distinct() {
        for (i, a) in Mood::ALL.iter().enumerate() {
            for b in &Mood::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
