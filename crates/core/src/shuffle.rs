use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Source of round permutations, injectable for deterministic tests.
#[derive(Debug, Clone, Default)]
pub enum Shuffler {
    /// Uniform shuffle driven by the thread-local generator.
    #[default]
    Thread,
    /// Uniform shuffle driven by a seeded generator.
    Seeded(StdRng),
    /// Leaves items in source order.
    Identity,
}

impl Shuffler {
    /// Returns a shuffler backed by the thread-local generator.
    #[must_use]
    pub fn thread() -> Self {
        Self::Thread
    }

    /// Returns a reproducible shuffler for the given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(StdRng::seed_from_u64(seed))
    }

    /// Returns a shuffler that keeps source order.
    #[must_use]
    pub fn identity() -> Self {
        Self::Identity
    }

    /// Permutes `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        match self {
            Shuffler::Thread => items.shuffle(&mut rand::rng()),
            Shuffler::Seeded(rng) => items.shuffle(rng),
            Shuffler::Identity => {}
        }
    }
}
