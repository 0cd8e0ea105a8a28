use std::sync::Mutex;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// How a new session orders its questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Shuffle {
    /// Uniform Fisher–Yates shuffle from the thread RNG.
    #[default]
    Random,
    /// Uniform shuffle from a seeded RNG; repeatable across runs.
    Seeded(u64),
    /// Keep source order.
    Preserve,
}

/// Applies a `Shuffle` policy, keeping the seeded RNG between sessions so each
/// restart gets a fresh (but reproducible) order.
pub(crate) struct Shuffler {
    mode: Shuffle,
    seeded: Option<Mutex<StdRng>>,
}

impl Shuffler {
    pub(crate) fn new(mode: Shuffle) -> Self {
        let seeded = match mode {
            Shuffle::Seeded(seed) => Some(Mutex::new(StdRng::seed_from_u64(seed))),
            Shuffle::Random | Shuffle::Preserve => None,
        };
        Self { mode, seeded }
    }

    pub(crate) fn mode(&self) -> Shuffle {
        self.mode
    }

    pub(crate) fn apply<T>(&self, items: &mut [T]) {
        match (self.mode, &self.seeded) {
            (Shuffle::Seeded(_), Some(rng)) => match rng.lock() {
                Ok(mut rng) => items.shuffle(&mut *rng),
                Err(poisoned) => items.shuffle(&mut *poisoned.into_inner()),
            },
            (Shuffle::Preserve, _) => {}
            _ => items.shuffle(&mut rand::rng()),
        }
    }
}
