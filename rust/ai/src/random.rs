//! Randomized strategy with its own seeded RNG stream.
//!
//! Useful as a benchmark opponent and for shaking out engine invariants:
//! its choices are arbitrary but always valid re-roll indices. Seeded
//! construction keeps games reproducible.

use std::sync::Mutex;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use schocken_engine::strategy::Strategy;

pub struct RandomStrategy {
    // choose_rerolls takes &self, so the RNG sits behind a mutex
    rng: Mutex<ChaCha20Rng>,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn choose_rerolls(&self, faces: &[u8], _throw_number: u8, _throws_remaining: u8) -> Vec<usize> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if rng.random_bool(0.5) {
            return Vec::new();
        }
        (0..faces.len()).filter(|_| rng.random_bool(0.5)).collect()
    }

    fn name(&self) -> &str {
        "random"
    }
}
