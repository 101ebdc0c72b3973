use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Number of dice in a Schocken hand.
pub const DICE_PER_HAND: usize = 3;

#[derive(Debug, Clone)]
enum ThrowSource {
    Seeded(ChaCha20Rng),
    Scripted { faces: Vec<u8>, position: usize },
}

/// Source of die throws for a game.
///
/// Either a seeded ChaCha20 stream (normal play, reproducible via the seed)
/// or a scripted face sequence injected for regression tests. A scripted
/// cup cycles through its faces when exhausted.
#[derive(Debug, Clone)]
pub struct DiceCup {
    source: ThrowSource,
}

impl DiceCup {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            source: ThrowSource::Seeded(ChaCha20Rng::seed_from_u64(seed)),
        }
    }

    /// A cup that replays the given faces in order, wrapping around at the
    /// end. Face values are not validated here; out-of-range values surface
    /// as `InvalidInput` when the resulting hand is evaluated.
    ///
    /// # Panics
    ///
    /// Panics on an empty face list, which could only produce a made-up
    /// throw stream.
    pub fn from_faces(faces: Vec<u8>) -> Self {
        assert!(!faces.is_empty(), "scripted dice cup needs at least one face");
        Self {
            source: ThrowSource::Scripted { faces, position: 0 },
        }
    }

    pub fn throw_die(&mut self) -> u8 {
        match &mut self.source {
            ThrowSource::Seeded(rng) => rng.random_range(1..=6),
            ThrowSource::Scripted { faces, position } => {
                let face = faces[*position % faces.len()];
                *position += 1;
                face
            }
        }
    }

    pub fn throw_all(&mut self, n: usize) -> Vec<u8> {
        (0..n).map(|_| self.throw_die()).collect()
    }
}
