//! Random number generation
//!
//! Every random decision in the game goes through [`RandomSource`], so a
//! session can run on a seeded ChaCha RNG in play and on a fixed draw
//! sequence in tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// Returns 0..n-1, computed as `floor(roll * n)`.
    ///
    /// Returns 0 if n is 0.
    fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let value = (self.roll() * n as f64) as u32;
        value.min(n - 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll(&mut self) -> f64 {
        (**self).roll()
    }
}

/// Game random number generator
///
/// Wraps ChaCha8Rng so that a game started with the same seed replays the
/// same forest.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for GameRng {
    fn roll(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
///
/// An empty list always yields 0.0.
#[derive(Debug, Clone, Default)]
pub struct SequenceRng {
    draws: Vec<f64>,
    next: usize,
    consumed: usize,
}

impl SequenceRng {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            next: 0,
            consumed: 0,
        }
    }

    /// Number of draws handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for SequenceRng {
    fn roll(&mut self) -> f64 {
        self.consumed += 1;
        let Some(&value) = self.draws.get(self.next) else {
            return 0.0;
        };
        self.next = (self.next + 1) % self.draws.len();
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
