//! Deterministic scene randomness.
//!
//! PCG-based RNG seeded from the scene configuration so generated
//! geometry (the asteroid belt) replays bitwise across runs and
//! platforms.

use rand::prelude::*;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

/// Deterministic, reproducible random number generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneRng {
    /// Seed for reproducibility.
    seed: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl SceneRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Get the seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random f64 in [0, 1).
    pub fn gen_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Generate a random f64 in the given range.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn gen_range_f64(&mut self, min: f64, max: f64) -> f64 {
        assert!(min <= max, "Invalid range: min > max");
        min + (max - min) * self.gen_f64()
    }

    /// Generate a random angle in [0, 2π).
    pub fn gen_angle(&mut self) -> f64 {
        self.gen_f64() * std::f64::consts::TAU
    }
}
