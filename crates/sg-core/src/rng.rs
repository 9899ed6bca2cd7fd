//! Deterministic per-trial and batch-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each trial gets its own independent `SmallRng` seeded by:
//!
//!   seed = batch_seed XOR (trial_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive trial indices uniformly across the seed space.
//! This means:
//!
//! - Trials never share RNG state (no contention, no ordering dependency).
//! - A trial's outcome depends only on `(batch_seed, trial_index)`, so the
//!   same batch run serially or on any number of workers yields the same
//!   per-trial results.
//! - All RNG calls are local to the owning thread; no synchronisation needed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── TrialRng ──────────────────────────────────────────────────────────────────

/// Per-trial deterministic RNG.
///
/// Created by the worker that runs the trial and dropped with it.  It is
/// never shared; the trial owns it exclusively.
pub struct TrialRng(SmallRng);

impl TrialRng {
    /// Seed deterministically from the batch seed and a 0-based trial index.
    pub fn new(batch_seed: u64, trial_index: u64) -> Self {
        let seed = batch_seed ^ trial_index.wrapping_mul(MIXING_CONSTANT);
        TrialRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform index in `[0, len)`.
    ///
    /// # Panics
    /// Panics if `len == 0`.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Batch-level RNG, used only to pick a batch seed when the caller did not
/// supply one.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Draw a fresh 64-bit batch seed.
    #[inline]
    pub fn next_seed(&mut self) -> u64 {
        self.0.r#gen()
    }
}
