//! Model configuration.
//!
//! # Design
//!
//! All parameters that govern a single trial (lattice size, vision radius,
//! tolerance) live in one immutable [`ModelConfig`] value that is passed by
//! reference to the trial driver and the relocation engine.  The only way to
//! obtain one is [`ModelConfig::new`], which validates every field, so code
//! holding a `ModelConfig` never has to re-check its invariants.
//!
//! The two work bounds derived from the size are fixed multiples:
//!
//!   tick budget       = 500 × size   (relocations per trial)
//!   relocation budget =   2 × size   (placements per relocation)

use crate::{SgError, SgResult};

/// Relocation ticks allowed per agent before a trial is abandoned.
pub const TICK_BUDGET_PER_AGENT: u64 = 500;

/// Placement attempts per agent length for a single relocation.
pub const RELOCATION_TRIES_PER_AGENT: usize = 2;

/// Validated parameters for one trial.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelConfig {
    /// Number of agents on the ring.  Always `> vision`.
    size: usize,

    /// Positions examined on each side of an agent.  Always `>= 1`.
    vision: usize,

    /// Minimum same-type neighbour fraction for happiness, in `(0, 1)`.
    tolerance: f64,
}

impl ModelConfig {
    /// Validate and build.
    ///
    /// Rejects `size == 0`, `vision == 0`, `vision >= size`, and any
    /// tolerance outside the open interval `(0, 1)` (including NaN).
    pub fn new(size: usize, vision: usize, tolerance: f64) -> SgResult<Self> {
        if size == 0 {
            return Err(SgError::Config(
                "the number of agents to simulate must be positive".into(),
            ));
        }
        if vision == 0 {
            return Err(SgError::Config(
                "the neighborhood size must be positive".into(),
            ));
        }
        if !(tolerance > 0.0 && tolerance < 1.0) {
            return Err(SgError::Config(format!(
                "tolerance must be a decimal greater than zero and less than one (got {tolerance})"
            )));
        }
        if vision >= size {
            return Err(SgError::Config(format!(
                "vision ({vision}) must be less than the number of agents ({size})"
            )));
        }
        Ok(Self { size, vision, tolerance })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn vision(&self) -> usize {
        self.vision
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Neighbours examined per happiness check (`2 × vision`).
    #[inline]
    pub fn neighbourhood(&self) -> usize {
        2 * self.vision
    }

    /// Ticks after which a trial is abandoned as non-convergent.
    #[inline]
    pub fn tick_budget(&self) -> u64 {
        TICK_BUDGET_PER_AGENT * self.size as u64
    }
}
