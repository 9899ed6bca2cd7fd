//! The relocation engine.
//!
//! An unhappy agent is picked up and dropped at a uniformly random index of
//! the ring *with itself removed* (so `len - 1` candidate slots), then its
//! happiness is re-evaluated at the new spot.  This repeats until the agent
//! is happy or `2 × len` placements have been tried.  Running out of tries
//! is not an error: the agent simply stays at its last placement.
//!
//! Each placement is a single [`Lattice::relocate`] rotation, so the ring
//! length never changes and every other agent keeps its relative order.

use sg_core::config::RELOCATION_TRIES_PER_AGENT;
use sg_core::{Lattice, ModelConfig, SgError, SgResult, TrialRng};

use crate::is_happy;

/// Outcome of one call to [`relocate_until_happy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Relocation {
    /// Index the agent ended up at.
    pub position: usize,
    /// Placements attempted (`1..=2 × len`).
    pub tries: usize,
    /// Whether the final placement satisfies the agent.
    pub happy: bool,
}

/// Move the agent at `position` to random spots until it is happy or the
/// placement budget is spent.
pub fn relocate_until_happy(
    lattice:  &mut Lattice,
    position: usize,
    config:   &ModelConfig,
    rng:      &mut TrialRng,
) -> SgResult<Relocation> {
    let len = lattice.len();
    if position >= len {
        return Err(SgError::PositionOutOfRange { position, len });
    }
    // A single-agent ring has nowhere else to go.
    if len < 2 {
        return Ok(Relocation { position, tries: 0, happy: is_happy(lattice, position, config) });
    }

    let budget = RELOCATION_TRIES_PER_AGENT * len;
    let mut current = position;
    let mut tries = 0;
    let mut happy = false;

    while !happy && tries < budget {
        let target = rng.index(len - 1);
        lattice.relocate(current, target)?;
        current = target;
        tries += 1;
        happy = is_happy(lattice, current, config);
    }

    Ok(Relocation { position: current, tries, happy })
}
