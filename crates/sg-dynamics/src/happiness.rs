//! The happiness oracle.
//!
//! An agent looks `vision` positions to each side (wrapping around the ring)
//! and counts how many of those `2 × vision` neighbours share its type.  It
//! is happy when that fraction reaches the tolerance:
//!
//!   same / (2 × vision) >= tolerance
//!
//! The count is taken as "neighbours of type `O`" and inverted for `X`
//! agents, so swapping every label on the ring never changes any agent's
//! happiness.

use sg_core::{AgentType, Lattice, ModelConfig};

/// Whether the agent at `position` is content with its neighbourhood.
///
/// # Panics
/// Panics if `position >= lattice.len()`.
pub fn is_happy(lattice: &Lattice, position: usize, config: &ModelConfig) -> bool {
    let vision = config.vision();
    let mut ones = 0usize;
    for d in 1..=vision as isize {
        ones += lattice.type_at_offset(position, -d).code() as usize;
        ones += lattice.type_at_offset(position, d).code() as usize;
    }

    let neighbourhood = config.neighbourhood();
    let same = match lattice.type_at(position) {
        AgentType::O => ones,
        AgentType::X => neighbourhood - ones,
    };

    same as f64 / neighbourhood as f64 >= config.tolerance()
}

/// Every position whose agent is unhappy, in ascending order.
pub fn unhappy_positions(lattice: &Lattice, config: &ModelConfig) -> Vec<usize> {
    (0..lattice.len())
        .filter(|&i| !is_happy(lattice, i, config))
        .collect()
}

/// `true` when every agent on the ring is happy.
pub fn is_converged(lattice: &Lattice, config: &ModelConfig) -> bool {
    (0..lattice.len()).all(|i| is_happy(lattice, i, config))
}
