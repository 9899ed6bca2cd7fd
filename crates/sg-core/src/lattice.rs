//! The circular agent lattice.
//!
//! # Representation
//!
//! A `Lattice` is a plain `Vec<AgentType>` interpreted as a ring: position
//! `len - 1` is adjacent to position `0`.  All neighbour lookups go through
//! [`Lattice::wrap`], which maps any signed offset into `[0, len)` using
//! Euclidean remainder, so `-1` is the last position and `len` is the first.
//!
//! # Mutation
//!
//! Relocation is the only mutation the model performs.  It is expressed two
//! ways:
//!
//! - [`remove`](Lattice::remove) + [`insert_at`](Lattice::insert_at): the
//!   primitive pair.  Length drops by one, then returns.
//! - [`relocate`](Lattice::relocate): the same effect as a single in-place
//!   slice rotation.  Length never changes and no element other than the
//!   moved one changes its relative order.
//!
//! The relocation engine uses `relocate`; the primitive pair exists for
//! callers that need the intermediate one-shorter state.

use std::fmt;
use std::str::FromStr;

use crate::{AgentType, SgError, SgResult, TrialRng};

/// Fixed-length circular sequence of agent types.
///
/// Owned by exactly one trial; never shared across threads.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Lattice {
    agents: Vec<AgentType>,
}

impl Lattice {
    /// Build a lattice of `size` agents, each independently `X` or `O` with
    /// probability ½.
    pub fn random(size: usize, rng: &mut TrialRng) -> Self {
        let agents = (0..size).map(|_| AgentType::from(rng.gen_bool(0.5))).collect();
        Self { agents }
    }

    pub fn from_types(agents: Vec<AgentType>) -> Self {
        Self { agents }
    }

    /// Build from raw numeric codes.  Any code outside {0, 1} is rejected.
    pub fn from_codes(codes: &[u8]) -> SgResult<Self> {
        let agents = codes
            .iter()
            .map(|&c| AgentType::try_from(c))
            .collect::<SgResult<Vec<_>>>()?;
        Ok(Self { agents })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[AgentType] {
        &self.agents
    }

    pub fn iter(&self) -> impl Iterator<Item = AgentType> + '_ {
        self.agents.iter().copied()
    }

    /// Agent at `position`.
    ///
    /// # Panics
    /// Panics if `position >= len()`.  Use [`type_at_offset`](Self::type_at_offset)
    /// for wrapped access.
    #[inline]
    pub fn type_at(&self, position: usize) -> AgentType {
        self.agents[position]
    }

    /// Agent `offset` steps from `position`, wrapping around the ring in
    /// either direction.
    #[inline]
    pub fn type_at_offset(&self, position: usize, offset: isize) -> AgentType {
        self.agents[self.wrap(position as isize + offset)]
    }

    /// Normalise any signed index into `[0, len)`.
    ///
    /// # Panics
    /// Panics on an empty lattice.
    #[inline]
    pub fn wrap(&self, index: isize) -> usize {
        index.rem_euclid(self.agents.len() as isize) as usize
    }

    /// Number of agents of type `kind`.
    pub fn count_of(&self, kind: AgentType) -> usize {
        self.agents.iter().filter(|&&a| a == kind).count()
    }

    /// Delete the agent at `position`, shifting later agents left.
    pub fn remove(&mut self, position: usize) -> SgResult<AgentType> {
        self.check(position, self.len())?;
        Ok(self.agents.remove(position))
    }

    /// Insert `value` at `position`, shifting later agents right.
    /// `position == len()` appends.
    pub fn insert_at(&mut self, position: usize, value: AgentType) -> SgResult<()> {
        self.check(position, self.len() + 1)?;
        self.agents.insert(position, value);
        Ok(())
    }

    /// Move the agent at `from` so that it ends up at index `to`.
    ///
    /// Equivalent to `let a = remove(from)?; insert_at(to, a)?`, done as one
    /// rotation of the slice between the two indices.
    pub fn relocate(&mut self, from: usize, to: usize) -> SgResult<()> {
        let len = self.len();
        self.check(from, len)?;
        self.check(to, len)?;
        if to < from {
            self.agents[to..=from].rotate_right(1);
        } else if to > from {
            self.agents[from..=to].rotate_left(1);
        }
        Ok(())
    }

    /// A copy with every agent's type swapped (`X` ↔ `O`).
    pub fn relabelled(&self) -> Lattice {
        Lattice { agents: self.agents.iter().map(|a| a.flipped()).collect() }
    }

    fn check(&self, position: usize, bound: usize) -> SgResult<()> {
        if position < bound {
            Ok(())
        } else {
            Err(SgError::PositionOutOfRange { position, len: self.len() })
        }
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for agent in &self.agents {
            write!(f, "{agent}")?;
        }
        Ok(())
    }
}

/// Parse the `X`/`O` rendering produced by `Display`.
impl FromStr for Lattice {
    type Err = SgError;

    fn from_str(s: &str) -> Result<Lattice, SgError> {
        let agents = s
            .trim()
            .chars()
            .map(AgentType::try_from)
            .collect::<SgResult<Vec<_>>>()?;
        Ok(Lattice { agents })
    }
}
