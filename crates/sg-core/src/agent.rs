//! The binary agent label.
//!
//! Agents come in exactly two types.  Encoding them as an enum rather than a
//! raw integer makes any third value unrepresentable inside a [`Lattice`];
//! the only place a bad value can appear is at a conversion boundary
//! (`TryFrom<u8>`, `TryFrom<char>`), which reports
//! [`SgError::InvalidAgentType`].
//!
//! [`Lattice`]: crate::Lattice

use std::fmt;

use crate::SgError;

/// One of the two agent populations.
///
/// Rendered as `X` (type 0) and `O` (type 1) in verbose traces.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AgentType {
    X = 0,
    O = 1,
}

impl AgentType {
    /// Numeric code: 0 for `X`, 1 for `O`.
    #[inline(always)]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The other population.
    #[inline(always)]
    pub fn flipped(self) -> AgentType {
        match self {
            AgentType::X => AgentType::O,
            AgentType::O => AgentType::X,
        }
    }

    #[inline(always)]
    pub fn symbol(self) -> char {
        match self {
            AgentType::X => 'X',
            AgentType::O => 'O',
        }
    }
}

impl From<bool> for AgentType {
    #[inline(always)]
    fn from(b: bool) -> AgentType {
        if b { AgentType::O } else { AgentType::X }
    }
}

impl TryFrom<u8> for AgentType {
    type Error = SgError;

    fn try_from(code: u8) -> Result<AgentType, SgError> {
        match code {
            0 => Ok(AgentType::X),
            1 => Ok(AgentType::O),
            other => Err(SgError::InvalidAgentType(other.to_string())),
        }
    }
}

impl TryFrom<char> for AgentType {
    type Error = SgError;

    fn try_from(c: char) -> Result<AgentType, SgError> {
        match c {
            'X' => Ok(AgentType::X),
            'O' => Ok(AgentType::O),
            other => Err(SgError::InvalidAgentType(other.to_string())),
        }
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
