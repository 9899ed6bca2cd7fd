//! Core error type.
//!
//! Downstream crates define their own error enums and wrap `SgError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `sg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SgError {
    #[error("configuration error: {0}")]
    Config(String),

    /// An agent label outside {0, 1} (or outside {`X`, `O`} when parsing a
    /// rendered lattice).  Indicates corrupted state, never user input.
    #[error("unexpected model element {0:?}")]
    InvalidAgentType(String),

    #[error("position {position} out of range for lattice of length {len}")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `sg-*` crates.
pub type SgResult<T> = Result<T, SgError>;
