//! `sg-core`: foundational types for the `schelling1d` segregation model.
//!
//! This crate is a dependency of every other `sg-*` crate.  It has no `sg-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`agent`]       | `AgentType` (the binary agent label)                  |
//! | [`lattice`]     | `Lattice`, a fixed-length circular sequence of agents |
//! | [`config`]      | `ModelConfig` (size, vision, tolerance)               |
//! | [`rng`]         | `TrialRng` (per-trial), `SimRng` (root)               |
//! | [`error`]       | `SgError`, `SgResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `AgentType`/`ModelConfig`. |

pub mod agent;
pub mod config;
pub mod error;
pub mod lattice;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::AgentType;
pub use config::ModelConfig;
pub use error::{SgError, SgResult};
pub use lattice::Lattice;
pub use rng::{SimRng, TrialRng};
