//! `sg-dynamics`: the rules that move agents around the ring.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`happiness`]   | `is_happy`, `unhappy_positions`, `is_converged`            |
//! | [`relocation`]  | `relocate_until_happy`, `Relocation` outcome               |
//! | [`groups`]      | `count_distinct`: maximal same-type runs on the ring       |
//!
//! # Design notes
//!
//! Everything here is a free function over `&Lattice` / `&mut Lattice` plus
//! a `&ModelConfig`.  None of it holds state between calls: the trial driver
//! in sg-trial owns the lattice and the RNG and threads them through.
//!
//! Only [`relocate_until_happy`] mutates, and it preserves lattice length.

pub mod groups;
pub mod happiness;
pub mod relocation;


pub use groups::count_distinct;
pub use happiness::{is_converged, is_happy, unhappy_positions};
pub use relocation::{Relocation, relocate_until_happy};
