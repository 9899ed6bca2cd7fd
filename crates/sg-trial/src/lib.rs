//! `sg-trial`: the single-trial driver for the schelling1d workspace.
//!
//! # Relocation loop
//!
//! ```text
//! lattice = random(size)
//! initial_groups = count_distinct(lattice)
//! loop:
//!   ① Scan:     collect unhappy positions; none left → converged.
//!   ② Pick:     one unhappy position, uniformly at random.
//!   ③ Relocate: relocate_until_happy(position); ticks += 1.
//!   ④ Budget:   ticks > 500 × size and still unsettled → abandoned.
//! ```
//!
//! An abandoned trial reports `ticks = None` and `final_groups = None`
//! (`-1` wherever a plain integer is needed).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sg_core::{ModelConfig, TrialRng};
//! use sg_trial::{NoopObserver, Trial};
//!
//! let config = ModelConfig::new(100, 3, 0.5)?;
//! let result = Trial::new(config, 1, TrialRng::new(42, 0)).run(&mut NoopObserver)?;
//! ```

pub mod error;
pub mod observer;
pub mod result;
pub mod trial;


pub use error::{DriverResult, TrialError};
pub use observer::{NoopObserver, TrialObserver};
pub use result::{NON_CONVERGENT, TrialResult};
pub use trial::{Step, Trial};
