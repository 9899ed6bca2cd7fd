//! `sg-batch`: runs many independent trials and summarises them.
//!
//! # Execution model
//!
//! ```text
//! workers == 1:   calling thread ── trial 1, trial 2, … ──► sink
//!
//! workers  > 1:   worker 0 ── trials [0, k)   ─┐
//!                 worker 1 ── trials [k, 2k)  ─┼─► mpsc ─► calling thread ─► sink
//!                 …                            ─┘
//! ```
//!
//! Workers share nothing but the channel sender.  The calling thread is the
//! single consumer: it alone touches the running statistics and the
//! [`BatchObserver`] sink, so neither needs a lock.
//!
//! Trial `i` is always seeded from `(seed, i)` and numbered `i + 1`, so a
//! batch produces the same per-trial results, and the same summary,
//! whatever the worker count.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sg_batch::{BatchConfig, NoopBatchObserver, run_batch};
//! use sg_trial::NoopObserver;
//!
//! let config = BatchConfig::new(model, 50, 5, seed, false)?;
//! let summary = run_batch(&config, &mut NoopObserver, &mut NoopBatchObserver)?;
//! println!("{summary}");
//! ```

pub mod config;
pub mod error;
pub mod observer;
pub mod runner;
pub mod stats;


pub use config::{BatchConfig, default_workers};
pub use error::{BatchError, BatchResult};
pub use observer::{BatchObserver, NoopBatchObserver};
pub use runner::{partition, run_batch, run_parallel, run_serial};
pub use stats::{Aggregator, BatchSummary, Stat};
