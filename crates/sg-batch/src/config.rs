//! Batch-level configuration.

use std::num::NonZeroUsize;

use sg_core::ModelConfig;

use crate::{BatchError, BatchResult};

/// Worker count used when the caller does not choose one: every logical core.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Everything needed to run `runs` independent trials.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    /// Parameters shared by every trial in the batch.
    pub model: ModelConfig,

    /// Number of trials.  Always `>= 1`.
    pub runs: u64,

    /// Worker threads.  `1` runs every trial on the calling thread.
    pub workers: usize,

    /// Master seed.  Trial `i` is seeded from `(seed, i)`, so the same seed
    /// reproduces the same per-trial results for any worker count.
    pub seed: u64,

    /// Narrate every relocation.  Only allowed with a single worker.
    pub verbose: bool,
}

impl BatchConfig {
    /// Validate and build.
    pub fn new(
        model:   ModelConfig,
        runs:    u64,
        workers: usize,
        seed:    u64,
        verbose: bool,
    ) -> BatchResult<Self> {
        if runs == 0 {
            return Err(BatchError::Config(
                "the number of model runs must be positive".into(),
            ));
        }
        if workers == 0 {
            return Err(BatchError::Config(
                "the worker count must be at least one".into(),
            ));
        }
        if verbose && workers > 1 {
            return Err(BatchError::Config(
                "verbose and parallel cannot be enabled at the same time".into(),
            ));
        }
        Ok(Self { model, runs, workers, seed, verbose })
    }

    /// `true` when trials are fanned out to a worker pool.
    #[inline]
    pub fn is_parallel(&self) -> bool {
        self.workers > 1
    }
}
