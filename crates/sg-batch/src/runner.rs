//! Serial and parallel batch execution.

use std::ops::Range;
use std::sync::mpsc::{self, Sender};

use rayon::ThreadPoolBuilder;
use tracing::{debug, warn};

use sg_core::{ModelConfig, TrialRng};
use sg_trial::{DriverResult, NoopObserver, Trial, TrialObserver, TrialResult};

use crate::stats::Aggregator;
use crate::{BatchConfig, BatchError, BatchObserver, BatchResult, BatchSummary};

// ── Public API ────────────────────────────────────────────────────────────────

/// Run every trial of the batch and summarise the outcomes.
///
/// With `config.workers == 1` all trials run on the calling thread and
/// `trials` sees every step.  Otherwise trials are fanned out to a worker
/// pool and `trials` is not called (verbose narration is serial-only).
///
/// Either way `sink` receives each [`TrialResult`] exactly once, from the
/// calling thread.
pub fn run_batch<T, O>(config: &BatchConfig, trials: &mut T, sink: &mut O) -> BatchResult<BatchSummary>
where
    T: TrialObserver,
    O: BatchObserver,
{
    if config.is_parallel() {
        run_parallel(config, sink)
    } else {
        run_serial(config, trials, sink)
    }
}

/// Run every trial in order on the calling thread.
pub fn run_serial<T, O>(config: &BatchConfig, trials: &mut T, sink: &mut O) -> BatchResult<BatchSummary>
where
    T: TrialObserver,
    O: BatchObserver,
{
    let mut agg = Aggregator::with_capacity(config.runs as usize);

    for index in 0..config.runs {
        let result = run_one(config.model, config.seed, index, trials)?;
        agg.record(&result);
        sink.on_result(&result).map_err(sink_error)?;
    }

    finish(config, agg, sink)
}

/// Fan trials out to `config.workers` threads and aggregate on the calling
/// thread.
///
/// Each worker runs one contiguous chunk of trial indices sequentially and
/// sends every result down a shared channel.  The calling thread is the
/// only receiver: it records statistics and forwards to `sink` in arrival
/// order.  The receive loop ends once every worker has dropped its sender,
/// which is the join barrier before the summary is computed.
pub fn run_parallel<O: BatchObserver>(config: &BatchConfig, sink: &mut O) -> BatchResult<BatchSummary> {
    let chunks = partition(config.runs, config.workers);
    if chunks.len() < config.workers {
        warn!(
            requested = config.workers,
            used = chunks.len(),
            "more workers than trials; pool capped at one worker per trial"
        );
    }
    debug!(
        workers = chunks.len(),
        runs = config.runs,
        largest_chunk = chunks.first().map_or(0, |c| c.end - c.start),
        "chunk plan"
    );

    let pool = ThreadPoolBuilder::new()
        .num_threads(chunks.len())
        .thread_name(|i| format!("sg-worker-{i}"))
        .build()?;

    let (tx, rx) = mpsc::channel::<DriverResult<TrialResult>>();
    let model = config.model;
    let seed = config.seed;
    for (worker, chunk) in chunks.into_iter().enumerate() {
        let tx = tx.clone();
        pool.spawn(move || run_chunk(worker, model, seed, chunk, &tx));
    }
    drop(tx);

    let mut agg = Aggregator::with_capacity(config.runs as usize);
    for message in rx {
        let result = message?;
        agg.record(&result);
        sink.on_result(&result).map_err(sink_error)?;
    }

    finish(config, agg, sink)
}

/// Split `runs` trial indices into at most `workers` contiguous, non-empty
/// chunks whose sizes differ by at most one.
///
/// The first `runs % workers` chunks take one extra trial, so every index in
/// `0..runs` is covered exactly once.
pub fn partition(runs: u64, workers: usize) -> Vec<Range<u64>> {
    let workers = (workers.max(1) as u64).min(runs);
    if workers == 0 {
        return Vec::new();
    }
    let base = runs / workers;
    let extra = runs % workers;

    let mut chunks = Vec::with_capacity(workers as usize);
    let mut start = 0;
    for w in 0..workers {
        let len = base + u64::from(w < extra);
        chunks.push(start..start + len);
        start += len;
    }
    chunks
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Trial `index` (0-based) reports run number `index + 1` and draws from its
/// own RNG stream, whichever thread runs it.
fn run_one<T: TrialObserver>(
    model:    ModelConfig,
    seed:     u64,
    index:    u64,
    observer: &mut T,
) -> DriverResult<TrialResult> {
    Trial::new(model, index + 1, TrialRng::new(seed, index)).run(observer)
}

fn run_chunk(
    worker: usize,
    model:  ModelConfig,
    seed:   u64,
    chunk:  Range<u64>,
    tx:     &Sender<DriverResult<TrialResult>>,
) {
    debug!(worker, first = chunk.start, count = chunk.end - chunk.start, "worker started");
    for index in chunk {
        let result = run_one(model, seed, index, &mut NoopObserver);
        if tx.send(result).is_err() {
            // The aggregator bailed out; nobody is listening any more.
            debug!(worker, "aggregator gone, stopping early");
            return;
        }
    }
    debug!(worker, "worker finished");
}

fn finish<O: BatchObserver>(config: &BatchConfig, agg: Aggregator, sink: &mut O) -> BatchResult<BatchSummary> {
    sink.on_batch_end().map_err(sink_error)?;
    debug_assert!(!agg.is_empty());
    debug_assert_eq!(agg.len() as u64, config.runs);
    Ok(agg.summary(config.runs))
}

fn sink_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> BatchError {
    BatchError::Sink(Box::new(e))
}
