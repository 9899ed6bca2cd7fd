//! schelling: runs batches of the one-dimensional Schelling segregation
//! model and prints summary statistics.
//!
//! ```text
//! schelling -s 100 -n 50 -w 3 -t 0.5               # parallel, all cores
//! schelling -s 20 -n 1 -w 2 -t 0.5 -v              # one trial, step by step
//! schelling -s 100 -n 500 -w 3 -t 0.5 -o runs.csv  # with a per-trial log
//! ```

mod narrate;


use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use sg_batch::{BatchConfig, BatchObserver, BatchSummary, NoopBatchObserver, default_workers, run_batch};
use sg_core::{ModelConfig, SimRng};
use sg_output::{BatchOutputObserver, CsvWriter};
use sg_trial::NoopObserver;

use narrate::Narrator;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "schelling")]
#[command(version)]
#[command(about = "One-dimensional Schelling segregation model")]
struct Cli {
    /// Number of agents on the ring
    #[arg(short = 's', long)]
    size: usize,

    /// Number of independent trials
    #[arg(short = 'n', long)]
    runs: u64,

    /// Neighbourhood radius on each side of an agent
    #[arg(short = 'w', long)]
    vision: usize,

    /// Minimum share of same-type neighbours for an agent to be happy, in (0, 1)
    #[arg(short = 't', long)]
    tolerance: f64,

    /// Worker threads; 1 runs every trial on the main thread.
    /// Defaults to the available parallelism, or 1 with --verbose
    #[arg(short = 'p', long)]
    workers: Option<usize>,

    /// Print every trial step by step (single worker only)
    #[arg(short, long)]
    verbose: bool,

    /// Write one CSV row per trial to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Batch seed; drawn at random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug-level diagnostic logging
    #[arg(long)]
    log_debug: bool,
}

impl Cli {
    fn batch_config(&self, seed: u64) -> Result<BatchConfig> {
        let model = ModelConfig::new(self.size, self.vision, self.tolerance)?;
        let workers = match self.workers {
            Some(w) => w,
            None if self.verbose => 1,
            None => default_workers(),
        };
        Ok(BatchConfig::new(model, self.runs, workers, seed, self.verbose)?)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.log_debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let seed = cli.seed.unwrap_or_else(|| SimRng::from_entropy().next_seed());
    let config = cli.batch_config(seed)?;

    info!(
        size = config.model.size(),
        vision = config.model.vision(),
        tolerance = config.model.tolerance(),
        runs = config.runs,
        seed,
        "starting batch"
    );
    if config.is_parallel() {
        info!(workers = config.workers, "running in parallel");
    }

    let started = Instant::now();
    let summary = match &cli.output {
        Some(path) => {
            let writer = CsvWriter::new(path)
                .with_context(|| format!("cannot create result log {}", path.display()))?;
            let mut sink = BatchOutputObserver::new(writer);
            let summary = run(&config, &mut sink)?;
            debug!(rows = sink.into_writer().rows_written(), path = %path.display(), "result log written");
            summary
        }
        None => run(&config, &mut NoopBatchObserver)?,
    };
    info!(elapsed_ms = started.elapsed().as_millis() as u64, "batch finished");

    println!("{summary}");
    Ok(())
}

/// Run the batch, narrating to stdout when verbose.
fn run<O: BatchObserver>(config: &BatchConfig, sink: &mut O) -> Result<BatchSummary> {
    if !config.verbose {
        return Ok(run_batch(config, &mut NoopObserver, sink)?);
    }

    let mut narrator = Narrator::new(io::stdout().lock());
    let summary = run_batch(config, &mut narrator, sink)?;
    if let Some(e) = narrator.take_error() {
        return Err(e).context("writing verbose output");
    }
    Ok(summary)
}
