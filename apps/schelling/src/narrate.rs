//! Verbose per-step narration of a single trial.

use std::io::{self, Write};

use sg_core::Lattice;
use sg_trial::TrialObserver;

/// A [`TrialObserver`] that prints the run header, the lattice after every
/// relocation, and how the trial ended.
///
/// `TrialObserver` methods return nothing, so the first write error is kept
/// and later writes are skipped.  Check [`take_error`][Self::take_error]
/// once the batch is done.
pub struct Narrator<W: Write> {
    out:        W,
    last_error: Option<io::Error>,
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_error: None }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, f: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.last_error.is_some() {
            return;
        }
        if let Err(e) = f(&mut self.out) {
            self.last_error = Some(e);
        }
    }
}

impl<W: Write> TrialObserver for Narrator<W> {
    fn on_trial_start(&mut self, run: u64, lattice: &Lattice, initial_groups: u64) {
        self.emit(|out| {
            writeln!(out, "Run number {run}")?;
            writeln!(out, "{initial_groups} distinct groups at start")?;
            writeln!(out, "{lattice}")
        });
    }

    fn on_tick(&mut self, _tick: u64, lattice: &Lattice) {
        self.emit(|out| writeln!(out, "{lattice}"));
    }

    fn on_abandoned(&mut self, _run: u64, _ticks: u64) {
        self.emit(|out| writeln!(out, "Model failed to stabilize"));
    }

    fn on_converged(&mut self, _run: u64, final_groups: u64, ticks: u64) {
        self.emit(|out| {
            writeln!(out, "{final_groups} distinct groups at end after {ticks} moves")?;
            writeln!(out)
        });
    }
}
