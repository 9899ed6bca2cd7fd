//! Trial observer trait for step-by-step narration.

use sg_core::Lattice;

/// Callbacks invoked by [`Trial::run`][crate::Trial::run] at key points in
/// the relocation loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Trials run on batch worker threads use
/// [`NoopObserver`]; step tracing is only meaningful on the serial path.
///
/// # Example: lattice printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl TrialObserver for Printer {
///     fn on_tick(&mut self, _tick: u64, lattice: &Lattice) {
///         println!("{lattice}");
///     }
/// }
/// ```
pub trait TrialObserver {
    /// Called once after the lattice is initialised, before any relocation.
    fn on_trial_start(&mut self, _run: u64, _lattice: &Lattice, _initial_groups: u64) {}

    /// Called after every relocation.  `tick` is 1-based.
    fn on_tick(&mut self, _tick: u64, _lattice: &Lattice) {}

    /// Called when the tick budget runs out before convergence.
    fn on_abandoned(&mut self, _run: u64, _ticks: u64) {}

    /// Called when every agent is happy.
    fn on_converged(&mut self, _run: u64, _final_groups: u64, _ticks: u64) {}
}

/// A [`TrialObserver`] that does nothing.
pub struct NoopObserver;

impl TrialObserver for NoopObserver {}
