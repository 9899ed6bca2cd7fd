//! The single aggregation point for completed trials.

use std::convert::Infallible;

use sg_trial::TrialResult;

/// Receives every completed [`TrialResult`] of a batch, one at a time, on
/// the thread that runs the aggregation loop.
///
/// Calls are fully serialised, so implementors may hold plain mutable state
/// (file handles, counters) without locking.  Results arrive in completion
/// order, which under parallel execution is not trial-number order.
///
/// Any error returned is fatal: the batch stops and
/// [`run_batch`][crate::run_batch] returns it as [`BatchError::Sink`].
///
/// [`BatchError::Sink`]: crate::BatchError::Sink
pub trait BatchObserver {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once per completed trial.
    fn on_result(&mut self, result: &TrialResult) -> Result<(), Self::Error>;

    /// Called once after the last result, before the summary is computed.
    fn on_batch_end(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A [`BatchObserver`] that discards every result.
pub struct NoopBatchObserver;

impl BatchObserver for NoopBatchObserver {
    type Error = Infallible;

    fn on_result(&mut self, _result: &TrialResult) -> Result<(), Infallible> {
        Ok(())
    }
}
