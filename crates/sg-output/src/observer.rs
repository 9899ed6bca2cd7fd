//! `BatchOutputObserver<W>` bridges `BatchObserver` to an `OutputWriter`.

use sg_batch::BatchObserver;
use sg_trial::TrialResult;

use crate::row::TrialRow;
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`BatchObserver`] that appends one row per trial to any
/// [`OutputWriter`] and finishes the writer when the batch ends.
///
/// A write error aborts the batch; `run_batch` surfaces it as
/// `BatchError::Sink`.
pub struct BatchOutputObserver<W: OutputWriter> {
    writer: W,
}

impl<W: OutputWriter> BatchOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the inner writer (e.g. to inspect it after the batch).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: OutputWriter> BatchObserver for BatchOutputObserver<W> {
    type Error = OutputError;

    fn on_result(&mut self, result: &TrialResult) -> Result<(), OutputError> {
        self.writer.write_row(&TrialRow::from(result))
    }

    fn on_batch_end(&mut self) -> Result<(), OutputError> {
        self.writer.finish()
    }
}
