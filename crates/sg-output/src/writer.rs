//! The `OutputWriter` seam between the batch sink and the result log.

use crate::{OutputResult, TrialRow};

/// Destination for per-trial rows.
///
/// [`CsvWriter`](crate::CsvWriter) is the result log backend.
/// [`BatchOutputObserver`](crate::BatchOutputObserver) is generic over this
/// trait, so tests can swap in an in-memory writer.
pub trait OutputWriter {
    /// Append one trial row.
    fn write_row(&mut self, row: &TrialRow) -> OutputResult<()>;

    /// Flush and close the underlying file.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
