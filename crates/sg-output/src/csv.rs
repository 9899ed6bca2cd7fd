//! CSV result log.
//!
//! One file, created (or truncated) up front with the header row, then one
//! record per completed trial in the order the rows are handed over.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::HEADER;
use crate::writer::OutputWriter;
use crate::{OutputResult, TrialRow};

/// Writes trial rows to a single CSV file.
pub struct CsvWriter {
    out:      Writer<File>,
    rows:     u64,
    finished: bool,
}

impl CsvWriter {
    /// Create `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let mut out = Writer::from_path(path)?;
        out.write_record(HEADER)?;
        Ok(Self { out, rows: 0, finished: false })
    }

    /// Rows written so far, header excluded.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }
}

impl OutputWriter for CsvWriter {
    fn write_row(&mut self, row: &TrialRow) -> OutputResult<()> {
        self.out.write_record(row.to_record())?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
