//! `sg-output`: the optional per-trial result log.
//!
//! The log is a CSV file whose header is
//!
//! ```text
//! run,size,vision,tolerance,init.blocks,final.blocks,ticks
//! ```
//!
//! followed by one row per completed trial, in the order the batch
//! aggregator received them.  Abandoned trials report `-1` for
//! `final.blocks` and `ticks`.
//!
//! [`CsvWriter`] implements [`OutputWriter`]; [`BatchOutputObserver`]
//! plugs any writer into `sg_batch::run_batch`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sg_output::{BatchOutputObserver, CsvWriter};
//!
//! let writer = CsvWriter::new(Path::new("runs.csv"))?;
//! let mut sink = BatchOutputObserver::new(writer);
//! let summary = run_batch(&config, &mut NoopObserver, &mut sink)?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::BatchOutputObserver;
pub use row::{HEADER, TrialRow};
pub use writer::OutputWriter;
