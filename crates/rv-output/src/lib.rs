//! `rv-output` — simulation metrics writers for the rust_rv simulator.
//!
//! The CSV backend creates two files in the configured output directory:
//!
//! | File                   | One row per                       |
//! |------------------------|-----------------------------------|
//! | `roomba_snapshots.csv` | agent per snapshot tick           |
//! | `tick_summaries.csv`   | tick                              |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `rv_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rv_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{RoombaSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
