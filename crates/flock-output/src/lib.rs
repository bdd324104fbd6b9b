//! `flock-output` — simulation output writers for the rust_flock simulator.
//!
//! The CSV backend creates two files in the configured output directory:
//!
//! | File                 | Contents                                      |
//! |----------------------|-----------------------------------------------|
//! | `boid_snapshots.csv` | per-boid position and velocity rows           |
//! | `tick_summaries.csv` | per-tick mean speed and elapsed sim time      |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `flock_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use flock_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
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
pub use observer::SimOutputObserver;
pub use row::{BoidSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
