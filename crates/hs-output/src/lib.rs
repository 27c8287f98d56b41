//! `hs-output`: statistics and report writers for the hitsim engine.
//!
//! [`StatisticsReporter`] turns the driver's `SweepEntry` list into ordered
//! [`AggregateResult`]s.  [`ReportObserver`] does the same while the run is
//! in progress and streams rows to a [`ReportWriter`]; the CSV backend writes
//! `sweep_summary.csv` and `sensor_hits.csv`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hs_output::{CsvWriter, ReportObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ReportObserver::new(writer);
//! driver.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! for (value, hits, avg, p) in obs.reporter().records() { … }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod stats;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ReportObserver;
pub use row::{SensorHitRow, SummaryRow};
pub use stats::{analytic, AggregateResult, RejectedEntry, StatisticsReporter};
pub use writer::ReportWriter;
