//! The `ReportWriter` trait implemented by report backends.

use crate::{OutputResult, SensorHitRow, SummaryRow};

/// Sink for aggregated results.
///
/// Errors are stored by [`ReportObserver`][crate::ReportObserver] and
/// retrieved with its `take_error`, since observer callbacks return nothing.
pub trait ReportWriter {
    /// Write one row per accepted configuration.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Write per-sensor hit counts for one configuration.
    fn write_sensor_hits(&mut self, rows: &[SensorHitRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
