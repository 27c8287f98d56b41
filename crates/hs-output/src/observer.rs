//! `ReportObserver<W>` bridges `SimObserver` to a `ReportWriter`.

use hs_sim::{SimObserver, SweepEntry};

use crate::row::{SensorHitRow, SummaryRow};
use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult, StatisticsReporter};

/// A [`SimObserver`] that aggregates each finished configuration and writes
/// it to any [`ReportWriter`].
///
/// Only sensors with at least one hit get a `SensorHitRow`; large lattices
/// are mostly zeros.  Write errors are stored because `SimObserver` methods
/// have no return value; check them with [`take_error`][Self::take_error]
/// after `driver.run()` returns.
pub struct ReportObserver<W: ReportWriter> {
    writer:     W,
    reporter:   StatisticsReporter,
    last_error: Option<OutputError>,
}

impl<W: ReportWriter> ReportObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, reporter: StatisticsReporter::new(), last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Everything aggregated so far.
    pub fn reporter(&self) -> &StatisticsReporter {
        &self.reporter
    }

    pub fn into_parts(self) -> (W, StatisticsReporter) {
        (self.writer, self.reporter)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> SimObserver for ReportObserver<W> {
    fn on_configuration_end(&mut self, entry: &SweepEntry) {
        let Some(summary) = self.reporter.record(entry).map(SummaryRow::from) else {
            return;
        };
        let result = self.writer.write_summary(&summary);
        self.store_err(result);

        if let Ok(totals) = &entry.outcome {
            let rows: Vec<SensorHitRow> = totals
                .sensor_hits
                .iter()
                .enumerate()
                .filter(|&(_, &hits)| hits > 0)
                .map(|(id, &hits)| SensorHitRow {
                    index:     entry.index as u64,
                    sensor_id: id as u32,
                    hits,
                })
                .collect();
            if !rows.is_empty() {
                let result = self.writer.write_sensor_hits(&rows);
                self.store_err(result);
            }
        }
    }

    fn on_sim_end(&mut self, _entries: &[SweepEntry]) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
