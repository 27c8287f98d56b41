//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `sweep_summary.csv`
//! - `sensor_hits.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{OutputResult, SensorHitRow, SummaryRow};

pub const SUMMARY_FILE: &str = "sweep_summary.csv";
pub const SENSOR_HITS_FILE: &str = "sensor_hits.csv";

/// Writes reports to two CSV files.
pub struct CsvWriter {
    summary:     Writer<File>,
    sensor_hits: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut summary = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summary.write_record([
            "index",
            "value",
            "sensor_count",
            "runs",
            "total_hits",
            "trials_with_hits",
            "resampled_trials",
            "average_hits_per_run",
            "hit_probability_per_sensor",
            "probability_std_error",
        ])?;

        let mut sensor_hits = Writer::from_path(dir.join(SENSOR_HITS_FILE))?;
        sensor_hits.write_record(["index", "sensor_id", "hits"])?;

        Ok(Self { summary, sensor_hits, finished: false })
    }
}

impl ReportWriter for CsvWriter {
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.index.to_string(),
            row.value.map(|v| v.to_string()).unwrap_or_default(),
            row.sensor_count.to_string(),
            row.runs.to_string(),
            row.total_hits.to_string(),
            row.trials_with_hits.to_string(),
            row.resampled_trials.to_string(),
            row.average_hits_per_run.to_string(),
            row.hit_probability_per_sensor.to_string(),
            row.probability_std_error.to_string(),
        ])?;
        Ok(())
    }

    fn write_sensor_hits(&mut self, rows: &[SensorHitRow]) -> OutputResult<()> {
        for row in rows {
            self.sensor_hits.write_record(&[
                row.index.to_string(),
                row.sensor_id.to_string(),
                row.hits.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summary.flush()?;
        self.sensor_hits.flush()?;
        Ok(())
    }
}
