//! Per-worker hit accumulators.

use hs_core::SensorId;

/// Counts for one configuration, or one worker's share of it.
///
/// Workers each own one and never share it; the driver merges them in
/// worker order once every worker has finished.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrialTotals {
    pub runs:             u64,
    pub total_hits:       u64,
    /// Trials whose trajectory hit at least one sensor.
    pub trials_with_hits: u64,
    /// Degenerate draws discarded across all trials.
    pub resamples:        u64,
    /// Trials that needed at least one redraw.
    pub resampled_trials: u64,
    /// Hit count per sensor, indexed by `SensorId`.  Empty when per-sensor
    /// recording is off.
    pub sensor_hits:      Vec<u64>,
}

impl TrialTotals {
    pub fn new(sensor_count: usize, record_sensor_hits: bool) -> Self {
        Self {
            sensor_hits: if record_sensor_hits { vec![0; sensor_count] } else { Vec::new() },
            ..Self::default()
        }
    }

    /// Record one trial.  `hits` holds the ids of every sensor the trial's
    /// trajectory crossed.
    pub fn record_trial(&mut self, hits: &[SensorId], resamples: u32) {
        self.runs += 1;
        self.total_hits += hits.len() as u64;
        if !hits.is_empty() {
            self.trials_with_hits += 1;
        }
        self.resamples += u64::from(resamples);
        if resamples > 0 {
            self.resampled_trials += 1;
        }
        if !self.sensor_hits.is_empty() {
            for id in hits {
                if let Some(slot) = self.sensor_hits.get_mut(id.index()) {
                    *slot += 1;
                }
            }
        }
    }

    /// Add `other` into `self`.
    pub fn merge(&mut self, other: &TrialTotals) {
        self.runs += other.runs;
        self.total_hits += other.total_hits;
        self.trials_with_hits += other.trials_with_hits;
        self.resamples += other.resamples;
        self.resampled_trials += other.resampled_trials;
        for (mine, theirs) in self.sensor_hits.iter_mut().zip(&other.sensor_hits) {
            *mine += theirs;
        }
    }

    #[inline]
    pub fn records_sensor_hits(&self) -> bool {
        !self.sensor_hits.is_empty()
    }
}
