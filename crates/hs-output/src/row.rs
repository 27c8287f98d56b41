//! Plain data row types written by report backends.

use crate::AggregateResult;

/// One accepted configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub index:                      u64,
    /// Swept value; `None` without a sweep.
    pub value:                      Option<f64>,
    pub sensor_count:               u64,
    pub runs:                       u64,
    pub total_hits:                 u64,
    pub trials_with_hits:           u64,
    pub resampled_trials:           u64,
    pub average_hits_per_run:       f64,
    pub hit_probability_per_sensor: f64,
    pub probability_std_error:      f64,
}

impl From<&AggregateResult> for SummaryRow {
    fn from(r: &AggregateResult) -> Self {
        Self {
            index:                      r.index as u64,
            value:                      r.value,
            sensor_count:               r.sensor_count as u64,
            runs:                       r.runs,
            total_hits:                 r.total_hits,
            trials_with_hits:           r.trials_with_hits,
            resampled_trials:           r.resampled_trials,
            average_hits_per_run:       r.average_hits_per_run,
            hit_probability_per_sensor: r.hit_probability_per_sensor,
            probability_std_error:      r.probability_std_error,
        }
    }
}

/// Hit count of one sensor in one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorHitRow {
    pub index:     u64,
    pub sensor_id: u32,
    pub hits:      u64,
}
