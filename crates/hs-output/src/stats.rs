//! Reduction of trial totals into per-configuration statistics.

use hs_sim::{SweepEntry, TrialTotals};

/// Statistics for one accepted configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregateResult {
    /// Position in sweep order.
    pub index:                      usize,
    pub value:                      Option<f64>,
    pub sensor_count:               usize,
    pub runs:                       u64,
    pub total_hits:                 u64,
    pub trials_with_hits:           u64,
    pub resampled_trials:           u64,
    /// `total_hits / runs`.
    pub average_hits_per_run:       f64,
    /// `total_hits / (runs · sensor_count)`.
    pub hit_probability_per_sensor: f64,
    /// Binomial standard error of `hit_probability_per_sensor`.
    pub probability_std_error:      f64,
}

impl AggregateResult {
    /// Zero runs or zero sensors give `0.0` for every ratio.
    pub fn from_totals(
        index:        usize,
        value:        Option<f64>,
        sensor_count: usize,
        totals:       &TrialTotals,
    ) -> Self {
        let runs = totals.runs as f64;
        let trials = runs * sensor_count as f64;
        let hits = totals.total_hits as f64;

        let average_hits_per_run = if totals.runs > 0 { hits / runs } else { 0.0 };
        let (p, std_error) = if trials > 0.0 {
            let p = hits / trials;
            // Clamped so rounding never puts a negative under the root.
            let variance = (p * (1.0 - p)).max(0.0) / trials;
            (p, variance.sqrt())
        } else {
            (0.0, 0.0)
        };

        Self {
            index,
            value,
            sensor_count,
            runs: totals.runs,
            total_hits: totals.total_hits,
            trials_with_hits: totals.trials_with_hits,
            resampled_trials: totals.resampled_trials,
            average_hits_per_run,
            hit_probability_per_sensor: p,
            probability_std_error: std_error,
        }
    }
}

/// A configuration that failed, with its error rendered for reporting.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectedEntry {
    pub index:   usize,
    pub value:   Option<f64>,
    pub message: String,
}

/// Ordered results of a run, plus the entries that were rejected.
#[derive(Clone, Debug, Default)]
pub struct StatisticsReporter {
    results:  Vec<AggregateResult>,
    rejected: Vec<RejectedEntry>,
}

impl StatisticsReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: &[SweepEntry]) -> Self {
        let mut reporter = Self::new();
        for entry in entries {
            reporter.record(entry);
        }
        reporter
    }

    /// Reduce one entry.  Returns the aggregate when the entry was accepted.
    pub fn record(&mut self, entry: &SweepEntry) -> Option<&AggregateResult> {
        match &entry.outcome {
            Ok(totals) => {
                self.results.push(AggregateResult::from_totals(
                    entry.index,
                    entry.value,
                    entry.sensor_count,
                    totals,
                ));
                self.results.last()
            }
            Err(e) => {
                self.rejected.push(RejectedEntry {
                    index:   entry.index,
                    value:   entry.value,
                    message: e.to_string(),
                });
                None
            }
        }
    }

    /// Accepted results in sweep order.
    pub fn results(&self) -> &[AggregateResult] {
        &self.results
    }

    pub fn rejected(&self) -> &[RejectedEntry] {
        &self.rejected
    }

    /// `(value, total_hits, average_hits_per_run, hit_probability_per_sensor)`
    /// per accepted configuration, in sweep order.
    pub fn records(&self) -> impl Iterator<Item = (Option<f64>, u64, f64, f64)> + '_ {
        self.results.iter().map(|r| {
            (r.value, r.total_hits, r.average_hits_per_run, r.hit_probability_per_sensor)
        })
    }
}

/// Closed-form expectations used as regression oracles.
pub mod analytic {
    /// Probability that a line, uniform in intercept over `span` and
    /// perpendicular to it, crosses a sensor of width `diameter` lying fully
    /// inside the span.  Capped at `1.0`; `0.0` for a non-positive span.
    pub fn crossing_probability(diameter: f64, span: f64) -> f64 {
        if span > 0.0 { (diameter / span).min(1.0) } else { 0.0 }
    }
}
