//! Top-level run configuration.

use hs_grid::GridSpec;
use hs_trajectory::SamplerSpec;
use hs_trajectory::sampler::{DEFAULT_EPSILON, DEFAULT_MAX_RESAMPLES};

use crate::Sweep;

#[cfg(feature = "serde")]
fn default_workers() -> u32 {
    1
}

#[cfg(feature = "serde")]
fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

#[cfg(feature = "serde")]
fn default_max_resamples() -> u32 {
    DEFAULT_MAX_RESAMPLES
}

#[cfg(feature = "serde")]
fn default_record_sensor_hits() -> bool {
    true
}

/// Everything needed to run one simulation, optionally over a sweep.
///
/// Typically loaded from JSON by the application and handed to
/// [`SimulationBuilder`][crate::SimulationBuilder].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Base grid.  A sweep applies each value to a copy of it.
    pub grid: GridSpec,

    pub sampler: SamplerSpec,

    /// Trials per configuration.
    pub runs: u64,

    /// Root seed.  The same seed, `runs` and `workers` always produce
    /// identical totals.
    pub seed: u64,

    /// Independent RNG streams per configuration.  Part of the result
    /// identity: changing it changes which numbers are drawn.
    #[cfg_attr(feature = "serde", serde(default = "default_workers"))]
    pub workers: u32,

    /// Divisors with magnitude below this make a draw degenerate.
    #[cfg_attr(feature = "serde", serde(default = "default_epsilon"))]
    pub degeneracy_epsilon: f64,

    /// Consecutive degenerate draws tolerated per trial.
    #[cfg_attr(feature = "serde", serde(default = "default_max_resamples"))]
    pub max_resamples: u32,

    /// Keep per-sensor hit counts (one `u64` per sensor per worker).
    #[cfg_attr(feature = "serde", serde(default = "default_record_sensor_hits"))]
    pub record_sensor_hits: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub sweep: Option<Sweep>,
}

impl SimulationConfig {
    /// A single-configuration run with default workers, epsilon and resample
    /// limit.
    pub fn new(grid: GridSpec, sampler: SamplerSpec, runs: u64, seed: u64) -> Self {
        Self {
            grid,
            sampler,
            runs,
            seed,
            workers:            1,
            degeneracy_epsilon: DEFAULT_EPSILON,
            max_resamples:      DEFAULT_MAX_RESAMPLES,
            record_sensor_hits: true,
            sweep:              None,
        }
    }

    pub fn with_workers(mut self, workers: u32) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_sweep(mut self, sweep: Sweep) -> Self {
        self.sweep = Some(sweep);
        self
    }

    /// Number of configurations the run will produce.
    pub fn entry_count(&self) -> usize {
        self.sweep.as_ref().map_or(1, Sweep::len)
    }
}
