//! The trial loop.

use std::sync::Arc;

use hs_core::{SensorId, SimRng, WorkerId, WorkerRng};
use hs_grid::{Grid, GridSpec};
use hs_intersect::{collect_hits, IntersectionTester, TesterRegistry};
use hs_trajectory::TrajectorySampler;

use crate::{SimObserver, SimResult, SimulationConfig, TrialTotals};

/// Outcome of one sweep value (or of the whole run when there is no sweep).
#[derive(Debug)]
pub struct SweepEntry {
    /// Position in sweep order.
    pub index:        usize,
    /// The swept value, `None` without a sweep.
    pub value:        Option<f64>,
    /// Zero when the configuration was rejected before its grid was built.
    pub sensor_count: usize,
    pub outcome:      SimResult<TrialTotals>,
}

/// A configuration ready to run: grid, tester and guarded sampler.
struct Prepared {
    grid:    Grid,
    tester:  Arc<dyn IntersectionTester>,
    sampler: TrajectorySampler,
}

/// Runs validated configurations.  Built by
/// [`SimulationBuilder`][crate::SimulationBuilder].
///
/// # Per configuration
///
/// 1. Apply the sweep value to a copy of the base `GridSpec` and build the
///    grid.
/// 2. Resolve the tester for the grid's shape and dimensionality.
/// 3. Build the sampler over the grid's spans, guarded by the tester's
///    divisor.
/// 4. Split `runs` over `workers`: worker `w` runs
///    `runs / workers + (w < runs % workers)` trials with its own
///    `WorkerRng`.  With the `parallel` feature the workers run on Rayon.
/// 5. Sum worker totals in worker order.
///
/// Stream seeds come from a root `SimRng` seeded with `config.seed`, one draw
/// per entry in sweep order, so results depend only on `seed`, `runs` and
/// `workers`.
pub struct SimulationDriver {
    config:   SimulationConfig,
    registry: TesterRegistry,
}

impl SimulationDriver {
    pub(crate) fn new(config: SimulationConfig, registry: TesterRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn registry(&self) -> &TesterRegistry {
        &self.registry
    }

    /// Run every configuration and return one entry per sweep value, in
    /// sweep order.  A rejected configuration yields an `Err` outcome and the
    /// remaining values still run.
    pub fn run<O: SimObserver>(&self, observer: &mut O) -> Vec<SweepEntry> {
        let values: Vec<Option<f64>> = match &self.config.sweep {
            Some(sweep) => sweep.values.iter().copied().map(Some).collect(),
            None        => vec![None],
        };

        let mut root = SimRng::new(self.config.seed);
        let mut entries = Vec::with_capacity(values.len());

        for (index, value) in values.into_iter().enumerate() {
            let stream_seed = root.derive_seed(index as u64);

            let entry = match self.prepare(value) {
                Ok(prepared) => {
                    observer.on_configuration_start(index, value, &prepared.grid);
                    SweepEntry {
                        index,
                        value,
                        sensor_count: prepared.grid.len(),
                        outcome:      self.run_trials(&prepared, stream_seed),
                    }
                }
                Err(e) => SweepEntry { index, value, sensor_count: 0, outcome: Err(e) },
            };

            observer.on_configuration_end(&entry);
            entries.push(entry);
        }

        observer.on_sim_end(&entries);
        entries
    }

    /// The grid spec for one sweep value (the base spec for `None`).
    pub fn grid_spec_for(&self, value: Option<f64>) -> SimResult<GridSpec> {
        match (&self.config.sweep, value) {
            (Some(sweep), Some(v)) => Ok(sweep.parameter.apply(&self.config.grid, v)?),
            _ => Ok(self.config.grid.clone()),
        }
    }

    fn prepare(&self, value: Option<f64>) -> SimResult<Prepared> {
        let grid = Grid::build(self.grid_spec_for(value)?)?;
        let tester = self.registry.resolve(grid.shape_kind(), grid.dimensionality())?;
        let sampler = TrajectorySampler::new(&self.config.sampler, grid.spec().spans())?
            .with_guard(tester.guard(), self.config.degeneracy_epsilon)
            .with_max_resamples(self.config.max_resamples);
        Ok(Prepared { grid, tester, sampler })
    }

    fn run_trials(&self, prepared: &Prepared, stream_seed: u64) -> SimResult<TrialTotals> {
        let runs = self.config.runs;
        let workers = self.config.workers;
        let record = self.config.record_sensor_hits;
        let grid = &prepared.grid;
        let tester = prepared.tester.as_ref();
        let sampler = &prepared.sampler;

        let run_worker = |w: u32| -> SimResult<TrialTotals> {
            let mut rng = WorkerRng::new(stream_seed, WorkerId(w));
            let mut totals = TrialTotals::new(grid.len(), record);
            let mut hits: Vec<SensorId> = Vec::new();
            for _ in 0..trials_for_worker(runs, workers, w) {
                let sampled = sampler.sample(&mut rng)?;
                hits.clear();
                collect_hits(tester, &sampled.trajectory, grid.sensors(), &mut hits)?;
                totals.record_trial(&hits, sampled.resamples);
            }
            Ok(totals)
        };

        #[cfg(not(feature = "parallel"))]
        let per_worker: Vec<SimResult<TrialTotals>> = (0..workers).map(run_worker).collect();

        #[cfg(feature = "parallel")]
        let per_worker: Vec<SimResult<TrialTotals>> = {
            use rayon::prelude::*;
            (0..workers).into_par_iter().map(run_worker).collect()
        };

        let mut totals = TrialTotals::new(grid.len(), record);
        for worker_totals in per_worker {
            totals.merge(&worker_totals?);
        }
        Ok(totals)
    }
}

/// Trials assigned to `worker`: an even split with the remainder going to
/// the lowest worker ids.
pub fn trials_for_worker(runs: u64, workers: u32, worker: u32) -> u64 {
    let workers = u64::from(workers.max(1));
    let worker = u64::from(worker);
    runs / workers + u64::from(worker < runs % workers)
}
