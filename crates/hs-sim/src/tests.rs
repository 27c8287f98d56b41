//! Unit tests for hs-sim.

#[cfg(test)]
mod helpers {
    use hs_core::{Axis, Dimensionality, Point};
    use hs_grid::{GridSpec, SensorShape};
    use hs_trajectory::{ParamBounds, PointBounds, SamplerSpec};

    use crate::SimulationConfig;

    /// 10×10 circles, 30.236 pitch, 0.236 diameter.
    pub fn circle_grid() -> GridSpec {
        GridSpec::new(
            Dimensionality::Two,
            10,
            Point::planar(30.236, 30.236),
            SensorShape::cylinder(0.118, 1.0),
        )
    }

    /// Vertical lines with intercept uniform over the full x span.
    pub fn vertical_lines() -> SamplerSpec {
        SamplerSpec::SlopeIntercept {
            slope:     ParamBounds::fixed(0.0, 0.0),
            intercept: ParamBounds::span(Axis::X, 0.0, 1.0),
        }
    }

    /// Steep lines with slope up to ±5 and intercept over the x span.
    pub fn random_lines() -> SamplerSpec {
        SamplerSpec::SlopeIntercept {
            slope:     ParamBounds::fixed(-5.0, 5.0),
            intercept: ParamBounds::span(Axis::X, 0.0, 1.0),
        }
    }

    pub fn strip_config(runs: u64, seed: u64) -> SimulationConfig {
        let grid = GridSpec::new(
            Dimensionality::Two,
            20,
            Point::planar(13.0, 9.0),
            SensorShape::rectangle(3.3, 3e-3),
        );
        SimulationConfig::new(grid, random_lines(), runs, seed)
    }

    pub fn pad_config(runs: u64, seed: u64) -> SimulationConfig {
        let grid = GridSpec::new(
            Dimensionality::Three,
            4,
            Point::new(50.0, 20.0, 20.0),
            SensorShape::cuboid(5.0, 3e-3, 0.5),
        );
        let sampler = SamplerSpec::PointDirection {
            origin:    PointBounds::lattice_fraction(0.1, 0.9),
            direction: PointBounds::uniform(ParamBounds::fixed(-100.0, 100.0)),
        };
        SimulationConfig::new(grid, sampler, runs, seed)
    }

    /// `pad_config` with `direction.y` drawn from `[-y_max, y_max]`, so a
    /// share of draws sits below `epsilon` and has to be redrawn.
    pub fn near_flat_pad_config(
        runs:    u64,
        seed:    u64,
        y_max:   f64,
        epsilon: f64,
    ) -> SimulationConfig {
        let mut config = pad_config(runs, seed);
        if let SamplerSpec::PointDirection { direction, .. } = &mut config.sampler {
            direction.y = ParamBounds::fixed(-y_max, y_max);
        }
        config.degeneracy_epsilon = epsilon;
        config
    }
}

#[cfg(test)]
mod sweep_tests {
    use hs_core::HsError;
    use hs_grid::SensorShape;

    use super::helpers::{circle_grid, strip_config};
    use crate::{Sweep, SweepParameter};

    #[test]
    fn range_excludes_stop() {
        let sweep = Sweep::range(SweepParameter::HalfWidth, 13.0, 100.0, 5.0).unwrap();
        assert_eq!(sweep.len(), 18);
        assert_eq!(sweep.values.first(), Some(&13.0));
        assert_eq!(sweep.values.last(), Some(&98.0));

        let exact = Sweep::range(SweepParameter::PitchX, 0.0, 1.0, 0.1).unwrap();
        assert_eq!(exact.len(), 10);
    }

    #[test]
    fn range_rejects_bad_step() {
        assert!(Sweep::range(SweepParameter::PitchX, 0.0, 1.0, 0.0).is_err());
        assert!(Sweep::range(SweepParameter::PitchX, 0.0, 1.0, -1.0).is_err());
        assert!(Sweep::range(SweepParameter::PitchX, 2.0, 1.0, 0.5).is_err());
    }

    #[test]
    fn apply_sets_only_the_swept_value() {
        let base = strip_config(1, 0).grid;
        let swept = SweepParameter::PitchX.apply(&base, 42.0).unwrap();
        assert_eq!(swept.pitch.x, 42.0);
        assert_eq!(swept.pitch.y, base.pitch.y);
        assert_eq!(swept.shape, base.shape);

        let wider = SweepParameter::HalfWidth.apply(&base, 6.5).unwrap();
        assert!(matches!(wider.shape, SensorShape::Box { half_width, .. } if half_width == 6.5));
    }

    #[test]
    fn apply_rejects_wrong_shape() {
        let err = SweepParameter::HalfWidth.apply(&circle_grid(), 1.0).unwrap_err();
        assert!(matches!(err, HsError::InvalidConfiguration(_)));
        assert!(SweepParameter::Radius.apply(&strip_config(1, 0).grid, 1.0).is_err());
    }
}

#[cfg(test)]
mod builder_tests {
    use hs_core::Point;
    use hs_intersect::{IntersectError, TesterRegistry};
    use hs_trajectory::{ParamBounds, PointBounds, SamplerSpec};

    use super::helpers::{pad_config, strip_config};
    use crate::{SimError, SimulationBuilder, Sweep, SweepParameter};

    #[test]
    fn rejects_zero_runs_and_workers() {
        assert!(SimulationBuilder::new(strip_config(0, 1)).build().is_err());
        assert!(SimulationBuilder::new(strip_config(10, 1).with_workers(0)).build().is_err());
    }

    #[test]
    fn rejects_bad_epsilon() {
        let mut config = strip_config(10, 1);
        config.degeneracy_epsilon = f64::NAN;
        assert!(matches!(
            SimulationBuilder::new(config).build(),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn rejects_epsilon_below_tester_threshold() {
        // plane-intercept divides by direction.y and fails below 1e-12.
        let mut config = pad_config(10, 1);
        config.degeneracy_epsilon = 0.0;
        assert!(matches!(SimulationBuilder::new(config).build(), Err(SimError::Config(_))));

        let mut config = pad_config(10, 1);
        config.degeneracy_epsilon = 1e-13;
        assert!(SimulationBuilder::new(config).build().is_err());

        let mut config = pad_config(10, 1);
        config.degeneracy_epsilon = 1e-12;
        assert!(SimulationBuilder::new(config).build().is_ok());

        // corner-sign never divides, so any non-negative epsilon is fine.
        let mut strips = strip_config(10, 1);
        strips.degeneracy_epsilon = 0.0;
        assert!(SimulationBuilder::new(strips).build().is_ok());
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let mut config = strip_config(10, 1);
        config.sampler = SamplerSpec::PointDirection {
            origin:    PointBounds::uniform(ParamBounds::fixed(0.0, 1.0)),
            direction: PointBounds::uniform(ParamBounds::fixed(-1.0, 1.0)),
        };
        assert!(matches!(
            SimulationBuilder::new(config).build(),
            Err(SimError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn rejects_odd_length_without_sweep() {
        let mut config = strip_config(10, 1);
        config.grid.length = 7;
        assert!(matches!(SimulationBuilder::new(config).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn rejects_missing_tester() {
        let result = SimulationBuilder::new(strip_config(10, 1))
            .registry(TesterRegistry::new())
            .build();
        assert!(matches!(
            result,
            Err(SimError::Intersect(IntersectError::UnsupportedPair { .. }))
        ));
    }

    #[test]
    fn bad_base_grid_is_deferred_with_sweep() {
        // The base pitch is invalid but every swept value replaces it.
        let mut config = strip_config(10, 1);
        config.grid.pitch = Point::planar(-1.0, 9.0);
        let config = config.with_sweep(Sweep::new(SweepParameter::PitchX, vec![13.0, 20.0]));
        assert!(SimulationBuilder::new(config).build().is_ok());
    }

    #[test]
    fn rejects_empty_or_non_finite_sweep() {
        let empty = strip_config(10, 1).with_sweep(Sweep::new(SweepParameter::PitchX, vec![]));
        assert!(SimulationBuilder::new(empty).build().is_err());
        let nan = strip_config(10, 1)
            .with_sweep(Sweep::new(SweepParameter::PitchX, vec![13.0, f64::NAN]));
        assert!(SimulationBuilder::new(nan).build().is_err());
    }
}

#[cfg(test)]
mod driver_tests {
    use approx::assert_relative_eq;

    use hs_core::{SimRng, WorkerId, WorkerRng};
    use hs_grid::Grid;
    use hs_intersect::collect_hits;
    use hs_trajectory::TrajectorySampler;

    use super::helpers::{
        circle_grid, near_flat_pad_config, pad_config, strip_config, vertical_lines,
    };
    use crate::{
        trials_for_worker, NoopObserver, SimObserver, SimulationBuilder, SimulationConfig, Sweep,
        SweepEntry, SweepParameter, TrialTotals,
    };

    fn run(config: SimulationConfig) -> Vec<SweepEntry> {
        SimulationBuilder::new(config).build().unwrap().run(&mut NoopObserver)
    }

    #[test]
    fn worker_split_covers_all_runs() {
        assert_eq!(
            (0..3).map(|w| trials_for_worker(10, 3, w)).collect::<Vec<_>>(),
            vec![4, 3, 3]
        );
        assert_eq!((0..8).map(|w| trials_for_worker(5, 8, w)).sum::<u64>(), 5);
    }

    #[test]
    fn single_entry_without_sweep() {
        let entries = run(strip_config(500, 3).with_workers(3));
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.value, None);
        assert_eq!(entry.sensor_count, 400);
        let totals = entry.outcome.as_ref().unwrap();
        assert_eq!(totals.runs, 500);
        assert!(totals.trials_with_hits <= totals.runs);
    }

    #[test]
    fn same_seed_same_totals() {
        let a = run(strip_config(2_000, 99).with_workers(4));
        let b = run(strip_config(2_000, 99).with_workers(4));
        assert_eq!(a[0].outcome.as_ref().unwrap(), b[0].outcome.as_ref().unwrap());
    }

    #[test]
    fn different_seed_different_totals() {
        let a = run(strip_config(2_000, 1));
        let b = run(strip_config(2_000, 2));
        assert_ne!(
            a[0].outcome.as_ref().unwrap().sensor_hits,
            b[0].outcome.as_ref().unwrap().sensor_hits
        );
    }

    #[test]
    fn sensor_hits_sum_to_total_and_stay_in_range() {
        let entries = run(strip_config(3_000, 5).with_workers(2));
        let totals = entries[0].outcome.as_ref().unwrap();
        assert_eq!(totals.sensor_hits.len(), entries[0].sensor_count);
        assert_eq!(totals.sensor_hits.iter().sum::<u64>(), totals.total_hits);
        assert!(totals.total_hits > 0);
    }

    #[test]
    fn per_sensor_recording_can_be_disabled() {
        let mut config = strip_config(100, 5);
        config.record_sensor_hits = false;
        let entries = run(config);
        let totals = entries[0].outcome.as_ref().unwrap();
        assert!(!totals.records_sensor_hits());
        assert_eq!(totals.runs, 100);
    }

    #[test]
    fn bad_sweep_value_rejects_only_that_entry() {
        let config = strip_config(200, 8)
            .with_sweep(Sweep::new(SweepParameter::PitchX, vec![13.0, -1.0, 20.0]));
        let entries = run(config);
        assert_eq!(entries.len(), 3);
        assert!(entries[0].outcome.is_ok());
        assert!(entries[1].outcome.is_err());
        assert_eq!(entries[1].sensor_count, 0);
        assert!(entries[2].outcome.is_ok());
        assert_eq!(entries[2].value, Some(20.0));
    }

    #[test]
    fn three_d_pads_run() {
        let entries = run(pad_config(2_000, 17).with_workers(2));
        let totals = entries[0].outcome.as_ref().unwrap();
        assert_eq!(entries[0].sensor_count, 64);
        assert_eq!(totals.runs, 2_000);
        assert!(totals.sensor_hits.iter().all(|&h| h <= totals.runs));
    }

    #[test]
    fn guarded_draws_are_resampled_not_fatal() {
        // The smallest accepted epsilon; about 10% of draws fall below it.
        let entries = run(near_flat_pad_config(2_000, 31, 1e-11, 1e-12).with_workers(3));
        let totals = entries[0].outcome.as_ref().unwrap();
        assert_eq!(totals.runs, 2_000);
        assert!(totals.resampled_trials > 0);
        assert!(totals.resampled_trials < totals.runs);
        assert!(totals.resamples >= totals.resampled_trials);
    }

    #[test]
    fn resample_counts_add_up_across_workers() {
        // Half of all draws are degenerate.
        let entries = run(near_flat_pad_config(1_000, 4, 1e-6, 5e-7).with_workers(4));
        let totals = entries[0].outcome.as_ref().unwrap();
        assert_eq!(totals.runs, 1_000);
        assert!(totals.resampled_trials > 300 && totals.resampled_trials < 700);
        assert!(totals.resamples > totals.resampled_trials);
    }

    #[test]
    fn totals_equal_worker_order_replay() {
        // Holds with and without the `parallel` feature: the driver's result
        // must match replaying each worker's stream in order on this thread.
        let config = strip_config(5_000, 7).with_workers(4);
        let driver = SimulationBuilder::new(config.clone()).build().unwrap();
        let entries = driver.run(&mut NoopObserver);

        let grid = Grid::build(config.grid.clone()).unwrap();
        let tester = driver
            .registry()
            .resolve(grid.shape_kind(), grid.dimensionality())
            .unwrap();
        let sampler = TrajectorySampler::new(&config.sampler, grid.spec().spans())
            .unwrap()
            .with_guard(tester.guard(), config.degeneracy_epsilon)
            .with_max_resamples(config.max_resamples);
        let stream_seed = SimRng::new(config.seed).derive_seed(0);

        let mut expected = TrialTotals::new(grid.len(), true);
        let mut hits = Vec::new();
        for w in 0..config.workers {
            let mut rng = WorkerRng::new(stream_seed, WorkerId(w));
            for _ in 0..trials_for_worker(config.runs, config.workers, w) {
                let sampled = sampler.sample(&mut rng).unwrap();
                hits.clear();
                collect_hits(tester.as_ref(), &sampled.trajectory, grid.sensors(), &mut hits)
                    .unwrap();
                expected.record_trial(&hits, sampled.resamples);
            }
        }
        assert_eq!(entries[0].outcome.as_ref().unwrap(), &expected);
    }

    #[test]
    fn observer_sees_every_configuration() {
        #[derive(Default)]
        struct Counter {
            starts: usize,
            ends:   usize,
            done:   bool,
        }
        impl SimObserver for Counter {
            fn on_configuration_start(&mut self, _: usize, _: Option<f64>, _: &hs_grid::Grid) {
                self.starts += 1;
            }
            fn on_configuration_end(&mut self, _: &SweepEntry) {
                self.ends += 1;
            }
            fn on_sim_end(&mut self, entries: &[SweepEntry]) {
                self.done = entries.len() == self.ends;
            }
        }

        let config = strip_config(50, 8)
            .with_sweep(Sweep::new(SweepParameter::PitchX, vec![13.0, 0.0, 20.0]));
        let mut counter = Counter::default();
        SimulationBuilder::new(config).build().unwrap().run(&mut counter);
        assert_eq!(counter.starts, 2);
        assert_eq!(counter.ends, 3);
        assert!(counter.done);
    }

    #[test]
    fn vertical_lines_match_crossing_probability() {
        let config = SimulationConfig::new(circle_grid(), vertical_lines(), 200_000, 2024)
            .with_workers(4);
        let entries = run(config);
        let totals = entries[0].outcome.as_ref().unwrap();

        let diameter = 0.236;
        let span = 10.0 * 30.236;
        let expected = diameter / span;
        let observed = totals.total_hits as f64 / (totals.runs as f64 * 100.0);
        assert_relative_eq!(observed, expected, max_relative = 0.1);
    }
}
