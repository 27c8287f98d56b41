//! Simulation observer trait for progress reporting and data collection.

use std::time::Instant;

use hs_grid::Grid;

use crate::SweepEntry;

/// Callbacks invoked by [`SimulationDriver::run`][crate::SimulationDriver::run]
/// around each configuration.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called once the configuration's grid is built, before any trial runs.
    /// Not called for configurations rejected during preparation.
    fn on_configuration_start(&mut self, _index: usize, _value: Option<f64>, _grid: &Grid) {}

    /// Called after every configuration, accepted or rejected.
    fn on_configuration_end(&mut self, _entry: &SweepEntry) {}

    /// Called once after the last configuration.
    fn on_sim_end(&mut self, _entries: &[SweepEntry]) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Forward every callback to both observers, `A` first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_configuration_start(&mut self, index: usize, value: Option<f64>, grid: &Grid) {
        self.0.on_configuration_start(index, value, grid);
        self.1.on_configuration_start(index, value, grid);
    }

    fn on_configuration_end(&mut self, entry: &SweepEntry) {
        self.0.on_configuration_end(entry);
        self.1.on_configuration_end(entry);
    }

    fn on_sim_end(&mut self, entries: &[SweepEntry]) {
        self.0.on_sim_end(entries);
        self.1.on_sim_end(entries);
    }
}

/// Prints one line per configuration to stderr.
pub struct ProgressPrinter {
    started: Option<Instant>,
}

impl ProgressPrinter {
    pub fn new() -> Self {
        Self { started: None }
    }
}

impl Default for ProgressPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl SimObserver for ProgressPrinter {
    fn on_configuration_start(&mut self, index: usize, value: Option<f64>, grid: &Grid) {
        self.started = Some(Instant::now());
        match value {
            Some(v) => eprintln!("[{index}] value {v}: {} sensors", grid.len()),
            None    => eprintln!("[{index}] {} sensors", grid.len()),
        }
    }

    fn on_configuration_end(&mut self, entry: &SweepEntry) {
        let elapsed = self.started.take().map(|t| t.elapsed().as_secs_f64());
        match (&entry.outcome, elapsed) {
            (Ok(totals), Some(secs)) => eprintln!(
                "[{}] {} hits in {} runs ({secs:.2}s)",
                entry.index, totals.total_hits, totals.runs
            ),
            (Ok(totals), None) => eprintln!(
                "[{}] {} hits in {} runs",
                entry.index, totals.total_hits, totals.runs
            ),
            (Err(e), _) => eprintln!("[{}] rejected: {e}", entry.index),
        }
    }

    fn on_sim_end(&mut self, entries: &[SweepEntry]) {
        let rejected = entries.iter().filter(|e| e.outcome.is_err()).count();
        eprintln!("done: {} configurations, {rejected} rejected", entries.len());
    }
}
