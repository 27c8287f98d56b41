//! Fluent builder for constructing a [`SimulationDriver`].

use hs_core::HsError;
use hs_intersect::TesterRegistry;
use hs_trajectory::TrajectorySampler;

use crate::{SimError, SimResult, SimulationConfig, SimulationDriver};

/// Fluent builder for [`SimulationDriver`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                          |
/// |-----------------|----------------------------------|
/// | `.registry(r)`  | `TesterRegistry::with_defaults()` |
///
/// # Example
///
/// ```rust,ignore
/// let driver = SimulationBuilder::new(config).build()?;
/// let entries = driver.run(&mut NoopObserver);
/// ```
pub struct SimulationBuilder {
    config:   SimulationConfig,
    registry: Option<TesterRegistry>,
}

impl SimulationBuilder {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config, registry: None }
    }

    /// Replace the built-in testers, e.g. to register a new shape.
    pub fn registry(mut self, registry: TesterRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Validate everything that is shared by all sweep entries.
    ///
    /// The base grid and sampler bounds are checked here only without a
    /// sweep; with one, each entry is checked on its own so a bad value
    /// rejects only that entry.
    pub fn build(self) -> SimResult<SimulationDriver> {
        let config = self.config;
        let registry = self.registry.unwrap_or_else(TesterRegistry::with_defaults);

        // ── Run parameters ────────────────────────────────────────────────
        if config.runs == 0 {
            return Err(invalid("runs must be positive"));
        }
        if config.workers == 0 {
            return Err(invalid("workers must be positive"));
        }
        if !config.degeneracy_epsilon.is_finite() || config.degeneracy_epsilon < 0.0 {
            return Err(invalid(format!(
                "degeneracy epsilon {} must be finite and non-negative",
                config.degeneracy_epsilon
            )));
        }

        // ── Grid / sampler / tester compatibility ─────────────────────────
        let grid_dim = config.grid.dimensionality;
        let sampler_dim = config.sampler.dimensionality();
        if grid_dim != sampler_dim {
            return Err(SimError::DimensionMismatch { grid: grid_dim, sampler: sampler_dim });
        }
        let tester = registry.resolve(config.grid.shape.kind(), grid_dim)?;
        if config.degeneracy_epsilon < tester.divisor_epsilon() {
            return Err(invalid(format!(
                "degeneracy epsilon {} is below the {} tester's threshold {}",
                config.degeneracy_epsilon,
                tester.name(),
                tester.divisor_epsilon()
            )));
        }

        match &config.sweep {
            Some(sweep) => sweep.validate()?,
            None => {
                config.grid.validate()?;
                TrajectorySampler::new(&config.sampler, config.grid.spans())?;
            }
        }

        Ok(SimulationDriver::new(config, registry))
    }
}

fn invalid(msg: impl Into<String>) -> SimError {
    SimError::Config(HsError::InvalidConfiguration(msg.into()))
}
