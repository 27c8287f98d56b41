//! `hs-sim`: Monte Carlo trial driver for the hitsim engine.
//!
//! # Run loop
//!
//! ```text
//! for each sweep value (or once, without a sweep):
//!   ① Prepare: apply the value to the base GridSpec, build the grid,
//!               resolve the tester, build the guarded sampler.
//!   ② Trials:  each worker draws its share of `runs` trajectories from its
//!               own WorkerRng and tests each against every sensor
//!               (parallel with the `parallel` feature).
//!   ③ Reduce:  sum worker totals in worker order.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs the workers of a configuration on Rayon's pool.    |
//! | `serde`    | `Serialize`/`Deserialize` for `SimulationConfig`.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hs_sim::{NoopObserver, SimulationBuilder, SimulationConfig};
//!
//! let config = SimulationConfig::new(grid_spec, sampler_spec, 100_000, 42);
//! let driver = SimulationBuilder::new(config).build()?;
//! for entry in driver.run(&mut NoopObserver) {
//!     println!("{:?}", entry.outcome?.total_hits);
//! }
//! ```

pub mod builder;
pub mod config;
pub mod driver;
pub mod error;
pub mod observer;
pub mod sweep;
pub mod totals;

#[cfg(test)]
mod tests;

pub use builder::SimulationBuilder;
pub use config::SimulationConfig;
pub use driver::{trials_for_worker, SimulationDriver, SweepEntry};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, ProgressPrinter, SimObserver};
pub use sweep::{Sweep, SweepParameter};
pub use totals::TrialTotals;
