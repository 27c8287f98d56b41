//! `hs-core`: foundational types for the `hitsim` line–sensor Monte Carlo
//! engine.
//!
//! This crate is a dependency of every other `hs-*` crate.  It intentionally
//! has no `hs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geom`]        | `Point`, `Axis`, `Dimensionality`                     |
//! | [`bounds`]      | `Bounds` (closed uniform sampling interval)           |
//! | [`ids`]         | `SensorId`, `WorkerId`                                |
//! | [`rng`]         | `WorkerRng` (per-worker), `SimRng` (root)             |
//! | [`error`]       | `HsError`, `HsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod bounds;
pub mod error;
pub mod geom;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bounds::Bounds;
pub use error::{HsError, HsResult};
pub use geom::{Axis, Dimensionality, Point};
pub use ids::{SensorId, WorkerId};
pub use rng::{SimRng, WorkerRng};
