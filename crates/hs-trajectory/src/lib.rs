//! `hs-trajectory`: randomized straight-line trajectories.
//!
//! # Representations
//!
//! | Variant                          | Meaning                         | Dim |
//! |----------------------------------|---------------------------------|-----|
//! | [`Trajectory::SlopeIntercept`]   | `x = slope·y + intercept`       | 2D  |
//! | [`Trajectory::Implicit`]         | `a·x + b·y + c = 0`             | 2D  |
//! | [`Trajectory::PointDirection`]   | `origin + t·direction`          | 3D  |
//!
//! A [`SamplerSpec`] names one representation and the uniform bounds of each
//! of its parameters.  [`TrajectorySampler`] resolves those bounds once and
//! then draws one trajectory per call from a caller-owned
//! [`WorkerRng`][hs_core::WorkerRng].  It never sees sensor geometry.
//!
//! # Degenerate draws
//!
//! Testers divide by some direction component.  The tester tells the sampler
//! which one through a [`DivisorGuard`]; draws that would make that divisor
//! vanish are rejected and redrawn, up to a configurable limit.

pub mod error;
pub mod guard;
pub mod sampler;
pub mod scheme;
pub mod trajectory;


pub use error::{SampleError, SampleResult};
pub use guard::DivisorGuard;
pub use sampler::{Sampled, TrajectorySampler};
pub use scheme::{ParamBounds, PointBounds, SamplerSpec};
pub use trajectory::{Trajectory, TrajectoryKind};
