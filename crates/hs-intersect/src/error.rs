use hs_core::Dimensionality;
use hs_grid::ShapeKind;
use hs_trajectory::TrajectoryKind;
use thiserror::Error;

/// Tester failures.  All of them indicate inconsistent inputs and are
/// reported immediately; none are retried.
#[derive(Debug, Error)]
pub enum IntersectError {
    #[error("no intersection tester registered for {shape} sensors in {dimensionality}")]
    UnsupportedPair {
        shape:          ShapeKind,
        dimensionality: Dimensionality,
    },

    #[error("{tester} tester cannot test {shape} sensors")]
    ShapeMismatch {
        tester: &'static str,
        shape:  ShapeKind,
    },

    #[error("{tester} tester cannot test {trajectory} trajectories")]
    TrajectoryMismatch {
        tester:     &'static str,
        trajectory: TrajectoryKind,
    },

    #[error("{tester} tester: {reason}")]
    Degenerate {
        tester: &'static str,
        reason: String,
    },
}

pub type IntersectResult<T> = Result<T, IntersectError>;
