use hs_core::{Dimensionality, HsError};
use hs_intersect::IntersectError;
use hs_trajectory::SampleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] HsError),

    #[error("sampler is {sampler} but the grid is {grid}")]
    DimensionMismatch {
        grid:    Dimensionality,
        sampler: Dimensionality,
    },

    #[error("trajectory sampling failed: {0}")]
    Sample(#[from] SampleError),

    #[error("intersection test failed: {0}")]
    Intersect(#[from] IntersectError),
}

pub type SimResult<T> = Result<T, SimError>;
