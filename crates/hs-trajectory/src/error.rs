use hs_core::HsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleError {
    /// A drawn divisor is zero or within epsilon of zero.  Handled by
    /// redrawing the trial.
    #[error("degenerate trajectory: {0}")]
    Degenerate(String),

    #[error("no usable trajectory after {attempts} consecutive degenerate draws")]
    ResampleLimit { attempts: u32 },

    #[error("sampler configuration error: {0}")]
    Config(#[from] HsError),
}

pub type SampleResult<T> = Result<T, SampleError>;
