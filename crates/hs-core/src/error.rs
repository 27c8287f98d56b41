//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `HsError` as one variant
//! (see `SampleError::Config`, `SimError::Config`).

use thiserror::Error;

/// The top-level error type for `hs-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HsError {
    /// A grid, sampler, or run parameter that cannot describe a valid
    /// configuration.  Fatal to that configuration only.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `hs-*` crates.
pub type HsResult<T> = Result<T, HsError>;
