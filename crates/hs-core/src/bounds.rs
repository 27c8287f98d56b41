//! Closed sampling interval for one trajectory parameter.

use std::fmt;

use crate::{HsError, HsResult};

/// Inclusive `[low, high]` range a parameter is drawn uniformly from.
///
/// `low == high` is allowed and pins the parameter to a constant, which is
/// how analytically tractable scenarios (e.g. vertical lines) are expressed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub low:  f64,
    pub high: f64,
}

impl Bounds {
    /// Validated constructor.  Both ends must be finite and `low <= high`.
    pub fn new(low: f64, high: f64) -> HsResult<Self> {
        let bounds = Self { low, high };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> HsResult<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(HsError::InvalidConfiguration(format!(
                "bounds {self} must be finite"
            )));
        }
        if self.low > self.high {
            return Err(HsError::InvalidConfiguration(format!(
                "bounds {self} have low > high"
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        self.low == self.high
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
