//! Grid generation parameters.

use hs_core::{Axis, Dimensionality, HsError, HsResult, Point};

use crate::SensorShape;

/// Default brick offset: odd rows/layers are shifted by half a pitch.
pub const DEFAULT_OFFSET_FRACTION: f64 = 0.5;

#[cfg(feature = "serde")]
fn default_offset_fraction() -> f64 {
    DEFAULT_OFFSET_FRACTION
}

/// Everything needed to generate a [`Grid`][crate::Grid].
///
/// Typically embedded in the simulation config and loaded from JSON by the
/// application.  A sweep produces one modified copy per swept value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    pub dimensionality: Dimensionality,

    /// Sensors per axis (`L`).  Must be even: rows/layers come in
    /// unshifted/shifted pairs.
    pub length: usize,

    /// Center-to-center spacing per axis.  `z` is ignored in 2D.
    pub pitch: Point,

    /// Shift of odd rows/layers as a fraction of the pitch, in `[0, 1)`.
    #[cfg_attr(feature = "serde", serde(default = "default_offset_fraction"))]
    pub offset_fraction: f64,

    pub shape: SensorShape,
}

impl GridSpec {
    pub fn new(
        dimensionality: Dimensionality,
        length:         usize,
        pitch:          Point,
        shape:          SensorShape,
    ) -> Self {
        Self {
            dimensionality,
            length,
            pitch,
            offset_fraction: DEFAULT_OFFSET_FRACTION,
            shape,
        }
    }

    /// `L^D`, or `None` if it overflows `usize`.
    pub fn checked_sensor_count(&self) -> Option<usize> {
        self.length.checked_pow(self.dimensionality.axes())
    }

    /// `L^D`.  Only meaningful on a validated spec.
    #[inline]
    pub fn sensor_count(&self) -> usize {
        self.checked_sensor_count().unwrap_or(usize::MAX)
    }

    /// Lattice span `L · pitch` along `axis`.
    #[inline]
    pub fn span(&self, axis: Axis) -> f64 {
        self.length as f64 * self.pitch.get(axis)
    }

    /// Spans along all three axes (`z` is `L · pitch.z` even in 2D).
    pub fn spans(&self) -> Point {
        Point::new(self.span(Axis::X), self.span(Axis::Y), self.span(Axis::Z))
    }

    pub fn validate(&self) -> HsResult<()> {
        if self.length == 0 {
            return Err(HsError::InvalidConfiguration(
                "lattice length must be > 0".into(),
            ));
        }
        if self.length % 2 != 0 {
            return Err(HsError::InvalidConfiguration(format!(
                "lattice length {} is odd; offset rows/layers are generated in pairs",
                self.length
            )));
        }
        match self.checked_sensor_count() {
            Some(n) if u32::try_from(n).is_ok_and(|n| n != u32::MAX) => {}
            _ => {
                return Err(HsError::InvalidConfiguration(format!(
                    "lattice length {} gives too many sensors for {} indexing",
                    self.length, self.dimensionality
                )));
            }
        }
        for &axis in self.dimensionality.used_axes() {
            let p = self.pitch.get(axis);
            if !(p.is_finite() && p > 0.0) {
                return Err(HsError::InvalidConfiguration(format!(
                    "pitch along {axis} must be finite and > 0, got {p}"
                )));
            }
        }
        if !(self.offset_fraction.is_finite() && (0.0..1.0).contains(&self.offset_fraction)) {
            return Err(HsError::InvalidConfiguration(format!(
                "offset fraction must lie in [0, 1), got {}",
                self.offset_fraction
            )));
        }
        self.shape.validate(self.dimensionality)
    }
}
