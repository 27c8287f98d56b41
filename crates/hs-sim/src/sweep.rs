//! One-parameter sweeps over the grid geometry.

use std::fmt;

use hs_core::{HsError, HsResult};
use hs_grid::{GridSpec, SensorShape};

/// The grid quantity a sweep varies.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SweepParameter {
    PitchX,
    PitchY,
    PitchZ,
    OffsetFraction,
    /// Box sensors only.
    HalfWidth,
    /// Box sensors only.
    HalfHeight,
    /// Box sensors only.
    HalfDepth,
    /// Cylinder sensors only.
    Radius,
    /// Cylinder sensors only.
    HalfThickness,
}

impl SweepParameter {
    /// A copy of `base` with this parameter set to `value`.
    ///
    /// Only the applicability of the parameter to the sensor shape is checked
    /// here; the value itself is validated when the grid is built.
    pub fn apply(self, base: &GridSpec, value: f64) -> HsResult<GridSpec> {
        let mut spec = base.clone();
        match (self, &mut spec.shape) {
            (SweepParameter::PitchX, _) => spec.pitch.x = value,
            (SweepParameter::PitchY, _) => spec.pitch.y = value,
            (SweepParameter::PitchZ, _) => spec.pitch.z = value,
            (SweepParameter::OffsetFraction, _) => spec.offset_fraction = value,
            (SweepParameter::HalfWidth, SensorShape::Box { half_width, .. }) => *half_width = value,
            (SweepParameter::HalfHeight, SensorShape::Box { half_height, .. }) => *half_height = value,
            (SweepParameter::HalfDepth, SensorShape::Box { half_depth, .. }) => *half_depth = value,
            (SweepParameter::Radius, SensorShape::Cylinder { radius, .. }) => *radius = value,
            (SweepParameter::HalfThickness, SensorShape::Cylinder { half_thickness, .. }) => {
                *half_thickness = value
            }
            (param, shape) => {
                return Err(HsError::InvalidConfiguration(format!(
                    "sweep parameter {param} does not apply to {} sensors",
                    shape.kind()
                )));
            }
        }
        Ok(spec)
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SweepParameter::PitchX         => "pitch_x",
            SweepParameter::PitchY         => "pitch_y",
            SweepParameter::PitchZ         => "pitch_z",
            SweepParameter::OffsetFraction => "offset_fraction",
            SweepParameter::HalfWidth      => "half_width",
            SweepParameter::HalfHeight     => "half_height",
            SweepParameter::HalfDepth      => "half_depth",
            SweepParameter::Radius         => "radius",
            SweepParameter::HalfThickness  => "half_thickness",
        })
    }
}

/// An ordered list of values for one [`SweepParameter`].
///
/// Each value produces one independent configuration and one result record,
/// in list order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sweep {
    pub parameter: SweepParameter,
    pub values:    Vec<f64>,
}

impl Sweep {
    pub fn new(parameter: SweepParameter, values: Vec<f64>) -> Self {
        Self { parameter, values }
    }

    /// `start, start + step, …` while below `stop` (exclusive).
    ///
    /// Values are computed as `start + i·step` rather than by repeated
    /// addition, so long sweeps do not drift.
    pub fn range(parameter: SweepParameter, start: f64, stop: f64, step: f64) -> HsResult<Self> {
        if !(start.is_finite() && stop.is_finite() && step.is_finite()) || step <= 0.0 {
            return Err(HsError::InvalidConfiguration(format!(
                "sweep range {start}..{stop} step {step} must be finite with a positive step"
            )));
        }
        // Values within a tiny fraction of a step below `stop` count as `stop`.
        let limit = stop - step * 1e-9;
        let count = ((stop - start) / step).ceil().max(0.0) as usize;
        let values: Vec<f64> = (0..count)
            .map(|i| start + i as f64 * step)
            .take_while(|&v| v < limit)
            .collect();
        if values.is_empty() {
            return Err(HsError::InvalidConfiguration(format!(
                "sweep range {start}..{stop} step {step} is empty"
            )));
        }
        Ok(Self { parameter, values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn validate(&self) -> HsResult<()> {
        if self.values.is_empty() {
            return Err(HsError::InvalidConfiguration(format!(
                "sweep over {} has no values",
                self.parameter
            )));
        }
        if let Some(bad) = self.values.iter().find(|v| !v.is_finite()) {
            return Err(HsError::InvalidConfiguration(format!(
                "sweep over {} contains non-finite value {bad}",
                self.parameter
            )));
        }
        Ok(())
    }
}
