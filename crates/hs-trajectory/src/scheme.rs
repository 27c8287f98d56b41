//! Sampler configuration: which representation to draw and from what bounds.

use hs_core::{Axis, Bounds, Dimensionality, HsError, HsResult, Point};

/// Bounds of one trajectory parameter.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ParamBounds {
    /// Absolute `[low, high]`.
    Fixed { low: f64, high: f64 },

    /// `[low · span, high · span]` where `span = length · pitch[axis]` of the
    /// grid being simulated.  Lets bounds follow a swept pitch.
    Span { axis: Axis, low: f64, high: f64 },
}

impl ParamBounds {
    pub fn fixed(low: f64, high: f64) -> Self {
        ParamBounds::Fixed { low, high }
    }

    pub fn span(axis: Axis, low: f64, high: f64) -> Self {
        ParamBounds::Span { axis, low, high }
    }

    /// Concrete bounds for a grid with the given per-axis spans.
    pub fn resolve(&self, spans: Point) -> HsResult<Bounds> {
        match *self {
            ParamBounds::Fixed { low, high } => Bounds::new(low, high),
            ParamBounds::Span { axis, low, high } => {
                let span = spans.get(axis);
                if !span.is_finite() {
                    return Err(HsError::InvalidConfiguration(format!(
                        "lattice span along {axis} is not finite"
                    )));
                }
                if low > high {
                    return Err(HsError::InvalidConfiguration(format!(
                        "span fractions [{low}, {high}] along {axis} have low > high"
                    )));
                }
                Bounds::new(low * span, high * span)
            }
        }
    }
}

/// One `ParamBounds` per axis, for 3D origin and direction draws.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointBounds {
    pub x: ParamBounds,
    pub y: ParamBounds,
    pub z: ParamBounds,
}

impl PointBounds {
    /// The same bounds on every axis.
    pub fn uniform(bounds: ParamBounds) -> Self {
        Self { x: bounds, y: bounds, z: bounds }
    }

    /// `[low, high]` of each axis' own lattice span.
    pub fn lattice_fraction(low: f64, high: f64) -> Self {
        Self {
            x: ParamBounds::span(Axis::X, low, high),
            y: ParamBounds::span(Axis::Y, low, high),
            z: ParamBounds::span(Axis::Z, low, high),
        }
    }

    pub(crate) fn resolve(&self, spans: Point) -> HsResult<[Bounds; 3]> {
        Ok([self.x.resolve(spans)?, self.y.resolve(spans)?, self.z.resolve(spans)?])
    }
}

/// Which trajectory representation to generate, with per-parameter bounds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "scheme", rename_all = "snake_case"))]
pub enum SamplerSpec {
    /// `x = slope·y + intercept`.
    SlopeIntercept {
        slope:     ParamBounds,
        intercept: ParamBounds,
    },

    /// `a·x + b·y + c = 0`.
    Implicit {
        a: ParamBounds,
        b: ParamBounds,
        c: ParamBounds,
    },

    /// `origin + t·direction`.
    PointDirection {
        origin:    PointBounds,
        direction: PointBounds,
    },
}

impl SamplerSpec {
    pub fn dimensionality(&self) -> Dimensionality {
        match self {
            SamplerSpec::SlopeIntercept { .. } | SamplerSpec::Implicit { .. } => Dimensionality::Two,
            SamplerSpec::PointDirection { .. } => Dimensionality::Three,
        }
    }
}
