//! The `Trajectory` enum.

use std::fmt;

use hs_core::{Dimensionality, Point};

/// One straight-line particle path.  Created and discarded per trial.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Trajectory {
    /// `x = slope·y + intercept`.  Never vertical in y, so no divisor.
    SlopeIntercept { slope: f64, intercept: f64 },

    /// `a·x + b·y + c = 0`.
    Implicit { a: f64, b: f64, c: f64 },

    /// `origin + t·direction` for real `t`.
    PointDirection { origin: Point, direction: Point },
}

/// Representation tag, used in error messages and dispatch checks.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TrajectoryKind {
    SlopeIntercept,
    Implicit,
    PointDirection,
}

impl Trajectory {
    #[inline]
    pub fn kind(&self) -> TrajectoryKind {
        match self {
            Trajectory::SlopeIntercept { .. } => TrajectoryKind::SlopeIntercept,
            Trajectory::Implicit { .. }       => TrajectoryKind::Implicit,
            Trajectory::PointDirection { .. } => TrajectoryKind::PointDirection,
        }
    }

    #[inline]
    pub fn dimensionality(&self) -> Dimensionality {
        match self {
            Trajectory::SlopeIntercept { .. } | Trajectory::Implicit { .. } => Dimensionality::Two,
            Trajectory::PointDirection { .. } => Dimensionality::Three,
        }
    }

    /// `(a, b, c)` with the line being `a·x + b·y + c = 0`, for 2D forms.
    ///
    /// Slope-intercept maps to `(1, −slope, −intercept)`, so the sign of
    /// `a·x + b·y + c` is the sign of `x − slope·y − intercept`.
    #[inline]
    pub fn implicit_coefficients(&self) -> Option<(f64, f64, f64)> {
        match *self {
            Trajectory::SlopeIntercept { slope, intercept } => Some((1.0, -slope, -intercept)),
            Trajectory::Implicit { a, b, c } => Some((a, b, c)),
            Trajectory::PointDirection { .. } => None,
        }
    }

    /// Line through `p` along `direction` (3D form).
    pub fn through(p: Point, direction: Point) -> Self {
        Trajectory::PointDirection { origin: p, direction }
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trajectory::SlopeIntercept { slope, intercept } => {
                write!(f, "x = {slope} * y + {intercept}")
            }
            Trajectory::Implicit { a, b, c } => write!(f, "{a} * x + {b} * y + {c} = 0"),
            Trajectory::PointDirection { origin, direction } => {
                write!(f, "{origin} + t * {direction}")
            }
        }
    }
}

impl fmt::Display for TrajectoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrajectoryKind::SlopeIntercept => "slope-intercept",
            TrajectoryKind::Implicit       => "implicit",
            TrajectoryKind::PointDirection => "point-direction",
        };
        f.write_str(s)
    }
}
