//! Corner-sign test for thin rectangular sensors in 2D.
//!
//! The line's implicit function `f(x, y) = a·x + b·y + c` is evaluated at the
//! four corners `(cx ± half_width, cy ± half_height)`.  The sensor is hit iff
//! at least one corner is strictly positive and at least one strictly
//! negative, i.e. the line separates the corners.
//!
//! For a slope-intercept line `x = m·y + c` this is `f = x − m·y − c`.  A line
//! that only touches a corner (f = 0 there, same sign elsewhere) is a miss.

use hs_core::Point;
use hs_grid::{SensorShape, SensorVolume};
use hs_trajectory::Trajectory;

use crate::{IntersectError, IntersectResult, IntersectionTester};

/// Corner offsets as (x sign, y sign).
const CORNERS: [(f64, f64); 4] = [(-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0), (1.0, 1.0)];

#[derive(Copy, Clone, Debug, Default)]
pub struct CornerSignTester;

impl IntersectionTester for CornerSignTester {
    fn name(&self) -> &'static str {
        "corner-sign"
    }

    fn test(&self, trajectory: &Trajectory, sensor: &SensorVolume) -> IntersectResult<bool> {
        let SensorShape::Box { half_width, half_height, .. } = sensor.shape else {
            return Err(IntersectError::ShapeMismatch {
                tester: self.name(),
                shape:  sensor.kind(),
            });
        };
        let Some((a, b, c)) = trajectory.implicit_coefficients() else {
            return Err(IntersectError::TrajectoryMismatch {
                tester:     self.name(),
                trajectory: trajectory.kind(),
            });
        };
        Ok(line_separates_corners((a, b, c), sensor.center, half_width, half_height))
    }
}

/// `true` iff `a·x + b·y + c` takes both strict signs over the rectangle's
/// corners.
pub fn line_separates_corners(
    (a, b, c):   (f64, f64, f64),
    center:      Point,
    half_width:  f64,
    half_height: f64,
) -> bool {
    let mut positive = false;
    let mut negative = false;
    for (sx, sy) in CORNERS {
        let x = center.x + sx * half_width;
        let y = center.y + sy * half_height;
        let f = a * x + b * y + c;
        if f > 0.0 {
            positive = true;
        } else if f < 0.0 {
            negative = true;
        }
    }
    positive && negative
}
