//! Plane-intercept test for thin box sensors in 3D.
//!
//! Each sensor is treated as its two bounding planes along y,
//! `y_p = cy ± half_height`.  For each plane the trajectory's crossing point
//! is
//!
//! ```text
//! ix = (a / b)·(y_p − y1) + x1
//! iz = (c / b)·(y_p − y1) + z1
//! ```
//!
//! with origin `(x1, y1, z1)` and direction `(a, b, c)`.  Two corner checks
//! follow, each combining two directional comparisons:
//!
//! ```text
//! lower:  cx − half_width < ix  and  cz − half_depth < iz
//! upper:  cx + half_width > ix  and  cz + half_depth > iz
//! ```
//!
//! The sensor is hit when both checks hold (count two) on either plane.  A
//! line that enters and leaves through the side faces without crossing
//! either y plane inside the face is therefore a miss; this plane-by-plane
//! approximation is kept deliberately and is not full 3D clipping.

use hs_core::{Axis, Point};
use hs_grid::{SensorShape, SensorVolume};
use hs_trajectory::{DivisorGuard, Trajectory};

use crate::{IntersectError, IntersectResult, IntersectionTester};

/// Corner checks that must hold on one plane for a hit.
const REQUIRED_CHECKS: u32 = 2;

#[derive(Copy, Clone, Debug)]
pub struct PlaneInterceptTester {
    /// `|direction.y|` below this is treated as zero.
    pub epsilon: f64,
}

impl Default for PlaneInterceptTester {
    fn default() -> Self {
        Self { epsilon: 1e-12 }
    }
}

impl IntersectionTester for PlaneInterceptTester {
    fn name(&self) -> &'static str {
        "plane-intercept"
    }

    fn test(&self, trajectory: &Trajectory, sensor: &SensorVolume) -> IntersectResult<bool> {
        let SensorShape::Box { half_width, half_height, half_depth } = sensor.shape else {
            return Err(IntersectError::ShapeMismatch {
                tester: self.name(),
                shape:  sensor.kind(),
            });
        };
        let Trajectory::PointDirection { origin, direction } = *trajectory else {
            return Err(IntersectError::TrajectoryMismatch {
                tester:     self.name(),
                trajectory: trajectory.kind(),
            });
        };
        if direction.y.abs() < self.epsilon {
            return Err(IntersectError::Degenerate {
                tester: self.name(),
                reason: format!("direction y component {} is ~0", direction.y),
            });
        }

        let c = sensor.center;
        for plane_y in [c.y - half_height, c.y + half_height] {
            let (ix, iz) = intercept_on_y_plane(origin, direction, plane_y);
            let mut checks = 0;
            if c.x - half_width < ix && c.z - half_depth < iz {
                checks += 1;
            }
            if c.x + half_width > ix && c.z + half_depth > iz {
                checks += 1;
            }
            if checks == REQUIRED_CHECKS {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn guard(&self) -> DivisorGuard {
        DivisorGuard::DirectionComponent(Axis::Y)
    }

    fn divisor_epsilon(&self) -> f64 {
        self.epsilon
    }
}

/// `(x, z)` where the line crosses the plane `y = plane_y`.
///
/// Caller guarantees `direction.y != 0`.
#[inline]
pub fn intercept_on_y_plane(origin: Point, direction: Point, plane_y: f64) -> (f64, f64) {
    let dy = plane_y - origin.y;
    (
        (direction.x / direction.y) * dy + origin.x,
        (direction.z / direction.y) * dy + origin.z,
    )
}
