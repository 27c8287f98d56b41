//! Perpendicular-distance test for circular (2D) and cylindrical (3D)
//! sensors.
//!
//! 2D: hit iff `|a·x₀ + b·y₀ + c| / √(a² + b²) ≤ radius`.
//!
//! 3D: the same distance is taken on the xy projection of the line.  The
//! foot of the perpendicular fixes the line parameter `t`, and the line's z
//! there must lie within `center.z ± half_thickness`.

use hs_grid::{SensorShape, SensorVolume};
use hs_trajectory::{DivisorGuard, Trajectory};

use crate::{IntersectError, IntersectResult, IntersectionTester};

#[derive(Copy, Clone, Debug)]
pub struct PerpendicularDistanceTester {
    /// Normal lengths below this are treated as zero.
    pub epsilon: f64,
}

impl Default for PerpendicularDistanceTester {
    fn default() -> Self {
        Self { epsilon: 1e-12 }
    }
}

impl PerpendicularDistanceTester {
    fn degenerate(&self, normal: f64) -> IntersectError {
        IntersectError::Degenerate {
            tester: self.name(),
            reason: format!("line normal length {normal} is ~0"),
        }
    }
}

impl IntersectionTester for PerpendicularDistanceTester {
    fn name(&self) -> &'static str {
        "perpendicular-distance"
    }

    fn test(&self, trajectory: &Trajectory, sensor: &SensorVolume) -> IntersectResult<bool> {
        let SensorShape::Cylinder { radius, half_thickness } = sensor.shape else {
            return Err(IntersectError::ShapeMismatch {
                tester: self.name(),
                shape:  sensor.kind(),
            });
        };
        let c = sensor.center;

        if let Some((a, b, k)) = trajectory.implicit_coefficients() {
            let normal = a.hypot(b);
            if normal < self.epsilon {
                return Err(self.degenerate(normal));
            }
            return Ok((a * c.x + b * c.y + k).abs() / normal <= radius);
        }

        let Trajectory::PointDirection { origin, direction } = *trajectory else {
            return Err(IntersectError::TrajectoryMismatch {
                tester:     self.name(),
                trajectory: trajectory.kind(),
            });
        };
        let (da, db) = (direction.x, direction.y);
        let n2 = da * da + db * db;
        let normal = da.hypot(db);
        if normal < self.epsilon {
            return Err(self.degenerate(normal));
        }
        let (dx, dy) = (c.x - origin.x, c.y - origin.y);
        if (db * dx - da * dy).abs() / normal > radius {
            return Ok(false);
        }
        // Foot of the perpendicular in the xy projection.
        let t = (dx * da + dy * db) / n2;
        let foot = origin + direction * t;
        Ok((foot.z - c.z).abs() <= half_thickness)
    }

    fn guard(&self) -> DivisorGuard {
        DivisorGuard::PlanarNormal
    }

    fn divisor_epsilon(&self) -> f64 {
        self.epsilon
    }
}
