//! Divisor guards: which trajectory component a tester divides by.

use hs_core::Axis;

use crate::{SampleError, SampleResult, Trajectory};

/// Declares the denominator a tester computes from a trajectory.
///
/// The sampler applies the guard to every draw and redraws on failure, so a
/// tester never sees an infinite or NaN intercept.  Guards only inspect the
/// representation they are about; any other representation passes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum DivisorGuard {
    /// No division by trajectory components.
    #[default]
    None,

    /// `direction[axis]` is a divisor (3D point+direction form).
    DirectionComponent(Axis),

    /// The xy normal length is a divisor: `√(a²+b²)` for implicit 2D lines,
    /// the xy projection of `direction` for 3D lines.
    PlanarNormal,
}

impl DivisorGuard {
    pub fn check(self, trajectory: &Trajectory, epsilon: f64) -> SampleResult<()> {
        match (self, trajectory) {
            (DivisorGuard::DirectionComponent(axis), Trajectory::PointDirection { direction, .. }) => {
                let v = direction.get(axis);
                if v.abs() < epsilon || !v.is_finite() {
                    return Err(SampleError::Degenerate(format!(
                        "direction {axis} component {v} is within {epsilon} of zero"
                    )));
                }
            }
            (DivisorGuard::PlanarNormal, Trajectory::PointDirection { direction, .. }) => {
                let n = direction.x.hypot(direction.y);
                if n < epsilon || !n.is_finite() {
                    return Err(SampleError::Degenerate(format!(
                        "direction has xy projection {n}, within {epsilon} of zero"
                    )));
                }
            }
            (DivisorGuard::PlanarNormal, Trajectory::Implicit { a, b, .. }) => {
                let n = a.hypot(*b);
                if n < epsilon || !n.is_finite() {
                    return Err(SampleError::Degenerate(format!(
                        "line normal ({a}, {b}) is within {epsilon} of zero"
                    )));
                }
            }
            _ => {}
        }
        Ok(())
    }
}
