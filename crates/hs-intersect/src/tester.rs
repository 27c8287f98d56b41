//! The `IntersectionTester` trait, the extension point for new shape/line
//! combinations.

use hs_core::SensorId;
use hs_grid::SensorVolume;
use hs_trajectory::{DivisorGuard, Trajectory};

use crate::IntersectResult;

/// Decides hit / no-hit for one `(trajectory, sensor)` pair.
///
/// # Thread safety
///
/// The driver shares one tester across all workers, so implementations must
/// be `Send + Sync` and keep no per-call state.
pub trait IntersectionTester: Send + Sync {
    /// Short name for error messages and logs.
    fn name(&self) -> &'static str;

    /// `Ok(true)` if the trajectory crosses the sensor's active region.
    ///
    /// Returns an error only for inputs this tester does not handle (wrong
    /// shape, wrong trajectory form) or a divisor that is numerically zero.
    fn test(&self, trajectory: &Trajectory, sensor: &SensorVolume) -> IntersectResult<bool>;

    /// The trajectory component this tester divides by.  The sampler redraws
    /// trajectories that would make it vanish.
    fn guard(&self) -> DivisorGuard {
        DivisorGuard::None
    }

    /// Magnitude below which the guarded divisor makes [`test`][Self::test]
    /// fail with `Degenerate`.  The sampler's guard epsilon must be at least
    /// this, or a draw can pass the guard and still fail here.
    fn divisor_epsilon(&self) -> f64 {
        0.0
    }
}

/// Test `trajectory` against every sensor in `sensors`, appending the ids of
/// those hit to `hits` in storage order.
///
/// `hits` is not cleared so callers can reuse one buffer across trials.
pub fn collect_hits(
    tester:     &dyn IntersectionTester,
    trajectory: &Trajectory,
    sensors:    &[SensorVolume],
    hits:       &mut Vec<SensorId>,
) -> IntersectResult<()> {
    for sensor in sensors {
        if tester.test(trajectory, sensor)? {
            hits.push(sensor.id);
        }
    }
    Ok(())
}
