//! Dispatch from `(shape kind, dimensionality)` to a tester.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use hs_core::Dimensionality;
use hs_grid::{ShapeKind, SensorVolume};
use hs_trajectory::Trajectory;

use crate::{
    CornerSignTester, IntersectError, IntersectResult, IntersectionTester,
    PerpendicularDistanceTester, PlaneInterceptTester,
};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct TesterKey {
    pub shape:          ShapeKind,
    pub dimensionality: Dimensionality,
}

impl TesterKey {
    pub fn new(shape: ShapeKind, dimensionality: Dimensionality) -> Self {
        Self { shape, dimensionality }
    }
}

impl fmt::Display for TesterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.dimensionality, self.shape)
    }
}

/// Registered testers, shared across workers via `Arc`.
///
/// Cloning a registry is cheap; the testers themselves are not copied.
#[derive(Clone, Default)]
pub struct TesterRegistry {
    testers: HashMap<TesterKey, Arc<dyn IntersectionTester>>,
}

impl TesterRegistry {
    /// An empty registry.  Every lookup fails until testers are registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four built-in combinations.
    pub fn with_defaults() -> Self {
        let distance = Arc::new(PerpendicularDistanceTester::default());
        let mut registry = Self::new();
        registry.register(
            TesterKey::new(ShapeKind::Box, Dimensionality::Two),
            Arc::new(CornerSignTester),
        );
        registry.register(
            TesterKey::new(ShapeKind::Box, Dimensionality::Three),
            Arc::new(PlaneInterceptTester::default()),
        );
        registry.register(TesterKey::new(ShapeKind::Cylinder, Dimensionality::Two), distance.clone());
        registry.register(TesterKey::new(ShapeKind::Cylinder, Dimensionality::Three), distance);
        registry
    }

    /// Install `tester` under `key`, returning the one it replaces.
    pub fn register(
        &mut self,
        key:    TesterKey,
        tester: Arc<dyn IntersectionTester>,
    ) -> Option<Arc<dyn IntersectionTester>> {
        self.testers.insert(key, tester)
    }

    pub fn resolve(
        &self,
        shape:          ShapeKind,
        dimensionality: Dimensionality,
    ) -> IntersectResult<Arc<dyn IntersectionTester>> {
        self.testers
            .get(&TesterKey::new(shape, dimensionality))
            .cloned()
            .ok_or(IntersectError::UnsupportedPair { shape, dimensionality })
    }

    /// Dispatch on the sensor's shape and the trajectory's dimensionality.
    pub fn test(&self, trajectory: &Trajectory, sensor: &SensorVolume) -> IntersectResult<bool> {
        self.resolve(sensor.kind(), trajectory.dimensionality())?
            .test(trajectory, sensor)
    }

    pub fn keys(&self) -> impl Iterator<Item = TesterKey> + '_ {
        self.testers.keys().copied()
    }
}

impl fmt::Debug for TesterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, tester) in &self.testers {
            map.entry(&format_args!("{key}"), &tester.name());
        }
        map.finish()
    }
}
