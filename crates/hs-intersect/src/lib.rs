//! `hs-intersect`: "did this line cross this sensor?"
//!
//! # Testers
//!
//! | Key (shape, dim)    | Tester                         | Trajectory forms            |
//! |---------------------|--------------------------------|-----------------------------|
//! | (Box, 2D)           | [`CornerSignTester`]           | slope-intercept, implicit   |
//! | (Box, 3D)           | [`PlaneInterceptTester`]       | point-direction             |
//! | (Cylinder, 2D)      | [`PerpendicularDistanceTester`]| slope-intercept, implicit   |
//! | (Cylinder, 3D)      | [`PerpendicularDistanceTester`]| point-direction             |
//!
//! The corner-sign and plane-intercept tests are geometric heuristics carried
//! over unchanged from the detector studies this engine serves; each module
//! documents exactly what it decides.  They are not exact box/line clipping.
//!
//! # Extending
//!
//! Implement [`IntersectionTester`] and [`TesterRegistry::register`] it under
//! a new `(ShapeKind, Dimensionality)` key.  The simulation driver resolves
//! testers only through the registry.

pub mod corner;
pub mod distance;
pub mod error;
pub mod plane;
pub mod registry;
pub mod tester;


pub use corner::CornerSignTester;
pub use distance::PerpendicularDistanceTester;
pub use error::{IntersectError, IntersectResult};
pub use plane::PlaneInterceptTester;
pub use registry::{TesterKey, TesterRegistry};
pub use tester::{collect_hits, IntersectionTester};
