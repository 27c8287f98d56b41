//! Fluent builder for constructing a [`Grid`].

use hs_core::{Dimensionality, HsResult, Point};

use crate::spec::DEFAULT_OFFSET_FRACTION;
use crate::{Grid, GridSpec, SensorShape};

/// Fluent builder for [`Grid`].
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                          |
/// |-------------------------|----------------------------------|
/// | `.pitch(p)`             | `1.0` on every axis              |
/// | `.offset_fraction(f)`   | `0.5`                            |
/// | `.shape(s)`             | box with all half extents `0.25` |
///
/// # Example
///
/// ```rust
/// use hs_core::{Dimensionality, Point};
/// use hs_grid::{GridBuilder, SensorShape};
///
/// let grid = GridBuilder::new(Dimensionality::Three, 4)
///     .pitch(Point::new(80.0, 29.0, 19.0))
///     .shape(SensorShape::cuboid(9.44, 6e-3, 9.44))
///     .build()
///     .unwrap();
/// assert_eq!(grid.len(), 64);
/// ```
pub struct GridBuilder {
    spec: GridSpec,
}

impl GridBuilder {
    pub fn new(dimensionality: Dimensionality, length: usize) -> Self {
        Self {
            spec: GridSpec {
                dimensionality,
                length,
                pitch:           Point::splat(1.0),
                offset_fraction: DEFAULT_OFFSET_FRACTION,
                shape:           SensorShape::cuboid(0.25, 0.25, 0.25),
            },
        }
    }

    /// Start from an existing spec (e.g. one loaded from a config file).
    pub fn from_spec(spec: GridSpec) -> Self {
        Self { spec }
    }

    pub fn pitch(mut self, pitch: Point) -> Self {
        self.spec.pitch = pitch;
        self
    }

    pub fn offset_fraction(mut self, fraction: f64) -> Self {
        self.spec.offset_fraction = fraction;
        self
    }

    pub fn shape(mut self, shape: SensorShape) -> Self {
        self.spec.shape = shape;
        self
    }

    /// The spec as configured so far.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Validate and generate the lattice.
    pub fn build(self) -> HsResult<Grid> {
        Grid::build(self.spec)
    }
}
