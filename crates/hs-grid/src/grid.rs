//! The built sensor lattice.

use hs_core::{Dimensionality, HsResult, Point, SensorId};

use crate::layout::{self, LatticeCoord};
use crate::{GridSpec, SensorShape, ShapeKind};

/// One sensor's active region.  Immutable once the grid is built.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SensorVolume {
    pub id:     SensorId,
    pub center: Point,
    pub shape:  SensorShape,
}

impl SensorVolume {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }
}

/// Ordered sensor storage.  `sensors[i].id == SensorId(i)` for every `i`.
///
/// Read-only after construction; shared by reference with every worker.
#[derive(Clone, Debug)]
pub struct Grid {
    spec:    GridSpec,
    sensors: Vec<SensorVolume>,
}

impl Grid {
    /// Validate `spec` and generate all `L^D` sensor centers in index order.
    pub fn build(spec: GridSpec) -> HsResult<Grid> {
        spec.validate()?;

        let length = spec.length;
        let mut sensors = Vec::with_capacity(spec.sensor_count());

        // Loop nesting matches the flat-index formula, so push order equals
        // index order and no slot is ever left unfilled.
        let layers = match spec.dimensionality {
            Dimensionality::Two   => 1,
            Dimensionality::Three => length,
        };
        for layer in 0..layers {
            for row in 0..length {
                for column in 0..length {
                    let coord = LatticeCoord::new(layer, row, column);
                    sensors.push(SensorVolume {
                        id:     SensorId(sensors.len() as u32),
                        center: layout::center_of(&spec, coord),
                        shape:  spec.shape,
                    });
                }
            }
        }

        debug_assert_eq!(sensors.len(), spec.sensor_count());
        Ok(Grid { spec, sensors })
    }

    #[inline]
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    #[inline]
    pub fn dimensionality(&self) -> Dimensionality {
        self.spec.dimensionality
    }

    #[inline]
    pub fn shape_kind(&self) -> ShapeKind {
        self.spec.shape.kind()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    #[inline]
    pub fn sensors(&self) -> &[SensorVolume] {
        &self.sensors
    }

    #[inline]
    pub fn get(&self, id: SensorId) -> Option<&SensorVolume> {
        self.sensors.get(id.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SensorVolume> {
        self.sensors.iter()
    }

    pub fn index_of(&self, coord: LatticeCoord) -> Option<SensorId> {
        layout::flat_index(self.spec.dimensionality, self.spec.length, coord)
    }

    pub fn coord_of(&self, id: SensorId) -> Option<LatticeCoord> {
        layout::lattice_coord(self.spec.dimensionality, self.spec.length, id)
    }

    /// Sensor centers in index order; placement input for an external
    /// detector-geometry builder.
    pub fn centers(&self) -> impl Iterator<Item = Point> + '_ {
        self.sensors.iter().map(|s| s.center)
    }

    /// Axis-aligned bounding box `(min, max)` of all sensor centers.
    pub fn extent(&self) -> (Point, Point) {
        let mut it = self.centers();
        let Some(first) = it.next() else {
            return (Point::ZERO, Point::ZERO);
        };
        it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)))
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a SensorVolume;
    type IntoIter = std::slice::Iter<'a, SensorVolume>;

    fn into_iter(self) -> Self::IntoIter {
        self.sensors.iter()
    }
}
