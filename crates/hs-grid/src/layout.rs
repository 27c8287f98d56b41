//! Flat-index layout and brick-pattern center placement.
//!
//! These two functions are the whole lattice contract.  `Grid` storage, hit
//! ids and the CSV sensor table all go through them.

use hs_core::{Dimensionality, Point, SensorId};

use crate::GridSpec;

/// Position of a sensor in lattice units.
///
/// `layer` is always 0 in 2D.  In 2D the `row` advances along y and the
/// `column` along x; in 3D the `layer` advances along z as well.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct LatticeCoord {
    pub layer:  usize,
    pub row:    usize,
    pub column: usize,
}

impl LatticeCoord {
    #[inline]
    pub fn planar(row: usize, column: usize) -> Self {
        Self { layer: 0, row, column }
    }

    #[inline]
    pub fn new(layer: usize, row: usize, column: usize) -> Self {
        Self { layer, row, column }
    }
}

/// `j + L·i` (2D) or `k + L·j + L²·i` (3D).
///
/// Returns `None` if any coordinate is outside `0..length`, or if a 2D
/// coordinate carries a non-zero layer.
pub fn flat_index(dim: Dimensionality, length: usize, coord: LatticeCoord) -> Option<SensorId> {
    if coord.row >= length || coord.column >= length {
        return None;
    }
    let index = match dim {
        Dimensionality::Two => {
            if coord.layer != 0 {
                return None;
            }
            coord.column + length * coord.row
        }
        Dimensionality::Three => {
            if coord.layer >= length {
                return None;
            }
            coord.column + length * coord.row + length * length * coord.layer
        }
    };
    SensorId::try_from(index).ok()
}

/// Inverse of [`flat_index`].
pub fn lattice_coord(dim: Dimensionality, length: usize, id: SensorId) -> Option<LatticeCoord> {
    let index = id.index();
    if length == 0 {
        return None;
    }
    let coord = match dim {
        Dimensionality::Two => {
            if index >= length * length {
                return None;
            }
            LatticeCoord::planar(index / length, index % length)
        }
        Dimensionality::Three => {
            if index >= length * length * length {
                return None;
            }
            let layer = index / (length * length);
            let rest = index % (length * length);
            LatticeCoord::new(layer, rest / length, rest % length)
        }
    };
    Some(coord)
}

/// Center of the sensor at `coord`.
///
/// 2D: odd rows shift x by `offset_fraction · pitch.x`; `y = row · pitch.y`.
/// 3D: odd layers shift both x and y; the two layers of a pair share the
/// z plane `(layer − layer mod 2) · pitch.z`.
pub fn center_of(spec: &GridSpec, coord: LatticeCoord) -> Point {
    let pitch = spec.pitch;
    match spec.dimensionality {
        Dimensionality::Two => {
            let shift = if coord.row % 2 == 1 { spec.offset_fraction } else { 0.0 };
            Point::planar(
                (coord.column as f64 + shift) * pitch.x,
                coord.row as f64 * pitch.y,
            )
        }
        Dimensionality::Three => {
            let odd = coord.layer % 2;
            let shift = if odd == 1 { spec.offset_fraction } else { 0.0 };
            Point::new(
                (coord.column as f64 + shift) * pitch.x,
                (coord.row as f64 + shift) * pitch.y,
                (coord.layer - odd) as f64 * pitch.z,
            )
        }
    }
}
