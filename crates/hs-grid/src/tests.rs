//! Unit tests for hs-grid.

#[cfg(test)]
mod helpers {
    use hs_core::{Dimensionality, Point};

    use crate::{GridSpec, SensorShape};

    pub fn spec_2d(length: usize) -> GridSpec {
        GridSpec::new(
            Dimensionality::Two,
            length,
            Point::planar(13.0, 9.0),
            SensorShape::rectangle(3.3, 3e-3),
        )
    }

    pub fn spec_3d(length: usize) -> GridSpec {
        GridSpec::new(
            Dimensionality::Three,
            length,
            Point::new(50.0, 20.0, 20.0),
            SensorShape::cuboid(5.0, 3e-3, 0.5),
        )
    }
}

#[cfg(test)]
mod layout_tests {
    use approx::assert_relative_eq;
    use hs_core::{Dimensionality, SensorId};

    use super::helpers::{spec_2d, spec_3d};
    use crate::layout::{center_of, flat_index, lattice_coord};
    use crate::LatticeCoord;

    #[test]
    fn flat_index_2d_formula() {
        let id = flat_index(Dimensionality::Two, 20, LatticeCoord::planar(3, 7)).unwrap();
        assert_eq!(id, SensorId(7 + 20 * 3));
    }

    #[test]
    fn flat_index_3d_formula() {
        let id = flat_index(Dimensionality::Three, 10, LatticeCoord::new(2, 4, 9)).unwrap();
        assert_eq!(id, SensorId(9 + 10 * 4 + 100 * 2));
    }

    #[test]
    fn out_of_range_coords_rejected() {
        assert!(flat_index(Dimensionality::Two, 4, LatticeCoord::planar(4, 0)).is_none());
        assert!(flat_index(Dimensionality::Two, 4, LatticeCoord::new(1, 0, 0)).is_none());
        assert!(flat_index(Dimensionality::Three, 4, LatticeCoord::new(4, 0, 0)).is_none());
        assert!(lattice_coord(Dimensionality::Two, 4, SensorId(16)).is_none());
    }

    #[test]
    fn coord_inverts_index() {
        for dim in [Dimensionality::Two, Dimensionality::Three] {
            let n = 6usize.pow(dim.axes());
            for i in 0..n {
                let id = SensorId(i as u32);
                let c = lattice_coord(dim, 6, id).unwrap();
                assert_eq!(flat_index(dim, 6, c), Some(id));
            }
        }
    }

    #[test]
    fn odd_rows_are_offset_in_2d() {
        let spec = spec_2d(4);
        let even = center_of(&spec, LatticeCoord::planar(0, 2));
        let odd = center_of(&spec, LatticeCoord::planar(1, 2));
        assert_relative_eq!(even.x, 26.0);
        assert_relative_eq!(odd.x, 2.5 * 13.0);
        assert_relative_eq!(odd.y, 9.0);
        assert_eq!(odd.z, 0.0);
    }

    #[test]
    fn layer_pairs_share_z_plane_in_3d() {
        let spec = spec_3d(4);
        let l0 = center_of(&spec, LatticeCoord::new(0, 1, 1));
        let l1 = center_of(&spec, LatticeCoord::new(1, 1, 1));
        let l2 = center_of(&spec, LatticeCoord::new(2, 1, 1));
        assert_eq!(l0.z, l1.z);
        assert_relative_eq!(l2.z, 40.0);
        assert_relative_eq!(l1.x, 1.5 * 50.0);
        assert_relative_eq!(l1.y, 1.5 * 20.0);
        assert_relative_eq!(l0.x, 50.0);
    }

    #[test]
    fn custom_offset_fraction() {
        let mut spec = spec_2d(2);
        spec.offset_fraction = 0.25;
        let odd = center_of(&spec, LatticeCoord::planar(1, 0));
        assert_relative_eq!(odd.x, 0.25 * 13.0);
    }
}

#[cfg(test)]
mod grid_tests {
    use std::collections::HashSet;

    use hs_core::{Dimensionality, HsError, Point, SensorId};

    use super::helpers::{spec_2d, spec_3d};
    use crate::{Grid, GridBuilder, LatticeCoord, SensorShape, ShapeKind};

    #[test]
    fn sensor_count_is_length_pow_dim() {
        assert_eq!(Grid::build(spec_2d(20)).unwrap().len(), 400);
        assert_eq!(Grid::build(spec_3d(10)).unwrap().len(), 1000);
    }

    #[test]
    fn every_index_populated_exactly_once() {
        for spec in [spec_2d(8), spec_3d(6)] {
            let grid = Grid::build(spec).unwrap();
            let ids: HashSet<u32> = grid.iter().map(|s| s.id.0).collect();
            assert_eq!(ids.len(), grid.len());
            for (i, s) in grid.sensors().iter().enumerate() {
                assert_eq!(s.id, SensorId(i as u32));
            }
        }
    }

    #[test]
    fn storage_matches_layout_contract() {
        let grid = Grid::build(spec_3d(4)).unwrap();
        let id = grid.index_of(LatticeCoord::new(3, 2, 1)).unwrap();
        assert_eq!(id, SensorId(1 + 4 * 2 + 16 * 3));
        let s = grid.get(id).unwrap();
        assert_eq!(grid.coord_of(s.id), Some(LatticeCoord::new(3, 2, 1)));
        assert_eq!(s.center, crate::layout::center_of(grid.spec(), LatticeCoord::new(3, 2, 1)));
    }

    #[test]
    fn build_is_idempotent() {
        let a = Grid::build(spec_3d(6)).unwrap();
        let b = Grid::build(spec_3d(6)).unwrap();
        let ca: Vec<Point> = a.centers().collect();
        let cb: Vec<Point> = b.centers().collect();
        assert_eq!(ca, cb);
    }

    #[test]
    fn odd_length_rejected() {
        let err = Grid::build(spec_2d(5)).unwrap_err();
        assert!(matches!(err, HsError::InvalidConfiguration(_)), "got {err}");
    }

    #[test]
    fn zero_length_rejected() {
        assert!(Grid::build(spec_3d(0)).is_err());
    }

    #[test]
    fn non_positive_pitch_rejected() {
        let mut spec = spec_2d(4);
        spec.pitch.y = 0.0;
        assert!(Grid::build(spec.clone()).is_err());
        spec.pitch.y = -1.0;
        assert!(Grid::build(spec).is_err());
    }

    #[test]
    fn unused_z_pitch_ignored_in_2d() {
        let mut spec = spec_2d(4);
        spec.pitch.z = 0.0;
        assert!(Grid::build(spec).is_ok());
    }

    #[test]
    fn offset_fraction_out_of_range_rejected() {
        let mut spec = spec_2d(4);
        spec.offset_fraction = 1.0;
        assert!(Grid::build(spec).is_err());
    }

    #[test]
    fn bad_sensor_extent_rejected() {
        let spec = GridBuilder::new(Dimensionality::Three, 2)
            .shape(SensorShape::cylinder(0.5, 0.0))
            .spec()
            .clone();
        assert!(Grid::build(spec).is_err());

        // Thickness is unused in 2D.
        let grid = GridBuilder::new(Dimensionality::Two, 2)
            .shape(SensorShape::cylinder(0.5, 0.0))
            .build()
            .unwrap();
        assert_eq!(grid.shape_kind(), ShapeKind::Cylinder);
    }

    #[test]
    fn extent_covers_offset_rows() {
        let grid = GridBuilder::new(Dimensionality::Two, 4)
            .pitch(Point::planar(10.0, 5.0))
            .build()
            .unwrap();
        let (lo, hi) = grid.extent();
        assert_eq!(lo, Point::ZERO);
        assert_eq!(hi, Point::planar(35.0, 15.0));
    }
}
