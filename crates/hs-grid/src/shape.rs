//! Sensor shapes and their size parameters.

use std::fmt;

use hs_core::{Dimensionality, HsError, HsResult, Point};

/// Shape tag used to pick an intersection algorithm.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShapeKind {
    Box,
    Cylinder,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Box      => f.write_str("box"),
            ShapeKind::Cylinder => f.write_str("cylinder"),
        }
    }
}

/// The active region of one sensor, centered on its lattice position.
///
/// Every size is a *half* extent.  In 2D only `half_width`/`half_height`
/// (box) or `radius` (cylinder) are used; the remaining fields are ignored
/// and not validated.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SensorShape {
    /// Axis-aligned box: x half-width, y half-height, z half-depth.
    Box {
        half_width:  f64,
        half_height: f64,
        half_depth:  f64,
    },
    /// Disc of `radius` in the xy plane, `2·half_thickness` thick along z.
    Cylinder {
        radius:         f64,
        half_thickness: f64,
    },
}

impl SensorShape {
    pub fn rectangle(half_width: f64, half_height: f64) -> Self {
        SensorShape::Box { half_width, half_height, half_depth: half_width }
    }

    pub fn cuboid(half_width: f64, half_height: f64, half_depth: f64) -> Self {
        SensorShape::Box { half_width, half_height, half_depth }
    }

    pub fn cylinder(radius: f64, half_thickness: f64) -> Self {
        SensorShape::Cylinder { radius, half_thickness }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            SensorShape::Box { .. }      => ShapeKind::Box,
            SensorShape::Cylinder { .. } => ShapeKind::Cylinder,
        }
    }

    /// Half extents of the axis-aligned bounding box.
    pub fn half_extents(&self) -> Point {
        match *self {
            SensorShape::Box { half_width, half_height, half_depth } => {
                Point::new(half_width, half_height, half_depth)
            }
            SensorShape::Cylinder { radius, half_thickness } => {
                Point::new(radius, radius, half_thickness)
            }
        }
    }

    /// Every extent the dimensionality uses must be finite and positive.
    pub fn validate(&self, dim: Dimensionality) -> HsResult<()> {
        let used: Vec<(&str, f64)> = match (*self, dim) {
            (SensorShape::Box { half_width, half_height, .. }, Dimensionality::Two) => {
                vec![("half_width", half_width), ("half_height", half_height)]
            }
            (SensorShape::Box { half_width, half_height, half_depth }, Dimensionality::Three) => {
                vec![
                    ("half_width", half_width),
                    ("half_height", half_height),
                    ("half_depth", half_depth),
                ]
            }
            (SensorShape::Cylinder { radius, .. }, Dimensionality::Two) => vec![("radius", radius)],
            (SensorShape::Cylinder { radius, half_thickness }, Dimensionality::Three) => {
                vec![("radius", radius), ("half_thickness", half_thickness)]
            }
        };
        for (name, value) in used {
            if !(value.is_finite() && value > 0.0) {
                return Err(HsError::InvalidConfiguration(format!(
                    "{} sensor {name} must be finite and > 0, got {value}",
                    self.kind()
                )));
            }
        }
        Ok(())
    }
}
