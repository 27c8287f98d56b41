//! `hs-grid`: sensor lattice generation for the hitsim engine.
//!
//! A [`Grid`] is an ordered `Vec<SensorVolume>` whose storage index *is* the
//! sensor's flat lattice index:
//!
//! ```text
//! 2D:  index = j + L·i            i = row,   j = column
//! 3D:  index = k + L·j + L²·i     i = layer, j = row, k = column
//! ```
//!
//! Odd rows (2D) or odd layers (3D) are shifted by `offset_fraction · pitch`
//! on the remaining axes to form the "brick" packing.  The formula is a
//! contract: downstream hit-index correlation relies on it.
//!
//! # Quick-start
//!
//! ```rust
//! use hs_core::{Dimensionality, Point};
//! use hs_grid::{GridBuilder, SensorShape};
//!
//! let grid = GridBuilder::new(Dimensionality::Two, 10)
//!     .pitch(Point::planar(30.236, 60.236))
//!     .shape(SensorShape::cylinder(0.118, 0.5))
//!     .build()
//!     .unwrap();
//! assert_eq!(grid.len(), 100);
//! ```

pub mod builder;
pub mod grid;
pub mod layout;
pub mod shape;
pub mod spec;

#[cfg(test)]
mod tests;

pub use builder::GridBuilder;
pub use grid::{Grid, SensorVolume};
pub use layout::LatticeCoord;
pub use shape::{SensorShape, ShapeKind};
pub use spec::GridSpec;
