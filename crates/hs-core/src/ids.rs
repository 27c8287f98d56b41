//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both IDs index `Vec`s directly: a `SensorId` is a position in grid
//! storage and a `WorkerId` selects an RNG stream.

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Flat lattice index of a sensor.  Equal to its position in `Grid`
    /// storage: `k + L·j + L²·i` in 3D, `j + L·i` in 2D.
    pub struct SensorId(u32);
}

typed_id! {
    /// Index of an independent trial stream.  Each worker owns one RNG.
    pub struct WorkerId(u32);
}
