//! Integer clip-engine point with an auxiliary Z channel.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D integer point carrying an opaque signed 64-bit `z` payload.
///
/// `x` and `y` belong to the clip engine and are never changed here.
/// The meaning of `z` depends on the active [`ZFillType`](crate::ZFillType).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntPoint {
    /// Horizontal engine coordinate.
    pub x: i64,
    /// Vertical engine coordinate.
    pub y: i64,
    /// Auxiliary payload written by the Z-fill strategies.
    pub z: i64,
}

impl IntPoint {
    /// Creates a new point.
    #[inline]
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Creates a point with `z = 0`.
    #[inline]
    pub fn xy(x: i64, y: i64) -> Self {
        Self { x, y, z: 0 }
    }

    /// Returns `z` reinterpreted as an unsigned bit pattern.
    #[inline]
    pub fn z_bits(self) -> u64 {
        self.z as u64
    }

    /// Euclidean distance to another point in the XY plane.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// True if `self` is above `other`, or level with it and to the right.
    ///
    /// This is the natural sweep ordering of the clip engine.
    #[inline]
    pub fn above_or_right_of(self, other: Self) -> bool {
        self.y > other.y || (self.y == other.y && self.x > other.x)
    }

    /// True if `self` is below `other`, or level with it and to the left.
    #[inline]
    pub fn below_or_left_of(self, other: Self) -> bool {
        self.y < other.y || (self.y == other.y && self.x < other.x)
    }
}
