//! Clip-engine edge supplied to Z-fill strategies.

use super::IntPoint;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An edge as the clip engine sees it: an ordered (bottom, top) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    /// Endpoint with the larger y (larger x on ties).
    pub bot: IntPoint,
    /// Opposite endpoint.
    pub top: IntPoint,
}

impl Edge {
    /// Creates a new edge.
    #[inline]
    pub fn new(bot: IntPoint, top: IntPoint) -> Self {
        Self { bot, top }
    }

    /// Length of the edge in the XY plane.
    #[inline]
    pub fn length(&self) -> f64 {
        self.bot.distance(self.top)
    }

    /// Fraction of the way from `bot` to `top` at which `pt` lies,
    /// measured as straight-line distance from `bot`.
    ///
    /// Clamped to `[0, 1]`. A zero-length edge yields 0.
    pub fn fraction_at(&self, pt: IntPoint) -> f64 {
        let len = self.length();
        if len <= 0.0 {
            return 0.0;
        }
        (self.bot.distance(pt) / len).clamp(0.0, 1.0)
    }

    /// Z linearly interpolated along the edge at `pt`.
    pub fn z_at(&self, pt: IntPoint) -> f64 {
        lerp(self.bot.z as f64, self.top.z as f64, self.fraction_at(pt))
    }

    /// Larger of the two endpoint Zs.
    #[inline]
    pub fn max_z(&self) -> i64 {
        self.bot.z.max(self.top.z)
    }

    /// Smaller of the two endpoint Zs.
    #[inline]
    pub fn min_z(&self) -> i64 {
        self.bot.z.min(self.top.z)
    }

    /// True when the top Z is at least the bottom Z.
    #[inline]
    pub fn z_ascends(&self) -> bool {
        self.top.z >= self.bot.z
    }

    /// Intersection of the infinite lines through `self` and `other`.
    ///
    /// Returns `None` for parallel or degenerate edges.
    pub fn line_intersection(&self, other: &Edge) -> Option<(f64, f64)> {
        let (p1x, p1y) = (self.bot.x as f64, self.bot.y as f64);
        let d1x = self.top.x as f64 - p1x;
        let d1y = self.top.y as f64 - p1y;
        let d2x = other.top.x as f64 - other.bot.x as f64;
        let d2y = other.top.y as f64 - other.bot.y as f64;

        let denom = d1x * d2y - d1y * d2x;
        if denom.abs() < f64::EPSILON {
            return None;
        }

        let ox = other.bot.x as f64 - p1x;
        let oy = other.bot.y as f64 - p1y;
        let t = (ox * d2y - oy * d2x) / denom;

        Some((p1x + t * d1x, p1y + t * d1y))
    }
}

/// Linearly interpolates between `a` and `b`.
#[inline]
pub(crate) fn lerp<F: Float>(a: F, b: F, t: F) -> F {
    a + (b - a) * t
}
