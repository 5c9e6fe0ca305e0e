//! Interpolating strategies.
//!
//! Each edge gives its own estimate of Z at the intersection by linear
//! interpolation along its length. The strategies differ in how the two
//! estimates are combined.

use super::codec::{PackedLayout, PairU32};
use crate::primitives::{Edge, IntPoint};
use num_traits::ToPrimitive;

/// Sentinel written by [`mark`].
pub const Z_MARK: i64 = -1;

/// Rounds to the nearest integer Z, saturating at the `i64` bounds.
#[inline]
pub(crate) fn round_z(v: f64) -> i64 {
    v.round()
        .to_i64()
        .unwrap_or(if v < 0.0 { i64::MIN } else { i64::MAX })
}

/// Flags the point as an intersection without preserving any data.
pub fn mark(_e1: &Edge, _e2: &Edge, _pt: IntPoint) -> i64 {
    Z_MARK
}

/// Average of the two edges' interpolated Zs.
///
/// Using both estimates rather than one keeps the result sensible when the
/// edges are not coplanar: the point sits halfway between the two planes.
pub fn mean(e1: &Edge, e2: &Edge, pt: IntPoint) -> i64 {
    round_z((e1.z_at(pt) + e2.z_at(pt)) / 2.0)
}

/// Interpolated Zs weighted by edge length; the longer edge dominates.
pub fn weighted_mean(e1: &Edge, e2: &Edge, pt: IntPoint) -> i64 {
    let (d1, d2) = (e1.length(), e2.length());
    if d1 + d2 <= 0.0 {
        return mean(e1, e2, pt);
    }
    round_z((e1.z_at(pt) * d1 + e2.z_at(pt) * d2) / (d1 + d2))
}

/// Interpolated Zs weighted by the other edge's length; the shorter edge
/// dominates.
pub fn inverse_weighted_mean(e1: &Edge, e2: &Edge, pt: IntPoint) -> i64 {
    let (d1, d2) = (e1.length(), e2.length());
    if d1 + d2 <= 0.0 {
        return mean(e1, e2, pt);
    }
    round_z((e1.z_at(pt) * d2 + e2.z_at(pt) * d1) / (d1 + d2))
}

/// Both interpolated Zs, truncated to 32 bits each, packed as a
/// [`PairU32`] with edge 1 in the high half.
pub fn two_interpolate(e1: &Edge, e2: &Edge, pt: IntPoint) -> i64 {
    PairU32 {
        hi: round_z(e1.z_at(pt)) as u32,
        lo: round_z(e2.z_at(pt)) as u32,
    }
    .encode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn edge(b: (i64, i64, i64), t: (i64, i64, i64)) -> Edge {
        Edge::new(IntPoint::new(b.0, b.1, b.2), IntPoint::new(t.0, t.1, t.2))
    }

    /// Diagonals of a 10x10 square crossing at (5, 5).
    fn crossing(z1: (i64, i64), z2: (i64, i64)) -> (Edge, Edge, IntPoint) {
        (
            edge((0, 0, z1.0), (10, 10, z1.1)),
            edge((10, 0, z2.0), (0, 10, z2.1)),
            IntPoint::xy(5, 5),
        )
    }

    #[test]
    fn test_mark() {
        let (e1, e2, pt) = crossing((1, 2), (3, 4));
        assert_eq!(mark(&e1, &e2, pt), -1);
    }

    #[test]
    fn test_mean() {
        let (e1, e2, pt) = crossing((0, 100), (200, 400));
        // 50 and 300 at the midpoint.
        assert_eq!(mean(&e1, &e2, pt), 175);
    }

    #[test]
    fn test_mean_not_midpoint() {
        let e1 = edge((0, 0, 0), (10, 0, 100));
        let e2 = edge((2, -5, 10), (2, 5, 10));
        assert_eq!(mean(&e1, &e2, IntPoint::xy(2, 0)), 15);
    }

    #[test]
    fn test_weighted_favors_longer_edge() {
        let e1 = edge((0, 0, 0), (100, 0, 0));
        let e2 = edge((50, -1, 1000), (50, 1, 1000));
        let pt = IntPoint::xy(50, 0);
        let w = weighted_mean(&e1, &e2, pt);
        let iw = inverse_weighted_mean(&e1, &e2, pt);
        assert_eq!(w, 20);
        assert_eq!(iw, 980);
        assert!(w < mean(&e1, &e2, pt));
        assert!(iw > mean(&e1, &e2, pt));
    }

    #[test]
    fn test_weighted_degenerate_edges() {
        let e1 = edge((1, 1, 10), (1, 1, 10));
        let e2 = edge((1, 1, 30), (1, 1, 30));
        let pt = IntPoint::xy(1, 1);
        assert_eq!(weighted_mean(&e1, &e2, pt), 20);
        assert_eq!(inverse_weighted_mean(&e1, &e2, pt), 20);
    }

    #[test]
    fn test_two_interpolate() {
        let (e1, e2, pt) = crossing((0, 100), (200, 400));
        let pair = PairU32::decode(two_interpolate(&e1, &e2, pt));
        assert_eq!(pair, PairU32 { hi: 50, lo: 300 });
    }

    #[test]
    fn test_round_z_saturates() {
        assert_eq!(round_z(1e300), i64::MAX);
        assert_eq!(round_z(-1e300), i64::MIN);
        assert_eq!(round_z(2.5), 3);
    }

    proptest! {
        #[test]
        fn prop_interpolation_within_endpoint_bounds(
            coords in prop::array::uniform8(-10_000i64..10_000),
            zs in prop::array::uniform4(-1_000_000i64..1_000_000),
            px in -10_000i64..10_000,
            py in -10_000i64..10_000,
        ) {
            let e1 = edge((coords[0], coords[1], zs[0]), (coords[2], coords[3], zs[1]));
            let e2 = edge((coords[4], coords[5], zs[2]), (coords[6], coords[7], zs[3]));
            let pt = IntPoint::xy(px, py);
            let lo = *zs.iter().min().unwrap();
            let hi = *zs.iter().max().unwrap();
            for z in [
                mean(&e1, &e2, pt),
                weighted_mean(&e1, &e2, pt),
                inverse_weighted_mean(&e1, &e2, pt),
            ] {
                prop_assert!(lo <= z && z <= hi, "{} not in [{}, {}]", z, lo, hi);
            }
        }
    }
}
