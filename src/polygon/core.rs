//! Core contour types and orientation.

use crate::primitives::IntPoint;
use strum::{Display, EnumIter, EnumString};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed contour. The last point connects back to the first.
pub type Path = Vec<IntPoint>;

/// A flat collection of contours, as returned by a clip call.
pub type Paths = Vec<Path>;

/// The boolean operation a clip call performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClipType {
    Intersection,
    Union,
    Difference,
    Xor,
}

impl ClipType {
    /// True for the two operations whose pair order the corrector inverts.
    #[inline]
    pub fn inverts_pairs(self) -> bool {
        matches!(self, ClipType::Intersection | ClipType::Difference)
    }
}

/// Twice the signed area of a contour, using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding. Computed in `i128`
/// so full-range engine coordinates cannot overflow.
pub fn path_signed_area2(path: &[IntPoint]) -> i128 {
    if path.len() < 3 {
        return 0;
    }

    let n = path.len();
    (0..n)
        .map(|i| {
            let a = path[i];
            let b = path[(i + 1) % n];
            a.x as i128 * b.y as i128 - b.x as i128 * a.y as i128
        })
        .sum()
}

/// Returns the contour's orientation: `true` for CCW (or zero area).
///
/// In clip results an outer contour is CCW and a hole is CW, so a contour
/// with `orientation == false` is treated as a hole.
#[inline]
pub fn orientation(path: &[IntPoint]) -> bool {
    path_signed_area2(path) >= 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn square_ccw() -> Path {
        vec![
            IntPoint::xy(0, 0),
            IntPoint::xy(10, 0),
            IntPoint::xy(10, 10),
            IntPoint::xy(0, 10),
        ]
    }

    #[test]
    fn test_area_ccw() {
        assert_eq!(path_signed_area2(&square_ccw()), 200);
        assert!(orientation(&square_ccw()));
    }

    #[test]
    fn test_area_cw() {
        let mut sq = square_ccw();
        sq.reverse();
        assert_eq!(path_signed_area2(&sq), -200);
        assert!(!orientation(&sq));
    }

    #[test]
    fn test_area_degenerate() {
        let line = vec![IntPoint::xy(0, 0), IntPoint::xy(5, 5)];
        assert_eq!(path_signed_area2(&line), 0);
        assert!(orientation(&line));
    }

    #[test]
    fn test_area_large_coordinates() {
        let big = 1_i64 << 40;
        let sq = vec![
            IntPoint::xy(-big, -big),
            IntPoint::xy(big, -big),
            IntPoint::xy(big, big),
            IntPoint::xy(-big, big),
        ];
        assert_eq!(path_signed_area2(&sq), 8 * (big as i128) * (big as i128));
    }

    #[test]
    fn test_clip_type_names() {
        assert_eq!(ClipType::Xor.to_string(), "xor");
        assert_eq!(ClipType::from_str("difference"), Ok(ClipType::Difference));
        assert!(ClipType::from_str("subtract").is_err());
    }

    #[test]
    fn test_inverts_pairs() {
        assert!(ClipType::Intersection.inverts_pairs());
        assert!(ClipType::Difference.inverts_pairs());
        assert!(!ClipType::Union.inverts_pairs());
        assert!(!ClipType::Xor.inverts_pairs());
    }
}
