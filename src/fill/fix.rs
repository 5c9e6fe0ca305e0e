//! Pair-order correction for packed both-uint32 results.
//!
//! The clip engine does not tell the Z-fill callback which of the two
//! crossing edges ends up "first" along the output contour, so the halves of
//! a packed pair are in sweep order rather than contour order. After the clip
//! the halves are swapped wherever
//! `(point is a local y-extremum) xor (clip is intersection or difference)`.
//!
//! The rule sets no "done" marker: running a pass twice with the same clip
//! type and topology swaps the same points again, undoing the first pass.

use super::codec::{is_pair_candidate, PairU32};
use crate::polygon::{orientation, ClipType, Path, PolyTree};
use crate::primitives::IntPoint;
use tracing::{debug, trace};

/// True if `this` sits above its neighbours.
fn greater_neighbors(prev: IntPoint, this: IntPoint, next: IntPoint, ct: ClipType) -> bool {
    (this.above_or_right_of(prev) && this.y > next.y)
        || (this.y > prev.y && this.above_or_right_of(next) && ct != ClipType::Xor)
}

/// True if `this` sits below its neighbours.
fn lesser_neighbors(prev: IntPoint, this: IntPoint, next: IntPoint, ct: ClipType) -> bool {
    (this.below_or_left_of(prev) && this.y < next.y)
        || (this.y < prev.y && this.below_or_left_of(next) && ct != ClipType::Xor)
}

/// True if `this` is a local y-extremum for the purposes of pair ordering.
#[inline]
pub fn is_local_extremum(prev: IntPoint, this: IntPoint, next: IntPoint, ct: ClipType) -> bool {
    greater_neighbors(prev, this, next, ct) || lesser_neighbors(prev, this, next, ct)
}

/// Decides whether the packed halves at `this` must be swapped.
///
/// Only looks at coordinates; eligibility of `this.z` is checked by
/// [`fix_pair_order`].
#[inline]
pub fn needs_swap(prev: IntPoint, this: IntPoint, next: IntPoint, clip_type: ClipType) -> bool {
    is_local_extremum(prev, this, next, clip_type) != clip_type.inverts_pairs()
}

/// Swaps the packed halves of `this.z` in place when required.
///
/// Points whose `z` is not a pair candidate (plain Z, or pass-through
/// marker set) are left untouched. Returns whether a swap happened.
pub fn fix_pair_order(
    prev: IntPoint,
    this: &mut IntPoint,
    next: IntPoint,
    clip_type: ClipType,
    is_hole: bool,
) -> bool {
    if !is_pair_candidate(this.z) || !needs_swap(prev, *this, next, clip_type) {
        return false;
    }

    let swapped = PairU32::swapped(this.z);
    trace!(
        x = this.x,
        y = this.y,
        hi = (this.z as u64 >> 32) & 0x7FFF_FFFF,
        lo = this.z as u64 & 0x7FFF_FFFF,
        is_hole,
        "swapped z pair"
    );
    this.z = swapped;
    true
}

/// Corrects every eligible point of one closed contour.
///
/// Neighbours wrap around, so the first point's predecessor is the last
/// point. Contours with fewer than three points are skipped. Returns the
/// number of points swapped.
pub fn fix_pairs_path(path: &mut [IntPoint], clip_type: ClipType, is_hole: bool) -> usize {
    let n = path.len();
    if n < 3 {
        return 0;
    }

    let mut swaps = 0;
    for i in 0..n {
        let prev = path[(i + n - 1) % n];
        let next = path[(i + 1) % n];
        if fix_pair_order(prev, &mut path[i], next, clip_type, is_hole) {
            swaps += 1;
        }
    }
    swaps
}

/// Corrects a flat list of contours, taking hole status from each
/// contour's orientation.
pub fn fix_pairs_paths(paths: &mut [Path], clip_type: ClipType) -> usize {
    let swaps: usize = paths
        .iter_mut()
        .map(|path| {
            let is_hole = !orientation(path);
            fix_pairs_path(path, clip_type, is_hole)
        })
        .sum();
    debug!(contours = paths.len(), swaps, %clip_type, "fixed z pairs in paths");
    swaps
}

/// Corrects every contour of a nested tree at any depth, taking hole status
/// from tree level.
pub fn fix_pairs_tree(tree: &mut PolyTree, clip_type: ClipType) -> usize {
    let mut swaps = 0;
    tree.walk_mut(|_, contour, is_hole| {
        swaps += fix_pairs_path(contour, clip_type, is_hole);
    });
    debug!(contours = tree.len(), swaps, %clip_type, "fixed z pairs in tree");
    swaps
}
