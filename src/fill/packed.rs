//! Strategies that preserve endpoint identities in packed layouts.
//!
//! These are meant for Z values that index into external per-point data.
//! Strategies with a width precondition reject out-of-range input with
//! [`ZFillError::RangeViolation`] instead of truncating it.

use super::codec::{PackedLayout, PairF32, PairU31Flags, PairU32, QuadU16, SecondOpinion};
use super::interpolate::round_z;
use crate::error::{check_range, ZFillError};
use crate::primitives::{Edge, IntPoint};

/// Both bottom Zs as 32-bit values, edge 1 high.
///
/// Results with a nonzero high half need
/// [`fix_pairs_paths`](super::fix_pairs_paths) or
/// [`fix_pairs_tree`](super::fix_pairs_tree) after the clip to make the
/// halves follow a consistent edge order.
pub fn both_uint32(e1: &Edge, e2: &Edge, _pt: IntPoint) -> i64 {
    // The bottom is the higher-y end of the edge (x breaks ties), which is
    // the most stable choice across the sweep.
    PairU32 {
        hi: e1.bot.z as u32,
        lo: e2.bot.z as u32,
    }
    .encode()
}

/// Both bottom Zs as 31-bit values, each with a flag telling whether that
/// edge's top Z is at least its bottom Z.
///
/// For index-valued Z the flag says which way to look for the edge's
/// other endpoint.
pub fn both_uint31_flags(e1: &Edge, e2: &Edge, _pt: IntPoint) -> Result<i64, ZFillError> {
    check_range("both_uint31_flags", 31, &[e1.bot.z, e2.bot.z])?;
    Ok(PairU31Flags {
        hi: e1.bot.z as u32,
        hi_flag: e1.z_ascends(),
        lo: e2.bot.z as u32,
        lo_flag: e2.z_ascends(),
    }
    .encode())
}

/// All four endpoint Zs at 16 bits each.
pub fn all_uint16(e1: &Edge, e2: &Edge, _pt: IntPoint) -> Result<i64, ZFillError> {
    check_range("all_uint16", 16, &[e1.bot.z, e1.top.z, e2.bot.z, e2.top.z])?;
    Ok(QuadU16 {
        e1_bot: e1.bot.z as u16,
        e1_top: e1.top.z as u16,
        e2_bot: e2.bot.z as u16,
        e2_top: e2.top.z as u16,
    }
    .encode())
}

/// Both bottom Zs converted to single precision.
///
/// Exact for magnitudes up to 2^24; beyond that the low bits are lost.
pub fn both_float32(e1: &Edge, e2: &Edge, _pt: IntPoint) -> i64 {
    PairF32 {
        hi: e1.bot.z as f32,
        lo: e2.bot.z as f32,
    }
    .encode()
}

/// Recovers the integer Zs stored by [`both_float32`].
pub fn both_float32_decode(z: i64) -> (i64, i64) {
    let pair = PairF32::decode(z);
    (round_z(pair.hi as f64), round_z(pair.lo as f64))
}

/// Two bottom Zs plus how far the engine's point is from an independently
/// recomputed intersection of the two edges.
pub fn second_opinion(e1: &Edge, e2: &Edge, pt: IntPoint) -> Result<i64, ZFillError> {
    check_range(
        "second_opinion",
        16,
        &[e1.bot.z, e1.top.z, e2.bot.z, e2.top.z],
    )?;

    let (dx, dy, saturated) = match e1.line_intersection(e2) {
        Some((x, y)) => {
            let (dx, cx) = clamp_delta(x - pt.x as f64);
            let (dy, cy) = clamp_delta(y - pt.y as f64);
            (dx, dy, cx || cy)
        }
        None => (0, 0, true),
    };

    Ok(SecondOpinion {
        flag: e2.z_ascends(),
        e1_bot: e1.bot.z as u32,
        e2_bot: e2.bot.z as u32,
        saturated,
        dx,
        dy,
    }
    .encode())
}

/// Rounds a delta into the 10-bit slot, reporting whether it was clamped.
fn clamp_delta(d: f64) -> (i16, bool) {
    let r = round_z(d);
    let lo = SecondOpinion::DELTA_MIN as i64;
    let hi = SecondOpinion::DELTA_MAX as i64;
    (r.clamp(lo, hi) as i16, r < lo || r > hi)
}
