//! Strategies that select existing endpoint Zs rather than computing new ones.
//!
//! The two-value strategies ([`greater`], [`lesser`], [`first`], [`second`])
//! treat each edge's bottom Z as that edge's scalar identity.

use super::codec::{PackedLayout, PairU32};
use crate::primitives::{Edge, IntPoint};

/// Largest Z among the four endpoints.
pub fn max(e1: &Edge, e2: &Edge, _pt: IntPoint) -> i64 {
    e1.max_z().max(e2.max_z())
}

/// Smallest Z among the four endpoints.
pub fn min(e1: &Edge, e2: &Edge, _pt: IntPoint) -> i64 {
    e1.min_z().min(e2.min_z())
}

/// Larger of the two edges' identities.
pub fn greater(e1: &Edge, e2: &Edge, _pt: IntPoint) -> i64 {
    e1.bot.z.max(e2.bot.z)
}

/// Smaller of the two edges' identities.
pub fn lesser(e1: &Edge, e2: &Edge, _pt: IntPoint) -> i64 {
    e1.bot.z.min(e2.bot.z)
}

/// Edge 1's identity, unchanged.
pub fn first(e1: &Edge, _e2: &Edge, _pt: IntPoint) -> i64 {
    e1.bot.z
}

/// Edge 2's identity, unchanged.
pub fn second(_e1: &Edge, e2: &Edge, _pt: IntPoint) -> i64 {
    e2.bot.z
}

/// Per-edge maximum Z, packed as a [`PairU32`] with edge 1 high.
///
/// When Z holds indices into an input point array, the two maxima usually
/// identify all four endpoints, since each edge's other endpoint is the
/// adjacent index.
pub fn both_max(e1: &Edge, e2: &Edge, _pt: IntPoint) -> i64 {
    PairU32 {
        hi: e1.max_z() as u32,
        lo: e2.max_z() as u32,
    }
    .encode()
}

/// Per-edge minimum Z, packed as a [`PairU32`] with edge 1 high.
///
/// A zero half is ambiguous between an input Z of 0 and an unset Z, so
/// 1-based indices are preferable with this strategy.
pub fn both_min(e1: &Edge, e2: &Edge, _pt: IntPoint) -> i64 {
    PairU32 {
        hi: e1.min_z() as u32,
        lo: e2.min_z() as u32,
    }
    .encode()
}
