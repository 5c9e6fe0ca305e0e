//! Strategy selection and the per-clip-call Z-fill session.

use super::{extremes, fix, interpolate, packed};
use crate::error::ZFillError;
use crate::polygon::{ClipType, Path, PolyTree};
use crate::primitives::{Edge, IntPoint};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which strategy computes Z for intersection points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZFillType {
    /// No callback; the engine leaves Z at its default.
    #[default]
    None,
    Mark,
    Max,
    Min,
    Greater,
    Lesser,
    First,
    Second,
    InterpolateMean,
    InterpolateWeighted,
    InterpolateInverseWeighted,
    TwoInterpolate,
    BothMax,
    BothMin,
    #[strum(serialize = "both_uint32")]
    #[cfg_attr(feature = "serde", serde(rename = "both_uint32"))]
    BothUInt32,
    #[strum(serialize = "both_uint31_flags")]
    #[cfg_attr(feature = "serde", serde(rename = "both_uint31_flags"))]
    BothUInt31Flags,
    #[strum(serialize = "all_uint16")]
    #[cfg_attr(feature = "serde", serde(rename = "all_uint16"))]
    AllUInt16,
    #[strum(serialize = "both_float32")]
    #[cfg_attr(feature = "serde", serde(rename = "both_float32"))]
    BothFloat32,
    SecondOpinion,
}

impl ZFillType {
    /// Looks up a fill type by its snake_case name.
    pub fn from_name(name: &str) -> Result<Self, ZFillError> {
        Self::from_str(name).map_err(|_| ZFillError::UnknownFillType(name.to_owned()))
    }

    /// True if results need [`fix_pairs_paths`](super::fix_pairs_paths) or
    /// [`fix_pairs_tree`](super::fix_pairs_tree) after the clip.
    #[inline]
    pub fn needs_pair_fix(self) -> bool {
        self == ZFillType::BothUInt32
    }

    /// Computes Z for an intersection of `e1` and `e2` at `pt`.
    ///
    /// Returns `Ok(None)` for [`ZFillType::None`].
    pub fn compute(self, e1: &Edge, e2: &Edge, pt: IntPoint) -> Result<Option<i64>, ZFillError> {
        use ZFillType::*;

        let z = match self {
            None => return Ok(Option::None),
            Mark => interpolate::mark(e1, e2, pt),
            Max => extremes::max(e1, e2, pt),
            Min => extremes::min(e1, e2, pt),
            Greater => extremes::greater(e1, e2, pt),
            Lesser => extremes::lesser(e1, e2, pt),
            First => extremes::first(e1, e2, pt),
            Second => extremes::second(e1, e2, pt),
            InterpolateMean => interpolate::mean(e1, e2, pt),
            InterpolateWeighted => interpolate::weighted_mean(e1, e2, pt),
            InterpolateInverseWeighted => interpolate::inverse_weighted_mean(e1, e2, pt),
            TwoInterpolate => interpolate::two_interpolate(e1, e2, pt),
            BothMax => extremes::both_max(e1, e2, pt),
            BothMin => extremes::both_min(e1, e2, pt),
            BothUInt32 => packed::both_uint32(e1, e2, pt),
            BothUInt31Flags => packed::both_uint31_flags(e1, e2, pt)?,
            AllUInt16 => packed::all_uint16(e1, e2, pt)?,
            BothFloat32 => packed::both_float32(e1, e2, pt),
            SecondOpinion => packed::second_opinion(e1, e2, pt)?,
        };
        Ok(Some(z))
    }
}

/// The per-intersection hook a clip engine calls during its sweep.
///
/// Called once for every point the engine synthesizes where two edges
/// cross, with `pt.x`/`pt.y` already fixed. An error must abort the clip.
pub trait ZFillCallback {
    fn fill_z(
        &self,
        e1bot: &IntPoint,
        e1top: &IntPoint,
        e2bot: &IntPoint,
        e2top: &IntPoint,
        pt: &mut IntPoint,
    ) -> Result<(), ZFillError>;
}

impl<F> ZFillCallback for F
where
    F: Fn(&IntPoint, &IntPoint, &IntPoint, &IntPoint, &mut IntPoint) -> Result<(), ZFillError>,
{
    fn fill_z(
        &self,
        e1bot: &IntPoint,
        e1top: &IntPoint,
        e2bot: &IntPoint,
        e2top: &IntPoint,
        pt: &mut IntPoint,
    ) -> Result<(), ZFillError> {
        self(e1bot, e1top, e2bot, e2top, pt)
    }
}

impl ZFillCallback for ZFillType {
    fn fill_z(
        &self,
        e1bot: &IntPoint,
        e1top: &IntPoint,
        e2bot: &IntPoint,
        e2top: &IntPoint,
        pt: &mut IntPoint,
    ) -> Result<(), ZFillError> {
        let e1 = Edge::new(*e1bot, *e1top);
        let e2 = Edge::new(*e2bot, *e2top);
        if let Some(z) = self.compute(&e1, &e2, *pt)? {
            pt.z = z;
        }
        Ok(())
    }
}

/// Z-fill configuration for a single clip call.
///
/// Build one per call, hand [`ZFill::callback`] to the engine, then pass the
/// engine's result through [`ZFill::postprocess_paths`] or
/// [`ZFill::postprocess_tree`].
///
/// # Example
///
/// ```
/// use zfill::{ClipType, IntPoint, ZFill, ZFillCallback, ZFillType};
///
/// let session = ZFill::new(ZFillType::BothUInt32, ClipType::Union);
/// let callback = session.callback().unwrap();
///
/// let mut pt = IntPoint::xy(5, 5);
/// callback
///     .fill_z(
///         &IntPoint::new(0, 10, 7),
///         &IntPoint::new(10, 0, 6),
///         &IntPoint::new(10, 10, 9),
///         &IntPoint::new(0, 0, 8),
///         &mut pt,
///     )
///     .unwrap();
/// assert_eq!(pt.z, (7 << 32) + 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZFill {
    fill_type: ZFillType,
    clip_type: ClipType,
}

impl ZFill {
    /// Creates the configuration for one clip call.
    pub fn new(fill_type: ZFillType, clip_type: ClipType) -> Self {
        Self {
            fill_type,
            clip_type,
        }
    }

    /// The strategy this call computes Z with.
    #[inline]
    pub fn fill_type(&self) -> ZFillType {
        self.fill_type
    }

    /// The boolean operation this call performs.
    #[inline]
    pub fn clip_type(&self) -> ClipType {
        self.clip_type
    }

    /// The callback to install on the engine, or `None` to disable Z fill.
    pub fn callback(&self) -> Option<&dyn ZFillCallback> {
        match self.fill_type {
            ZFillType::None => None,
            _ => Some(self),
        }
    }

    /// Applies pair-order correction to a flat result when the fill type
    /// requires it. Returns the number of points swapped.
    pub fn postprocess_paths(&self, paths: &mut [Path]) -> usize {
        if !self.fill_type.needs_pair_fix() {
            return 0;
        }
        fix::fix_pairs_paths(paths, self.clip_type)
    }

    /// Applies pair-order correction to a tree result when the fill type
    /// requires it. Returns the number of points swapped.
    pub fn postprocess_tree(&self, tree: &mut PolyTree) -> usize {
        if !self.fill_type.needs_pair_fix() {
            return 0;
        }
        fix::fix_pairs_tree(tree, self.clip_type)
    }
}

impl ZFillCallback for ZFill {
    fn fill_z(
        &self,
        e1bot: &IntPoint,
        e1top: &IntPoint,
        e2bot: &IntPoint,
        e2top: &IntPoint,
        pt: &mut IntPoint,
    ) -> Result<(), ZFillError> {
        self.fill_type.fill_z(e1bot, e1top, e2bot, e2top, pt)
    }
}
