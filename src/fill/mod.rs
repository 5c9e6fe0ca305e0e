//! Z values for points synthesized at edge-edge intersections.
//!
//! A clip engine calls a [`ZFillCallback`] once per intersection point it
//! creates. [`ZFillType`] selects which strategy that callback runs:
//!
//! - interpolation of the edges' endpoint Zs ([`interpolate`])
//! - selection of an existing endpoint Z ([`extremes`])
//! - packing of endpoint identities into one 64-bit value ([`packed`],
//!   laid out as described in [`codec`])
//!
//! For [`ZFillType::BothUInt32`] the packed halves come out in sweep order,
//! so the clip result must be passed through [`fix_pairs_paths`] or
//! [`fix_pairs_tree`] (or the [`ZFill`] session methods that wrap them).
//!
//! # Example
//!
//! ```
//! use zfill::fill::codec::{PackedLayout, PairU32};
//! use zfill::{ClipType, IntPoint, ZFill, ZFillType};
//!
//! let session = ZFill::new(ZFillType::BothUInt32, ClipType::Union);
//! let z = PairU32 { hi: 7, lo: 9 }.encode();
//!
//! // A CCW diamond whose top corner came from an intersection.
//! let mut result = vec![vec![
//!     IntPoint::new(5, 0, 1),
//!     IntPoint::new(10, 5, 2),
//!     IntPoint::new(5, 10, z),
//!     IntPoint::new(0, 5, 3),
//! ]];
//!
//! session.postprocess_paths(&mut result);
//! assert_eq!(PairU32::decode(result[0][2].z), PairU32 { hi: 9, lo: 7 });
//! ```

pub mod codec;
pub mod extremes;
pub mod interpolate;
pub mod packed;

mod fix;
mod select;

pub use fix::{
    fix_pair_order, fix_pairs_path, fix_pairs_paths, fix_pairs_tree, is_local_extremum,
    needs_swap,
};
pub use select::{ZFill, ZFillCallback, ZFillType};
