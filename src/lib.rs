//! zfill - Z values for integer polygon clipping
//!
//! A polygon clipper computes X and Y for every output point, including the
//! new points it creates where edges cross. This crate supplies the third
//! channel: strategies that give those points a Z derived from the crossing
//! edges, and a correction pass that keeps packed edge-pair Zs in a
//! consistent order across the finished result. X and Y are never changed.

pub mod error;
pub mod fill;
pub mod polygon;
pub mod primitives;

pub use error::ZFillError;
pub use fill::{ZFill, ZFillCallback, ZFillType};
pub use polygon::{ClipType, ExPolygon, Path, Paths, PolyTree};
pub use primitives::{Edge, IntPoint};
