//! Clip-result containers: flat contour lists and nested contour trees.

mod core;
mod tree;

pub use self::core::{orientation, path_signed_area2, ClipType, Path, Paths};
pub use self::tree::{ExPolygon, NodeId, PolyNode, PolyTree};
