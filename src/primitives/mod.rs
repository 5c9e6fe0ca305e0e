//! Integer point and edge types shared with the clip engine.

mod edge;
mod int_point;

pub use edge::Edge;
pub use int_point::IntPoint;
