//! Point projection on the simplicial shapes.

pub use self::point_query::{PointProjection, PointQueryWithLocation};

mod point_query;
mod point_segment;
mod point_tetrahedron;
mod point_triangle;
