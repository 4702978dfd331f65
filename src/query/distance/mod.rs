//! Implementation details of the `distance` query.

pub use self::distance::distance;
pub use self::distance_support_map_support_map::distance_support_map_support_map;
pub use self::distance_support_map_triangle::{
    distance_support_map_triangle, distance_support_map_triangle_with_transform,
};

mod distance;
mod distance_support_map_support_map;
mod distance_support_map_triangle;
