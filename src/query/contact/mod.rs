//! Implementation details of the `contact` query.

pub use self::contact::{contact, Contact};
pub use self::contact_support_map_support_map::contact_support_map_support_map;
pub use self::contact_support_map_triangle::{
    contact_support_map_triangle, contact_support_map_triangle_with_transform,
};

mod contact;
mod contact_support_map_support_map;
mod contact_support_map_triangle;
