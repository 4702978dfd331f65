#[macro_use]
extern crate approx;
extern crate nalgebra as na;

#[path = "geometry/ball_ball_contact.rs"]
mod ball_ball_contact;
#[path = "geometry/capsule_capsule_contact.rs"]
mod capsule_capsule_contact;
#[path = "geometry/cuboid_cuboid_epa.rs"]
mod cuboid_cuboid_epa;
#[path = "geometry/cuboid_triangle_distance.rs"]
mod cuboid_triangle_distance;
#[path = "geometry/cylinder_cone_contact.rs"]
mod cylinder_cone_contact;
#[path = "geometry/query_properties.rs"]
mod query_properties;
