//! Non-persistent geometric queries.
//!
//! The two entry points exposed by this module are:
//!
//! * [`contact()`] to compute one pair of contact points between two penetrating shapes,
//!   including the penetration depth and contact normal.
//! * [`distance()`] to compute the minimum separating distance between two shapes.
//!
//! Both operate on any pair of shapes implementing [`crate::shape::SupportMap`], and both are
//! powered by the same two solvers: GJK ([`gjk`]) walks a simplex of the Minkowski difference
//! toward the origin to decide separation, and EPA ([`epa`]) expands a polytope of the
//! Minkowski difference to measure penetration.
//!
//! The functions exported by the `details` submodule are more specific versions of the ones
//! described above, e.g., `contact_support_map_triangle` computes a contact between a shape
//! and a triangle built inline from three points.

pub use self::contact::{contact, Contact};
pub use self::distance::distance;
pub use self::point::{PointProjection, PointQueryWithLocation};

pub mod contact;
pub mod distance;
pub mod epa;
pub mod gjk;
pub mod point;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::contact::*;
    pub use super::distance::*;
}
