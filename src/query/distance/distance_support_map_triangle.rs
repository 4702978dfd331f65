use crate::math::{Isometry, Point, Real};
use crate::query::details;
use crate::shape::{SupportMap, Triangle};

/// Distance between a support-mapped shape and a triangle given by its three vertices,
/// expressed in world-space.
pub fn distance_support_map_triangle<G>(
    pos1: &Isometry<Real>,
    g1: &G,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> Option<Real>
where
    G: ?Sized + SupportMap,
{
    let tri = Triangle::new(*a, *b, *c);
    details::distance_support_map_support_map(&pos1.inverse(), g1, &tri)
}

/// Distance between a support-mapped shape and a transformed triangle.
///
/// The triangle vertices are expressed in the local-space of the triangle's pose `pos2`.
pub fn distance_support_map_triangle_with_transform<G>(
    pos1: &Isometry<Real>,
    g1: &G,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    pos2: &Isometry<Real>,
) -> Option<Real>
where
    G: ?Sized + SupportMap,
{
    let tri = Triangle::new(*a, *b, *c);
    details::distance_support_map_support_map(&pos1.inv_mul(pos2), g1, &tri)
}
