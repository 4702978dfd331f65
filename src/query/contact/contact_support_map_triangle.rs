use crate::math::{Isometry, Point, Real};
use crate::query::{details, Contact};
use crate::shape::{SupportMap, Triangle};

/// Computes one contact between a support-mapped shape and a triangle given by its three
/// vertices, expressed in world-space.
pub fn contact_support_map_triangle<G>(
    pos1: &Isometry<Real>,
    g1: &G,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> Option<Contact>
where
    G: ?Sized + SupportMap,
{
    let tri = Triangle::new(*a, *b, *c);
    let pos12 = pos1.inverse();
    details::contact_support_map_support_map(&pos12, g1, &tri)
        .map(|contact| contact.transformed(pos1))
}

/// Computes one contact between a support-mapped shape and a transformed triangle.
///
/// The triangle vertices are expressed in the local-space of the triangle's pose `pos2`.
pub fn contact_support_map_triangle_with_transform<G>(
    pos1: &Isometry<Real>,
    g1: &G,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    pos2: &Isometry<Real>,
) -> Option<Contact>
where
    G: ?Sized + SupportMap,
{
    let tri = Triangle::new(*a, *b, *c);
    let pos12 = pos1.inv_mul(pos2);
    details::contact_support_map_support_map(&pos12, g1, &tri)
        .map(|contact| contact.transformed(pos1))
}
