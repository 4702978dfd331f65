use crate::math::{Isometry, Point, Real, UnitVector};
use crate::query::details;
use crate::shape::SupportMap;

/// Geometric description of a contact between two shapes.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Contact {
    /// The contact point: the midpoint of the deepest-penetration witness segment.
    pub point: Point<Real>,
    /// The penetration depth. Always `>= 0`.
    pub depth: Real,
    /// The contact normal, pointing from the second shape into the first one.
    ///
    /// This is the direction along which the first shape has to be translated by
    /// `depth` in order to separate the two shapes.
    pub normal: UnitVector<Real>,
}

impl Contact {
    /// Transforms `self.point` and `self.normal` by `pos`.
    #[inline]
    pub fn transform_by_mut(&mut self, pos: &Isometry<Real>) {
        self.point = pos * self.point;
        self.normal = pos * self.normal;
    }

    /// Returns a new contact equal to `self` transformed by `pos`.
    #[inline]
    pub fn transformed(mut self, pos: &Isometry<Real>) -> Self {
        self.transform_by_mut(pos);
        self
    }
}

/// Computes one pair of contact points between two penetrating shapes.
///
/// Returns `None` if the shapes do not overlap, or if the overlap is so degenerate that
/// no penetration information could be computed. The resulting contact is expressed in
/// world-space.
pub fn contact<G1, G2>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
) -> Option<Contact>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let pos12 = pos1.inv_mul(pos2);
    details::contact_support_map_support_map(&pos12, g1, g2).map(|c| c.transformed(pos1))
}
