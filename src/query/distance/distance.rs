use crate::math::{Isometry, Real};
use crate::query::details;
use crate::shape::SupportMap;

/// Computes the minimum distance separating two shapes.
///
/// Returns `None` if the shapes overlap, or if the query ran on geometry too degenerate
/// to produce an answer.
pub fn distance<G1, G2>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
) -> Option<Real>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    details::distance_support_map_support_map(&pos1.inv_mul(pos2), g1, g2)
}
