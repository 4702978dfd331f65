use crate::math::{Isometry, Real};
use crate::query::gjk::{self, GjkStatus, MinkowskiDiff, VoronoiSimplex};
use crate::shape::SupportMap;

/// Distance between support-mapped shapes, in the local-space of the first shape.
///
/// Returns `None` if the shapes overlap.
pub fn distance_support_map_support_map<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
) -> Option<Real>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let shape = MinkowskiDiff::new(*pos12, g1, g2);
    let init_dir = pos12.translation.vector;
    let mut simplex = VoronoiSimplex::new();

    match gjk::evaluate(&shape, init_dir, &mut simplex) {
        // The squared distance is accumulated by the simplex projection; a single
        // square root is taken here.
        GjkStatus::Separated { point1, point2 } => {
            Some(na::distance_squared(&point1, &point2).sqrt()).filter(|dist| dist.is_finite())
        }
        GjkStatus::Enclosing => None,
        GjkStatus::Degenerate => {
            log::debug!("GJK did not converge on a distance query.");
            None
        }
    }
}
