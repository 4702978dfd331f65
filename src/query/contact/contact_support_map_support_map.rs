use crate::math::{Isometry, Real};
use crate::query::epa::Epa;
use crate::query::gjk::{self, GjkStatus, MinkowskiDiff, VoronoiSimplex};
use crate::query::Contact;
use crate::shape::SupportMap;

/// Computes one contact between two support-mapped shapes (`Cuboid`, `ConvexPolyhedron`, etc.)
///
/// The contact is expressed in the local-space of the first shape. Returns `None` if the
/// shapes do not overlap.
pub fn contact_support_map_support_map<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
) -> Option<Contact>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let shape = MinkowskiDiff::new(*pos12, g1, g2);
    let init_dir = pos12.translation.vector;
    let mut simplex = VoronoiSimplex::new();

    match gjk::evaluate(&shape, init_dir, &mut simplex) {
        GjkStatus::Enclosing => {
            let mut epa = Epa::new();
            epa.evaluate(&shape, &simplex)
                .penetration()
                // A NaN anywhere in the result aborts the query with a miss.
                .filter(|pen| {
                    pen.depth.is_finite()
                        && pen.point1.coords.iter().all(|x| x.is_finite())
                        && pen.point2.coords.iter().all(|x| x.is_finite())
                })
                .map(|pen| Contact {
                    point: na::center(&pen.point1, &pen.point2),
                    depth: pen.depth,
                    normal: -pen.normal,
                })
        }
        GjkStatus::Separated { .. } => None,
        GjkStatus::Degenerate => {
            log::debug!("GJK did not converge on a contact query.");
            None
        }
    }
}
