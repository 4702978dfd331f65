//! The Gilbert-Johnson-Keerthi distance algorithm.

use crate::math::{Point, Real, Vector, DIM};
use crate::query::gjk::{MinkowskiDiff, VoronoiSimplex};
use crate::shape::SupportMap;
use na::Unit;
use num::Bounded;

/// Results of the GJK algorithm.
///
/// All the points are expressed in the local-space of the first shape.
#[derive(Clone, Debug, PartialEq)]
pub enum GjkStatus {
    /// The origin of the Minkowski difference is enclosed by the simplex: the shapes
    /// overlap. Penetration information must be obtained from the EPA algorithm, seeded
    /// with the terminal simplex.
    Enclosing,
    /// The shapes are separated.
    Separated {
        /// The closest point on the first shape.
        point1: Point<Real>,
        /// The closest point on the second shape, in the local-space of the first shape.
        point2: Point<Real>,
    },
    /// The algorithm failed to converge or ran on degenerate geometry. No answer can be
    /// given for this query.
    Degenerate,
}

/// The maximum number of iterations of the GJK algorithm.
///
/// A query exceeding this bound is reported as [`GjkStatus::Degenerate`].
pub const MAX_ITER: usize = 128;

/// The absolute tolerance below which the distance between the origin and the simplex is
/// considered to be zero.
pub const ABS_TOL: Real = 1.0e-6;

/// The relative tolerance used to detect the convergence of the distance bounds.
pub const REL_TOL: Real = 1.0e-6;

/// The tolerance used for identifying two support points as one.
///
/// Compared against squared distances.
pub fn eps_tol() -> Real {
    crate::math::DEFAULT_EPSILON * 10.0
}

/// Runs the GJK algorithm on the Minkowski difference of two shapes.
///
/// The simplex is seeded with the support point toward `-init_dir` (`init_dir` is only a
/// search hint: it changes the iteration count, never the result). On return, `simplex`
/// holds the terminal simplex: rank 4 enclosing the origin for
/// [`GjkStatus::Enclosing`], the closest feature of the Minkowski difference for
/// [`GjkStatus::Separated`].
pub fn evaluate<G1, G2>(
    shape: &MinkowskiDiff<G1, G2>,
    init_dir: Vector<Real>,
    simplex: &mut VoronoiSimplex,
) -> GjkStatus
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let guess = Unit::try_new(init_dir, crate::math::DEFAULT_EPSILON).unwrap_or(Vector::x_axis());
    simplex.reset(shape.support_toward(&-guess));

    let mut old_max_bound = Real::max_value();
    let mut niter = 0;

    loop {
        let proj = simplex.project_origin_and_reduce();

        if simplex.dimension() == DIM {
            // The origin is strictly inside of the tetrahedron.
            return GjkStatus::Enclosing;
        }

        let (dir, max_bound) = match Unit::try_new_and_get(-proj.coords, ABS_TOL) {
            Some(res) => res,
            // The origin lies on the simplex.
            None => return GjkStatus::Enclosing,
        };

        if max_bound >= old_max_bound {
            // Upper bound inconsistency: the last point did not bring the simplex any
            // closer to the origin. The previous simplex realizes the distance.
            let (point1, point2) = witness_points(simplex, true);
            return GjkStatus::Separated { point1, point2 };
        }

        let support = shape.support_toward(&dir);
        let min_bound = -dir.dot(&support.point.coords);

        if !min_bound.is_finite() {
            return GjkStatus::Degenerate;
        }

        if max_bound - min_bound <= REL_TOL * max_bound.max(1.0) {
            // The support point cannot take the simplex significantly closer to the
            // origin: the current projection realizes the separation distance.
            let (point1, point2) = witness_points(simplex, false);
            return GjkStatus::Separated { point1, point2 };
        }

        if !simplex.add_point(support) {
            // The same support point was produced twice without reaching convergence.
            return GjkStatus::Degenerate;
        }

        old_max_bound = max_bound;

        niter += 1;
        if niter == MAX_ITER {
            return GjkStatus::Degenerate;
        }
    }
}

/// Reconstructs the witness points from the barycentric coordinates of the simplex.
fn witness_points(simplex: &VoronoiSimplex, prev: bool) -> (Point<Real>, Point<Real>) {
    let mut res = (Point::origin(), Point::origin());

    if prev {
        for i in 0..simplex.prev_dimension() + 1 {
            let coord = simplex.prev_proj_coord(i);
            let point = simplex.prev_point(i);
            res.0 += point.orig1.coords * coord;
            res.1 += point.orig2.coords * coord;
        }
    } else {
        for i in 0..simplex.dimension() + 1 {
            let coord = simplex.proj_coord(i);
            let point = simplex.point(i);
            res.0 += point.orig1.coords * coord;
            res.1 += point.orig2.coords * coord;
        }
    }

    res
}
