//! The GJK algorithm for convex shape separation and distance computation.

pub use self::cso_point::CSOPoint;
pub use self::gjk::{evaluate, eps_tol, GjkStatus, ABS_TOL, MAX_ITER, REL_TOL};
pub use self::minkowski_diff::MinkowskiDiff;
pub use self::voronoi_simplex3::VoronoiSimplex;

mod cso_point;
mod gjk;
mod minkowski_diff;
mod voronoi_simplex3;
