use crate::math::{Isometry, Point, Real, Vector};
use crate::query::gjk::CSOPoint;
use crate::shape::SupportMap;
use na::Unit;

/// The Minkowski difference of two support-mapped shapes.
///
/// This combines the support functions of two shapes and their relative pose into the
/// support function of the set `{a - b | a ∈ g1, b ∈ g2}`: the set the GJK and EPA
/// solvers actually operate on. All the points it produces are expressed in the
/// local-space of the first shape.
///
/// Both transforms needed to query the second shape (the direction into its frame, the
/// result back into the first shape's frame) are carried by `pos12`, cached at
/// construction so no inversion happens during solver iterations.
#[derive(Copy, Clone)]
pub struct MinkowskiDiff<'a, G1: ?Sized, G2: ?Sized> {
    g1: &'a G1,
    g2: &'a G2,
    pos12: Isometry<Real>,
}

impl<'a, G1, G2> MinkowskiDiff<'a, G1, G2>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    /// Initializes the Minkowski difference of two shapes, with `pos12` the pose of the
    /// second shape in the local-space of the first.
    pub fn new(pos12: Isometry<Real>, g1: &'a G1, g2: &'a G2) -> Self {
        MinkowskiDiff { g1, g2, pos12 }
    }

    /// The pose of the second shape in the local-space of the first.
    #[inline]
    pub fn pos12(&self) -> &Isometry<Real> {
        &self.pos12
    }

    /// Support point of the first shape, in its local-space.
    #[inline]
    pub fn support0(&self, dir: &Vector<Real>) -> Point<Real> {
        self.g1.local_support_point(dir)
    }

    /// Support point of the second shape, expressed in the local-space of the first.
    #[inline]
    pub fn support1(&self, dir: &Vector<Real>) -> Point<Real> {
        self.g2.support_point(&self.pos12, dir)
    }

    /// Support point of the Minkowski difference toward the direction `dir`.
    pub fn support(&self, dir: &Vector<Real>) -> CSOPoint {
        let sp1 = self.g1.local_support_point(dir);
        let sp2 = self.g2.support_point(&self.pos12, &-*dir);

        CSOPoint::new(sp1, sp2)
    }

    /// Support point of the Minkowski difference toward the unit direction `dir`.
    pub fn support_toward(&self, dir: &Unit<Vector<Real>>) -> CSOPoint {
        let sp1 = self.g1.local_support_point_toward(dir);
        let sp2 = self.g2.support_point_toward(&self.pos12, &-*dir);

        CSOPoint::new(sp1, sp2)
    }
}
