use crate::math::{Point, Real};

/// Description of the projection of a point on a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointProjection {
    /// Whether or not the point to project was inside of the shape.
    pub is_inside: bool,
    /// The projection result.
    pub point: Point<Real>,
}

impl PointProjection {
    /// Initializes a new `PointProjection`.
    pub fn new(is_inside: bool, point: Point<Real>) -> Self {
        PointProjection { is_inside, point }
    }

    /// Returns `true` if the original point was inside of the shape or closer to its
    /// projection than `eps`.
    pub fn is_inside_eps(&self, original_pt: &Point<Real>, eps: Real) -> bool {
        self.is_inside || na::distance_squared(original_pt, &self.point) < eps * eps
    }
}

/// Trait of shapes supporting point projection with a description of the projection's location.
pub trait PointQueryWithLocation {
    /// Additional shape-specific projection information.
    type Location;

    /// Projects a point on `self`, and returns the location of the projection on the shape.
    ///
    /// If `solid` is `true` and the point lies inside of the shape, the point itself is
    /// returned as its own projection.
    fn project_local_point_and_get_location(
        &self,
        pt: &Point<Real>,
        solid: bool,
    ) -> (PointProjection, Self::Location);
}
