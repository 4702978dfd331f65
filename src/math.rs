//! Aliases for mathematical types.

/// The scalar type used throughout this crate.
pub type Real = f64;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The point type.
pub type Point<N> = na::Point3<N>;

/// The vector type.
pub type Vector<N> = na::Vector3<N>;

/// The unit vector type.
pub type UnitVector<N> = na::UnitVector3<N>;

/// The matrix type.
pub type Matrix<N> = na::Matrix3<N>;

/// The transformation matrix type: a rotation followed by a translation.
pub type Isometry<N> = na::Isometry3<N>;

/// The rotation type.
pub type Rotation<N> = na::UnitQuaternion<N>;

/// The translation type.
pub type Translation<N> = na::Translation3<N>;
