//! Shapes supported by riposte.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::cone::Cone;
pub use self::convex_polyhedron::ConvexPolyhedron;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::segment::{Segment, SegmentPointLocation};
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::tetrahedron::{Tetrahedron, TetrahedronPointLocation};
pub use self::triangle::{Triangle, TrianglePointLocation};

mod ball;
mod capsule;
mod cone;
mod convex_polyhedron;
mod cuboid;
mod cylinder;
mod segment;
#[doc(hidden)]
pub mod support_map;
mod tetrahedron;
mod triangle;
