use na::{Isometry3, Point3};
use riposte3d::query;
use riposte3d::shape::{Ball, Cone, ConvexPolyhedron, Cylinder};

#[test]
fn cylinders_side_overlap() {
    let c = Cylinder::new(1.0, 1.0);
    let m1 = Isometry3::identity();
    let m2 = Isometry3::translation(1.5, 0.0, 0.0);

    let contact = query::contact(&m1, &c, &m2, &c).expect("Penetration not found.");
    assert_relative_eq!(contact.depth, 0.5, epsilon = 1.0e-4);
    assert_relative_eq!(contact.normal.x.abs(), 1.0, epsilon = 1.0e-4);
}

#[test]
fn cone_ball_above_apex() {
    let cone = Cone::new(1.0, 1.0);
    let ball = Ball::new(0.5);
    let m1 = Isometry3::identity();
    let m2 = Isometry3::translation(0.0, 2.0, 0.0);

    let dist = query::distance(&m1, &cone, &m2, &ball).expect("The shapes should be separated.");
    assert_relative_eq!(dist, 0.5, epsilon = 1.0e-5);
}

#[test]
fn convex_polyhedron_ball_distance() {
    let pts = vec![
        Point3::new(-1.0, -1.0, -1.0),
        Point3::new(1.0, -1.0, -1.0),
        Point3::new(-1.0, 1.0, -1.0),
        Point3::new(1.0, 1.0, -1.0),
        Point3::new(-1.0, -1.0, 1.0),
        Point3::new(1.0, -1.0, 1.0),
        Point3::new(-1.0, 1.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
    ];
    let convex = ConvexPolyhedron::from_convex_points(pts).unwrap();
    let ball = Ball::new(1.0);
    let m1 = Isometry3::identity();
    let m2 = Isometry3::translation(3.0, 0.0, 0.0);

    let dist = query::distance(&m1, &convex, &m2, &ball).expect("The shapes should be separated.");
    assert_relative_eq!(dist, 1.0, epsilon = 1.0e-5);

    let m2 = Isometry3::translation(1.5, 0.0, 0.0);
    let contact = query::contact(&m1, &convex, &m2, &ball).expect("Penetration not found.");
    assert_relative_eq!(contact.depth, 0.5, epsilon = 1.0e-4);
}
