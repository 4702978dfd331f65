use na::{Isometry3, Point3, Vector3};
use riposte3d::query::details;
use riposte3d::shape::Cuboid;

#[test]
fn cuboid_triangle_miss() {
    let c = Cuboid::new(Vector3::new(1.0, 1.0, 1.0));
    let m1 = Isometry3::identity();

    let a = Point3::new(2.0, 0.0, 0.0);
    let b = Point3::new(3.0, 0.0, 0.0);
    let p3 = Point3::new(2.0, 1.0, 0.0);

    let dist = details::distance_support_map_triangle(&m1, &c, &a, &b, &p3)
        .expect("The shapes should be separated.");
    assert_relative_eq!(dist, 1.0, epsilon = 1.0e-6);

    assert!(details::contact_support_map_triangle(&m1, &c, &a, &b, &p3).is_none());
}

#[test]
fn cuboid_triangle_hit_with_transform() {
    let c = Cuboid::new(Vector3::new(1.0, 1.0, 1.0));
    let m1 = Isometry3::identity();

    // A triangle crossing the cuboid's +x face once transformed.
    let a = Point3::new(0.0, -1.0, -1.0);
    let b = Point3::new(0.0, 1.0, -1.0);
    let p3 = Point3::new(0.0, 0.0, 2.0);
    let m2 = Isometry3::translation(0.5, 0.0, 0.0);

    let contact =
        details::contact_support_map_triangle_with_transform(&m1, &c, &a, &b, &p3, &m2)
            .expect("Penetration not found.");
    assert_relative_eq!(contact.depth, 0.5, epsilon = 1.0e-4);
    assert_relative_eq!(contact.normal.x.abs(), 1.0, epsilon = 1.0e-4);
}
