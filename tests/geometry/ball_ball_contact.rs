use na::Isometry3;
use riposte3d::query;
use riposte3d::shape::Ball;

#[test]
fn balls_apart() {
    let b = Ball::new(1.0);
    let m1 = Isometry3::identity();
    let m2 = Isometry3::translation(3.0, 0.0, 0.0);

    let dist = query::distance(&m1, &b, &m2, &b).expect("The balls should be separated.");
    assert_relative_eq!(dist, 1.0, epsilon = 1.0e-6);

    assert!(query::contact(&m1, &b, &m2, &b).is_none());
}

#[test]
fn balls_touching() {
    let b = Ball::new(1.0);
    let m1 = Isometry3::identity();
    let m2 = Isometry3::translation(2.0, 0.0, 0.0);

    match query::contact(&m1, &b, &m2, &b) {
        Some(contact) => {
            assert!(contact.depth.abs() < 1.0e-4);
            assert!(contact.normal.x.abs() > 0.9);
        }
        None => {
            let dist = query::distance(&m1, &b, &m2, &b).expect("Touching balls are separated.");
            assert!(dist < 1.0e-4);
        }
    }
}

#[test]
fn balls_overlapping() {
    let b = Ball::new(1.0);
    let m1 = Isometry3::identity();
    let m2 = Isometry3::translation(1.5, 0.0, 0.0);

    let contact = query::contact(&m1, &b, &m2, &b).expect("Penetration not found.");
    assert_relative_eq!(contact.depth, 0.5, epsilon = 1.0e-4);
    assert_relative_eq!(contact.normal.x.abs(), 1.0, epsilon = 1.0e-4);
    assert_relative_eq!(contact.point.x, 0.75, epsilon = 1.0e-4);
    assert!(contact.point.y.abs() < 1.0e-4 && contact.point.z.abs() < 1.0e-4);

    // Swapping the shapes flips the normal.
    let flipped = query::contact(&m2, &b, &m1, &b).expect("Penetration not found.");
    assert_relative_eq!(
        flipped.normal.into_inner(),
        -contact.normal.into_inner(),
        epsilon = 1.0e-4
    );

    assert!(query::distance(&m1, &b, &m2, &b).is_none());
}

#[test]
fn balls_overlapping_transformed() {
    // The same overlap, but seen through a common rigid transform.
    let b = Ball::new(1.0);
    let m = Isometry3::new(
        na::Vector3::new(1.0, -2.0, 3.0),
        na::Vector3::new(0.3, 0.8, -0.2),
    );
    let m1 = m * Isometry3::identity();
    let m2 = m * Isometry3::translation(1.5, 0.0, 0.0);

    let contact = query::contact(&m1, &b, &m2, &b).expect("Penetration not found.");
    assert_relative_eq!(contact.depth, 0.5, epsilon = 1.0e-4);

    let expected_point = m * na::Point3::new(0.75, 0.0, 0.0);
    assert_relative_eq!(contact.point, expected_point, epsilon = 1.0e-4);

    let expected_normal = m * -na::Vector3::x_axis();
    assert_relative_eq!(contact.normal.into_inner(), expected_normal.into_inner(), epsilon = 1.0e-4);
}
