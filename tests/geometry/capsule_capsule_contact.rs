use na::Isometry3;
use riposte3d::query;
use riposte3d::shape::Capsule;

#[test]
fn capsules_parallel_overlap() {
    // Two capsules of radius 1.0 and length 2.0 aligned with the y axis, one axis
    // unit apart: the overlap is resolved radially.
    let c = Capsule::new_y(1.0, 1.0);
    let m1 = Isometry3::identity();
    let m2 = Isometry3::translation(1.0, 0.0, 0.0);

    let contact = query::contact(&m1, &c, &m2, &c).expect("Penetration not found.");
    assert_relative_eq!(contact.depth, 1.0, epsilon = 1.0e-4);
    assert_relative_eq!(contact.normal.x.abs(), 1.0, epsilon = 1.0e-4);

    assert!(query::distance(&m1, &c, &m2, &c).is_none());
}

#[test]
fn capsules_apart() {
    let c = Capsule::new_y(1.0, 1.0);
    let m1 = Isometry3::identity();
    let m2 = Isometry3::translation(3.0, 0.0, 0.0);

    let dist = query::distance(&m1, &c, &m2, &c).expect("The capsules should be separated.");
    assert_relative_eq!(dist, 1.0, epsilon = 1.0e-5);
}
