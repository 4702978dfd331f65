use na::{Isometry3, Vector3};
use riposte3d::query;
use riposte3d::shape::Cuboid;

#[test]
#[allow(non_snake_case)]
fn cuboid_cuboid_EPA() {
    let c = Cuboid::new(Vector3::new(2.0, 1.0, 1.0));
    let m1 = Isometry3::translation(3.5, 0.0, 0.0);
    let m2 = Isometry3::identity();

    let res = query::contact(&m1, &c, &m2, &c).expect("Penetration not found.");
    assert_relative_eq!(res.depth, 0.5, epsilon = 1.0e-6);
    assert_relative_eq!(res.normal.into_inner(), *Vector3::x_axis(), epsilon = 1.0e-6);

    let m1 = Isometry3::translation(0.0, 0.2, 0.0);
    let res = query::contact(&m1, &c, &m2, &c).expect("Penetration not found.");
    assert_relative_eq!(res.depth, 1.8, epsilon = 1.0e-6);
    assert_relative_eq!(res.normal.into_inner(), *Vector3::y_axis(), epsilon = 1.0e-6);
}

#[test]
fn cuboid_cuboid_corner_penetration() {
    // Two cubes with side 1.0, overlapping by 0.1 along each axis.
    let c = Cuboid::new(Vector3::new(0.5, 0.5, 0.5));
    let m1 = Isometry3::identity();
    let m2 = Isometry3::translation(0.9, 0.9, 0.9);

    let res = query::contact(&m1, &c, &m2, &c).expect("Penetration not found.");

    // The minimal translational distance is 0.1 along a single axis; the diagonal
    // 0.1 * sqrt(3) resolves the same overlap. Any reported depth in-between must
    // come with a normal that actually separates the cubes.
    assert!(res.depth >= 0.1 - 1.0e-6);
    assert!(res.depth <= 0.1 * 3.0f64.sqrt() + 1.0e-6);

    let separated_m1 = Isometry3::translation(
        res.normal.x * res.depth,
        res.normal.y * res.depth,
        res.normal.z * res.depth,
    ) * m1;

    match query::distance(&separated_m1, &c, &m2, &c) {
        Some(dist) => assert!(dist <= 1.0e-3),
        None => {
            let touching = query::contact(&separated_m1, &c, &m2, &c)
                .expect("The separated configuration should at most touch.");
            assert!(touching.depth <= 1.0e-3);
        }
    }

    assert!(query::distance(&m1, &c, &m2, &c).is_none());
}
