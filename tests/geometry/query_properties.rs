use na::{Isometry3, Vector3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use riposte3d::query;
use riposte3d::shape::{Ball, Capsule, Cuboid, SupportMap};

fn random_isometry(rng: &mut SmallRng) -> Isometry3<f64> {
    let translation = Vector3::new(
        rng.gen_range(-2.0..2.0),
        rng.gen_range(-2.0..2.0),
        rng.gen_range(-2.0..2.0),
    );
    let axisangle = Vector3::new(
        rng.gen_range(-3.0..3.0),
        rng.gen_range(-3.0..3.0),
        rng.gen_range(-3.0..3.0),
    );

    Isometry3::new(translation, axisangle)
}

fn check_pair<G1, G2>(g1: &G1, g2: &G2, rng: &mut SmallRng)
where
    G1: SupportMap,
    G2: SupportMap,
{
    for _ in 0..50 {
        let m1 = random_isometry(rng);
        let m2 = random_isometry(rng);

        let c12 = query::contact(&m1, g1, &m2, g2);
        let c21 = query::contact(&m2, g2, &m1, g1);
        let d12 = query::distance(&m1, g1, &m2, g2);

        // Symmetry: swapping the two shapes preserves the hit status and the depth.
        // (The normals are only guaranteed to be exact negations away from face ties;
        // their correctness is covered by the separation check below.)
        assert_eq!(c12.is_some(), c21.is_some());
        if let (Some(c12), Some(c21)) = (&c12, &c21) {
            assert_relative_eq!(c12.depth, c21.depth, epsilon = 1.0e-3);
        }

        // Consistency between the contact and distance queries.
        match (&c12, &d12) {
            (Some(_), Some(dist)) => assert!(*dist <= 1.0e-3),
            (Some(_), None) => {}
            (None, Some(dist)) => assert!(*dist >= 0.0),
            (None, None) => {}
        }

        // The reported contact must actually separate the shapes.
        if let Some(contact) = &c12 {
            let separated_m1 =
                Isometry3::from(na::Translation3::from(contact.normal.into_inner() * contact.depth))
                    * m1;

            match query::distance(&separated_m1, g1, &m2, g2) {
                Some(dist) => assert!(dist <= 1.0e-3),
                None => {
                    if let Some(touching) = query::contact(&separated_m1, g1, &m2, g2) {
                        assert!(touching.depth <= 1.0e-3);
                    }
                }
            }
        }

        // Invariance under a common rigid motion.
        let t = random_isometry(rng);
        let c12_t = query::contact(&(t * m1), g1, &(t * m2), g2);

        assert_eq!(c12.is_some(), c12_t.is_some());
        if let (Some(a), Some(b)) = (&c12, &c12_t) {
            assert_relative_eq!(a.depth, b.depth, epsilon = 1.0e-5);
            assert_relative_eq!(t * a.point, b.point, epsilon = 1.0e-5);
            assert_relative_eq!(
                (t * a.normal).into_inner(),
                b.normal.into_inner(),
                epsilon = 1.0e-5
            );
        }

        if let Some(dist) = d12 {
            let dist_t = query::distance(&(t * m1), g1, &(t * m2), g2)
                .expect("The transformed query must succeed like the original one.");
            assert_relative_eq!(dist, dist_t, epsilon = 1.0e-6);
        }
    }
}

#[test]
fn ball_ball_properties() {
    let mut rng = SmallRng::seed_from_u64(42);
    check_pair(&Ball::new(1.0), &Ball::new(0.7), &mut rng);
}

#[test]
fn ball_cuboid_properties() {
    let mut rng = SmallRng::seed_from_u64(43);
    check_pair(&Ball::new(0.8), &Cuboid::new(Vector3::new(0.6, 1.1, 0.4)), &mut rng);
}

#[test]
fn cuboid_cuboid_properties() {
    let mut rng = SmallRng::seed_from_u64(44);
    check_pair(
        &Cuboid::new(Vector3::new(1.0, 0.5, 0.7)),
        &Cuboid::new(Vector3::new(0.6, 0.9, 0.4)),
        &mut rng,
    );
}

#[test]
fn capsule_cuboid_properties() {
    let mut rng = SmallRng::seed_from_u64(45);
    check_pair(
        &Capsule::new_y(0.8, 0.5),
        &Cuboid::new(Vector3::new(0.6, 0.9, 0.4)),
        &mut rng,
    );
}

#[test]
fn degenerate_inputs_terminate() {
    let m = Isometry3::identity();

    // Zero-sized shapes at the same position must answer (in any way) without looping
    // or panicking.
    let b = Ball::new(0.0);
    let _ = query::contact(&m, &b, &m, &b);
    let _ = query::distance(&m, &b, &m, &b);

    // NaN poses abort the query with a miss.
    let b2 = Ball::new(1.0);
    let m2 = Isometry3::translation(f64::NAN, 0.0, 0.0);
    assert!(query::contact(&m, &b2, &m2, &b2).is_none());
    assert!(query::distance(&m, &b2, &m2, &b2).is_none());
}
