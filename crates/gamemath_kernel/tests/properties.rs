//! Algebraic properties over seeded random inputs
//!
//! Each property is checked on the public types (the active path) and, where
//! the property is a `Lanes` operation, on both numeric paths.

use gamemath_kernel::lanes::{Lanes, Scalar, Simd};
use gamemath_kernel::{Matrix4, Vector4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 2_000;

fn random_vector(rng: &mut StdRng) -> Vector4 {
    Vector4::new(
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
    )
}

/// Off-diagonal entries in [-1, 1], diagonal magnitude in [4, 8].
///
/// Every row is strictly diagonally dominant, so the matrix is invertible
/// and well conditioned.
fn diagonally_dominant(rng: &mut StdRng) -> Matrix4 {
    let mut m = Matrix4::ZERO;
    for col in 0..4 {
        for row in 0..4 {
            m[(row, col)] = if row == col {
                let magnitude = rng.gen_range(4.0..8.0);
                if rng.gen_bool(0.5) { magnitude } else { -magnitude }
            } else {
                rng.gen_range(-1.0..1.0)
            };
        }
    }
    m
}

fn max_abs_difference(a: &Matrix4, b: &Matrix4) -> f32 {
    a.data()
        .iter()
        .zip(b.data())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}

// ==================== Vector Properties ====================

fn check_cross_anticommutes<L: Lanes>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng).with_w(0.0);
        let b = random_vector(&mut rng).with_w(0.0);
        assert_eq!(L::cross(a, b), L::negate_xyz(L::cross(b, a)), "{}: {:?} x {:?}", L::NAME, a, b);
    }
}

#[test]
fn test_cross_anticommutes() {
    check_cross_anticommutes::<Scalar>(10);
    check_cross_anticommutes::<Simd>(10);

    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng).with_w(0.0);
        let b = random_vector(&mut rng).with_w(0.0);
        assert_eq!(a.cross(b), -b.cross(a));
    }
}

#[test]
fn test_length_squared_matches_length() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        let squared = v.length_squared();
        let length = v.length();
        assert!(
            (length * length - squared).abs() <= 1e-5 * squared.max(1.0),
            "{:?}: {}^2 vs {}",
            v,
            length,
            squared
        );
    }
}

fn check_normalized_is_unit<L: Lanes>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        if L::length(v) < 1e-3 {
            continue;
        }
        let n = L::normalized(v);
        assert!((L::length(n) - 1.0).abs() < 1e-5, "{}: |{:?}| = {}", L::NAME, n, L::length(n));
    }
}

#[test]
fn test_normalized_has_unit_length() {
    check_normalized_is_unit::<Scalar>(13);
    check_normalized_is_unit::<Simd>(13);

    let mut rng = StdRng::seed_from_u64(14);
    for _ in 0..SAMPLES {
        let mut v = random_vector(&mut rng);
        if v.length() < 1e-3 {
            continue;
        }
        v.normalize();
        assert!((v.length() - 1.0).abs() < 1e-5);
    }
}

// ==================== Matrix Properties ====================

fn check_identity_preserves<L: Lanes>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        assert_eq!(L::mul_vector(&Matrix4::IDENTITY, v), v, "{}", L::NAME);
    }
}

#[test]
fn test_identity_preserves_vectors() {
    check_identity_preserves::<Scalar>(15);
    check_identity_preserves::<Simd>(15);

    let mut rng = StdRng::seed_from_u64(16);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        assert_eq!(Matrix4::IDENTITY * v, v);
    }
}

#[test]
fn test_inverse_round_trip() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..SAMPLES {
        let m = diagonally_dominant(&mut rng);
        let inverse = m.try_inverted().unwrap();

        let product = m * inverse;
        assert!(
            max_abs_difference(&product, &Matrix4::IDENTITY) < 1e-4,
            "m * m^-1 drifted for\n{}",
            m
        );

        let back = inverse.inverted();
        assert!(max_abs_difference(&back, &m) < 1e-4, "(m^-1)^-1 drifted for\n{}", m);
    }
}

#[test]
fn test_inverted_matches_try_inverted() {
    let mut rng = StdRng::seed_from_u64(18);
    for _ in 0..200 {
        let m = diagonally_dominant(&mut rng);
        assert_eq!(m.inverted(), m.try_inverted().unwrap());
    }
}
