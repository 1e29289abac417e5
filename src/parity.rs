//! Scalar vs SIMD parity check
//!
//! Runs every dual-path operation through both [`Scalar`] and [`Simd`] on a
//! corpus of edge-case vectors plus a seeded random sample, and records the
//! worst ULP distance per operation. Non-finite results compare by class: two
//! NaNs agree, a NaN against a number is the maximum distance.

use std::fmt;

use gamemath_kernel::lanes::{ulps_between, Lanes, Scalar, Simd};
use gamemath_kernel::{Matrix4, Quaternion, Vector4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ParityConfig;

/// Worst-case agreement of one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationReport {
    pub name: &'static str,
    pub samples: usize,
    pub worst_ulps: u32,
    /// Samples whose distance exceeded the allowed maximum
    pub mismatches: usize,
}

impl OperationReport {
    fn new(name: &'static str) -> Self {
        Self { name, samples: 0, worst_ulps: 0, mismatches: 0 }
    }

    fn record(&mut self, ulps: u32, max_ulps: u32) {
        self.samples += 1;
        self.worst_ulps = self.worst_ulps.max(ulps);
        if ulps > max_ulps {
            self.mismatches += 1;
        }
    }
}

/// Result of a parity run
#[derive(Debug, Clone)]
pub struct ParityReport {
    pub max_ulps: u32,
    pub operations: Vec<OperationReport>,
}

impl ParityReport {
    /// True when every operation stayed within `max_ulps`
    pub fn is_clean(&self) -> bool {
        self.operations.iter().all(|op| op.worst_ulps <= self.max_ulps)
    }

    /// Names of operations that exceeded `max_ulps`
    pub fn failures(&self) -> Vec<&'static str> {
        self.operations
            .iter()
            .filter(|op| op.worst_ulps > self.max_ulps)
            .map(|op| op.name)
            .collect()
    }

    pub fn operation(&self, name: &str) -> Option<&OperationReport> {
        self.operations.iter().find(|op| op.name == name)
    }
}

impl fmt::Display for ParityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vs {} (max {} ulp)", Scalar::NAME, Simd::NAME, self.max_ulps)?;
        for op in &self.operations {
            writeln!(
                f,
                "  {:<14} {:>7} samples, worst {:>3} ulp, {} mismatches",
                op.name, op.samples, op.worst_ulps, op.mismatches
            )?;
        }
        Ok(())
    }
}

/// Fixed vectors that exercise zeros, signs, extremes and non-finite lanes
pub fn edge_vectors() -> Vec<Vector4> {
    let big = f32::MAX / 4.0;
    let tiny = f32::MIN_POSITIVE;
    vec![
        Vector4::ZERO,
        Vector4::X,
        Vector4::Y,
        Vector4::Z,
        Vector4::W,
        Vector4::new(-0.0, 0.0, -0.0, 0.0),
        Vector4::new(1.0, -1.0, 1.0, -1.0),
        Vector4::splat(big),
        Vector4::new(big, -big, big, 1.0),
        Vector4::new(f32::MAX, 0.0, 0.0, 0.0),
        Vector4::splat(tiny),
        Vector4::new(tiny, -tiny, 1.0, 0.0),
        Vector4::new(1e-20, 1e20, -1e-20, 1.0),
        Vector4::new(f32::INFINITY, 1.0, 2.0, 0.0),
        Vector4::new(0.0, f32::NEG_INFINITY, 0.0, 1.0),
        Vector4::new(f32::NAN, 1.0, 0.0, 1.0),
    ]
}

fn random_vector(rng: &mut StdRng) -> Vector4 {
    // Spread magnitudes over several decades
    let scale = 10f32.powi(rng.gen_range(-3..4));
    Vector4::new(
        rng.gen_range(-1.0..1.0) * scale,
        rng.gen_range(-1.0..1.0) * scale,
        rng.gen_range(-1.0..1.0) * scale,
        rng.gen_range(-1.0..1.0) * scale,
    )
}

fn random_matrix(rng: &mut StdRng) -> Matrix4 {
    if rng.gen_bool(0.5) {
        Matrix4::from_columns(
            random_vector(rng),
            random_vector(rng),
            random_vector(rng),
            random_vector(rng),
        )
    } else {
        let axis = Vector4::direction(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        )
        .normalized();
        let rotation = Quaternion::from_axis_and_angle(axis.x, axis.y, axis.z, rng.gen_range(-3.1..3.1));
        Matrix4::transformation(random_vector(rng).absolute(), &rotation, random_vector(rng))
    }
}

fn vector_ulps(a: Vector4, b: Vector4) -> u32 {
    a.max_ulps(b)
}

fn matrix_ulps(a: &Matrix4, b: &Matrix4) -> u32 {
    a.data()
        .iter()
        .zip(b.data())
        .map(|(x, y)| ulps_between(*x, *y))
        .max()
        .unwrap_or(0)
}

/// Compare both numeric paths on the edge corpus plus `config.samples` random inputs
pub fn run(config: &ParityConfig) -> ParityReport {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let max = config.max_ulps;

    let mut vectors = edge_vectors();
    vectors.extend((0..config.samples).map(|_| random_vector(&mut rng)));

    let mut matrices = vec![Matrix4::IDENTITY, Matrix4::ZERO];
    matrices.extend((0..config.samples.max(1)).map(|_| random_matrix(&mut rng)));

    let mut dot = OperationReport::new("dot");
    let mut cross = OperationReport::new("cross");
    let mut length = OperationReport::new("length");
    let mut normalize = OperationReport::new("normalize");
    let mut mul_matrix = OperationReport::new("mul_matrix");
    let mut mul_vector = OperationReport::new("mul_vector");
    let mut map_position = OperationReport::new("map_position");
    let mut map_normal = OperationReport::new("map_normal");

    for (i, &a) in vectors.iter().enumerate() {
        let b = vectors[(i * 7 + 3) % vectors.len()];

        dot.record(ulps_between(Scalar::dot(a, b), Simd::dot(a, b)), max);
        let (da, db) = (a.with_w(0.0), b.with_w(0.0));
        cross.record(vector_ulps(Scalar::cross(da, db), Simd::cross(da, db)), max);
        length.record(ulps_between(Scalar::length(a), Simd::length(a)), max);
        normalize.record(vector_ulps(Scalar::normalized(a), Simd::normalized(a)), max);

        let m = &matrices[i % matrices.len()];
        mul_vector.record(vector_ulps(Scalar::mul_vector(m, a), Simd::mul_vector(m, a)), max);
        map_position.record(vector_ulps(Scalar::map_position(m, a), Simd::map_position(m, a)), max);
        map_normal.record(vector_ulps(Scalar::map_normal(m, a), Simd::map_normal(m, a)), max);
    }

    for pair in matrices.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        mul_matrix.record(matrix_ulps(&Scalar::mul_matrix(a, b), &Simd::mul_matrix(a, b)), max);
    }

    let report = ParityReport {
        max_ulps: max,
        operations: vec![dot, cross, length, normalize, mul_matrix, mul_vector, map_position, map_normal],
    };
    for op in report.operations.iter().filter(|op| op.mismatches > 0) {
        log::debug!("{}: {} of {} samples beyond {} ulp", op.name, op.mismatches, op.samples, max);
    }
    report
}
