#![allow(missing_docs)]
//! Scalar vs SIMD throughput of the hot vector and matrix paths.
//!
//! Each group benchmarks both numeric paths over the same batches, so the
//! report shows `scalar/N` and `simd/N` side by side.

use std::hint::black_box;

use criterion::measurement::WallTime;
use criterion::{criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use gamemath_kernel::lanes::{Lanes, Scalar, Simd};
use gamemath_kernel::{Matrix4, Quaternion, Vector4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BATCHES: [usize; 3] = [100, 1_000, 10_000];

fn random_directions(n: usize, seed: u64) -> Vec<Vector4> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Vector4::direction(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            )
        })
        .collect()
}

fn cross_normalize<L: Lanes>(group: &mut BenchmarkGroup<'_, WallTime>, n: usize) {
    let a = random_directions(n, 1);
    let b = random_directions(n, 2);
    let mut out = vec![Vector4::ZERO; n];
    group.bench_with_input(BenchmarkId::new(L::NAME, n), &(a, b), |bench, (a, b)| {
        bench.iter(|| {
            for ((slot, a), b) in out.iter_mut().zip(a).zip(b) {
                *slot = L::normalized(L::cross(*a, *b));
            }
            black_box(&out);
        })
    });
}

fn map_points<L: Lanes>(group: &mut BenchmarkGroup<'_, WallTime>, n: usize) {
    let matrix = Matrix4::transformation(
        Vector4::direction(2.0, 3.0, 4.0),
        &Quaternion::from_axis_and_angle(0.0, 1.0, 0.0, 0.7),
        Vector4::direction(10.0, 20.0, 30.0),
    );
    let points: Vec<Vector4> = random_directions(n, 3).into_iter().map(|p| p.with_w(1.0)).collect();
    let mut out = vec![Vector4::ZERO; n];
    group.bench_with_input(BenchmarkId::new(L::NAME, n), &points, |bench, points| {
        bench.iter(|| {
            let m = black_box(&matrix);
            for (slot, p) in out.iter_mut().zip(points) {
                *slot = L::map_position(m, *p) + L::map_normal(m, *p);
            }
            black_box(&out);
        })
    });
}

fn matrix_chain<L: Lanes>(group: &mut BenchmarkGroup<'_, WallTime>, n: usize) {
    let step = Matrix4::rotation(&Quaternion::from_axis_and_angle(0.0, 0.6, 0.8, 0.01));
    group.bench_with_input(BenchmarkId::new(L::NAME, n), &n, |bench, &n| {
        bench.iter(|| {
            let mut acc = Matrix4::IDENTITY;
            for _ in 0..n {
                acc = L::mul_matrix(&acc, black_box(&step));
            }
            black_box(acc)
        })
    });
}

fn bench_cross_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_normalize");
    for &n in &BATCHES {
        group.throughput(Throughput::Elements(n as u64));
        cross_normalize::<Scalar>(&mut group, n);
        cross_normalize::<Simd>(&mut group, n);
    }
    group.finish();
}

fn bench_map_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_position_normal");
    for &n in &BATCHES {
        group.throughput(Throughput::Elements(n as u64));
        map_points::<Scalar>(&mut group, n);
        map_points::<Simd>(&mut group, n);
    }
    group.finish();
}

fn bench_matrix_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_chain");
    for &n in &BATCHES {
        group.throughput(Throughput::Elements(n as u64));
        matrix_chain::<Scalar>(&mut group, n);
        matrix_chain::<Simd>(&mut group, n);
    }
    group.finish();
}

criterion_group!(benches, bench_cross_normalize, bench_map_points, bench_matrix_chain);
criterion_main!(benches);
