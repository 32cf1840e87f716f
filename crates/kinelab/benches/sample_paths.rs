//! Benchmarks for the per-sample hot paths.
//!
//! Both components advertise O(1) processing per sample; these
//! benchmarks keep that honest across stream lengths.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kinelab::prelude::*;
use std::hint::black_box;

/// Deterministic gravity sweep standing in for sensor noise.
fn gravity_at(k: usize) -> [f64; 3] {
    let phi = (75.0 + 0.5 * ((k as f64) * 0.13).sin()).to_radians();
    [phi.sin(), phi.cos(), 0.0]
}

fn bench_angle_estimator(c: &mut Criterion) {
    let mut group = c.benchmark_group("angle_on_sample");
    for size in [1_000usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            b.iter(|| {
                let mut angle = AngleEstimatorBuilder::new()
                    .build()
                    .expect("default builder");
                angle.start();
                for k in 0..n {
                    let _ = black_box(angle.on_sample(black_box(gravity_at(k))));
                }
                black_box(angle.current_angle())
            });
        });
    }
    group.finish();
}

fn bench_kinematics_integrator(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrator_on_sample");
    for size in [1_000usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            b.iter(|| {
                let mut cart = KinematicsIntegratorBuilder::new()
                    .build()
                    .expect("default builder");
                cart.start();
                for k in 0..n {
                    let t = 100.0 + k as f64 * 0.1;
                    let a = -0.05 * ((k as f64) * 0.07).cos();
                    let _ = black_box(cart.on_sample(black_box(a), black_box(t)));
                }
                black_box(cart.distance())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_angle_estimator, bench_kinematics_integrator);
criterion_main!(benches);
