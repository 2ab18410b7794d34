use casteljau_studio::core::build_pyramid;
use casteljau_studio::{evaluate_bezier, sample_bezier, ControlPolygon};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use std::hint::black_box;

fn regular_points(count: usize) -> Vec<DVec2> {
    ControlPolygon::regular(count, DVec2::new(1280.0, 720.0))
        .expect("Punktanzahl >= 2")
        .points()
        .to_vec()
}

fn bench_curve_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sampling");

    for &count in &[3usize, 8, 32] {
        let points = regular_points(count);
        group.bench_with_input(
            BenchmarkId::new("sample_bezier_100", count),
            &points,
            |b, points| {
                b.iter(|| {
                    let curve = sample_bezier(black_box(points), 100).expect("Abtastung");
                    black_box(curve.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_pyramid(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolation_pyramid");

    for &count in &[3usize, 8, 32] {
        let points = regular_points(count);
        group.bench_with_input(
            BenchmarkId::new("build_pyramid", count),
            &points,
            |b, points| {
                b.iter(|| {
                    let pyramid = build_pyramid(black_box(points), black_box(0.37));
                    black_box(pyramid.apex())
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("evaluate_bezier", count),
            &points,
            |b, points| b.iter(|| black_box(evaluate_bezier(black_box(points), 0.37))),
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_curve_sampling, bench_pyramid);
criterion_main!(core_benches);
