use casteljau_studio::{
    AppController, AppIntent, AppState, Point, RecordingSurface, Renderer, ViewerOptions,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn build_state(count: usize, show_hull: bool) -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new(ViewerOptions::default()).expect("Standardoptionen");
    controller
        .handle_intent(&mut state, AppIntent::ControlPointCountRequested { count })
        .expect("gültige Anzahl");
    controller
        .handle_intent(&mut state, AppIntent::ConvexHullToggled { visible: show_hull })
        .expect("Toggle");
    (controller, state)
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");

    for &count in &[3usize, 12, 32] {
        let (controller, state) = build_state(count, true);
        let mut renderer = Renderer::new();
        let mut surface = RecordingSurface::new();

        group.bench_with_input(BenchmarkId::new("scene_and_render", count), &count, |b, _| {
            b.iter(|| {
                let scene = controller.build_render_scene(black_box(&state));
                surface.reset();
                renderer.render_scene(&mut surface, &scene);
                black_box(surface.commands().len())
            })
        });
    }

    group.finish();
}

fn bench_interpolation_drag(c: &mut Criterion) {
    let (mut controller, mut state) = build_state(12, false);
    let points = state.construction.polygon().points().to_vec();
    let grab = state.construction.interpolation_points()[3];
    controller
        .handle_intent(&mut state, AppIntent::PointerPressed { pos: grab })
        .expect("PointerPressed");

    let targets: Vec<Point> = (0..64)
        .map(|i| points[3] + (points[4] - points[3]) * (i as f64 / 63.0))
        .collect();

    c.bench_function("interpolation_drag_64_moves", |b| {
        b.iter(|| {
            for &pos in &targets {
                controller
                    .handle_intent(&mut state, AppIntent::PointerMoved { pos })
                    .expect("PointerMoved");
            }
            black_box(state.construction.ratio())
        })
    });
}

criterion_group!(render_benches, bench_frame, bench_interpolation_drag);
criterion_main!(render_benches);
