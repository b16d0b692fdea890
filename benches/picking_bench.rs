//! Benchmarks for the per-tick hot paths: picking, wander and a full tick.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};
use notecloud::backend::RecordingBackend;
use notecloud::camera::Camera;
use notecloud::input::InputEvent;
use notecloud::picking::Picker;
use notecloud::scene::{NodeStore, Wander};
use notecloud::source::{NodeRecord, PositionedNode};
use notecloud::{Options, Session};

fn cloud(count: usize) -> Vec<PositionedNode> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            PositionedNode {
                node_id: format!("n{i}"),
                timestamp: f64::from(t),
                position: Vec3::new(t * 10.0 - 5.0, (t * 40.0).sin(), (t * 40.0).cos()),
            }
        })
        .collect()
}

fn camera() -> Camera {
    Camera {
        eye: Vec3::new(5.0, 5.0, 5.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 16.0 / 9.0,
        fovy: 75.0,
        znear: 0.1,
        zfar: 1000.0,
    }
}

fn picking_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick_nearest");
    let picker = Picker::new(0.1);
    let camera = camera();

    for count in [100, 1_000, 10_000] {
        let store = NodeStore::from_nodes(cloud(count));
        let _ = group.bench_function(format!("{count}_nodes"), |b| {
            b.iter(|| {
                black_box(picker.nearest(
                    black_box(Vec2::new(0.1, -0.05)),
                    &camera,
                    store.iter(),
                ))
            });
        });
    }
    group.finish();
}

fn wander_benchmark(c: &mut Criterion) {
    let mut store = NodeStore::from_nodes(cloud(1_000));
    let mut wander = Wander::seeded(0.01, 1);
    let _ = c.bench_function("wander_1000_nodes", |b| {
        b.iter(|| wander.apply(black_box(&mut store)));
    });
}

fn tick_benchmark(c: &mut Criterion) {
    let mut session = Session::new(Options::default(), 1280, 720);
    let _ = session.add_viewport(Box::new(RecordingBackend::new()));
    let records: Vec<NodeRecord> = (0..1_000)
        .map(|i| NodeRecord::new(format!("n{i}"), f64::from(i)))
        .collect();
    session.load_records(&records);
    session.handle_input(InputEvent::CursorMoved { x: 640.0, y: 360.0 });

    let _ = c.bench_function("session_tick_1000_nodes", |b| {
        b.iter(|| black_box(session.tick()));
    });
}

criterion_group!(benches, picking_benchmark, wander_benchmark, tick_benchmark);
criterion_main!(benches);
