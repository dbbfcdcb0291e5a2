//! Benchmark for the orbit angle hot path, which a host may evaluate once
//! per rendered frame.

use chrono::Duration;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ephemeris::{Catalog, DisplayMode, SolarScene, SpeedMultiplier};
use nalgebra::Vector3;

fn bench_orbit_angles(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let query = catalog.epoch() + Duration::days(1_234);

    c.bench_function("orbit_angles_at", |b| {
        b.iter(|| catalog.orbit_angles_at(black_box(query)))
    });
}

fn bench_scene_snapshot(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let query = catalog.epoch() + Duration::days(1_234);
    let scene = SolarScene::new(catalog, Vector3::zeros(), DisplayMode::Artistic);

    c.bench_function("scene_snapshot", |b| {
        b.iter(|| scene.snapshot(black_box(query), SpeedMultiplier::DayPerSecond))
    });
}

criterion_group!(benches, bench_orbit_angles, bench_scene_snapshot);
criterion_main!(benches);
