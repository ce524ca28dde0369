//! Benchmarks for per-frame field updates.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use driftfield::Field;

/// Step a field to its steady-state population (30 simulated seconds).
fn steady_state_field(seed: u64) -> Field {
    let mut field = Field::seeded(1920.0, 1080.0, seed);
    for frame in 0..1_875 {
        field.tick(frame as f64 * 16.0);
    }
    field
}

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("field");

    group.bench_function("tick", |b| {
        let mut field = steady_state_field(3);
        let mut timestamp = 30_000.0;
        b.iter(|| {
            timestamp += 16.0;
            field.tick(black_box(timestamp));
        })
    });

    group.bench_function("instances", |b| {
        let field = steady_state_field(4);
        b.iter(|| black_box(field.instances()))
    });

    group.finish();
}

criterion_group!(benches, bench_field);
criterion_main!(benches);
