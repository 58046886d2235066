//! Benchmark grid operations performance.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use chakra_map::{GridConfig, GridMap, Length, Position};

/// Default-config map with every layer filled.
fn filled_map(length: f64, resolution: f64) -> GridMap {
    let config = GridConfig::for_area(length, length, resolution);
    let mut map = GridMap::from_config(&config);
    for layer in config.layers {
        map.add(layer, 1.0);
    }
    map
}

fn bench_move_small_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_small_step");

    for resolution in [0.1, 0.05, 0.025].iter() {
        let mut map = filled_map(10.0, *resolution);
        let step = 3.0 * resolution;

        group.bench_with_input(
            BenchmarkId::from_parameter(resolution),
            resolution,
            |b, _| {
                let mut x = 0.0;
                b.iter(|| {
                    // Back and forth so the map stays near the origin.
                    x = if x > 0.0 { 0.0 } else { step };
                    let result = map.move_to_with_regions(black_box(Position::new(x, 0.5 * x)));
                    black_box(result)
                })
            },
        );
    }

    group.finish();
}

fn bench_move_full_wipe(c: &mut Criterion) {
    let mut map = filled_map(10.0, 0.05);
    let mut x = 0.0;

    c.bench_function("move_full_wipe", |b| {
        b.iter(|| {
            x += 20.0;
            black_box(map.move_to(black_box(Position::new(x, 0.0))))
        })
    });
}

fn bench_submap(c: &mut Criterion) {
    let mut group = c.benchmark_group("submap_extraction");

    let mut map = filled_map(10.0, 0.05);
    // Put the buffer edge inside the requested windows.
    map.move_to(Position::new(1.3, -2.1));

    for side in [1.0, 2.0, 4.0].iter() {
        let length = Length::new(*side, *side);
        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| {
                let submap = map.submap(black_box(Position::new(1.3, -2.1)), length);
                black_box(submap)
            })
        });
    }

    group.finish();
}

fn bench_index_lookup(c: &mut Criterion) {
    let mut map = filled_map(10.0, 0.05);
    map.move_to(Position::new(0.77, 0.31));

    let positions: Vec<Position> = (0..1000)
        .map(|i| {
            let t = i as f64 * 0.001;
            Position::new(0.77 + 4.0 * (t * 7.0).sin(), 0.31 + 4.0 * (t * 3.0).cos())
        })
        .collect();

    c.bench_function("index_lookup_1000", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for &position in &positions {
                if let Some(index) = map.get_index(black_box(position)) {
                    hits += map.is_valid(index) as usize;
                }
            }
            black_box(hits)
        })
    });
}

criterion_group!(
    benches,
    bench_move_small_step,
    bench_move_full_wipe,
    bench_submap,
    bench_index_lookup
);
criterion_main!(benches);
