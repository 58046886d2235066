//! Test utilities for chakra-map integration tests.
//!
//! Maps built here store a world-anchored cell id in every cell, so a value
//! read back after panning tells which world cell it was written for.

#![allow(dead_code)]

use chakra_map::{GridMap, Index, Length, Position, Size};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Basic (invalidated on pan) layer.
pub const BASIC: &str = "elevation";

/// Layer that keeps stale data on pan.
pub const EXTRA: &str = "color";

/// Install a test logger once. Safe to call from every test.
pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Deterministic RNG for reproducible property tests.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Id of the world cell containing `position`.
///
/// Exact in `f32` for cell coordinates below 1000 in magnitude.
pub fn world_cell_id(position: Position, resolution: f64) -> f32 {
    let cx = (position.x / resolution).floor() as i64;
    let cy = (position.y / resolution).floor() as i64;
    (cx * 2000 + cy) as f32
}

/// Map with a basic and an extra layer, both filled with world cell ids.
pub fn world_map(length: Length, resolution: f64, position: Position) -> GridMap {
    let mut map = GridMap::new([BASIC, EXTRA]);
    map.set_geometry(length, resolution, position);
    map.set_basic_layers([BASIC]);
    map.add(BASIC, f32::NAN);
    map.add(EXTRA, f32::NAN);
    fill_with_world_ids(&mut map, BASIC);
    fill_with_world_ids(&mut map, EXTRA);
    map
}

/// Overwrite every cell of `layer` with the id of its world cell.
pub fn fill_with_world_ids(map: &mut GridMap, layer: &str) {
    for index in buffer_indices(map.size()) {
        write_world_id(map, layer, index);
    }
}

/// Write the world cell id of buffer `index` into `layer`.
pub fn write_world_id(map: &mut GridMap, layer: &str, index: Index) {
    let resolution = map.resolution();
    let position = map.get_position(index).unwrap();
    map.set_at(layer, index, world_cell_id(position, resolution))
        .unwrap();
}

/// Every buffer index of a `size` buffer in row-major order.
pub fn buffer_indices(size: Size) -> impl Iterator<Item = Index> {
    (0..size.rows).flat_map(move |row| (0..size.cols).map(move |col| Index::new(row, col)))
}

/// Random position inside `map`'s window.
pub fn random_inside(map: &GridMap, rng: &mut StdRng) -> Position {
    let lower = map.position() - map.length().half();
    Position::new(
        lower.x + rng.gen_range(0.0..map.length().x),
        lower.y + rng.gen_range(0.0..map.length().y),
    )
}
