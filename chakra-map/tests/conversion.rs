//! Position/index conversion properties.

mod common;

use approx::assert_abs_diff_eq;
use chakra_map::{GridMap, Index, Length, Position};
use common::{buffer_indices, random_inside, rng};
use rand::Rng;

#[test]
fn test_round_trip_with_random_start() {
    let mut rng = rng(7);

    for _ in 0..20 {
        let rows = rng.gen_range(1..30);
        let cols = rng.gen_range(1..30);
        let resolution = [0.05, 0.1, 0.25, 1.0][rng.gen_range(0..4)];
        let center = Position::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));

        let mut map = GridMap::new(["elevation"]);
        map.set_geometry(
            Length::new(rows as f64 * resolution, cols as f64 * resolution),
            resolution,
            center,
        );
        map.set_start_index(Index::new(rng.gen_range(0..rows), rng.gen_range(0..cols)));

        for index in buffer_indices(map.size()) {
            let position = map.get_position(index).unwrap();
            assert!(map.is_inside(position));
            assert_eq!(map.get_index(position), Some(index));
        }
    }
}

#[test]
fn test_random_positions_land_in_nearest_cell() {
    let mut rng = rng(11);
    let mut map = GridMap::new(["elevation"]);
    map.set_geometry(Length::new(6.0, 4.0), 0.2, Position::new(1.0, -2.0));
    map.set_start_index(Index::new(13, 4));

    for _ in 0..500 {
        let position = random_inside(&map, &mut rng);
        let index = map.get_index(position).unwrap();
        let center = map.get_position(index).unwrap();
        assert_abs_diff_eq!(center.x, position.x, epsilon = 0.1 + 1e-9);
        assert_abs_diff_eq!(center.y, position.y, epsilon = 0.1 + 1e-9);
    }
}

#[test]
fn test_outside_positions_rejected() {
    let mut map = GridMap::new(["elevation"]);
    map.set_geometry(Length::new(4.0, 4.0), 0.5, Position::ZERO);

    for position in [
        Position::new(2.0, 0.0),
        Position::new(0.0, 2.0),
        Position::new(-2.01, 0.0),
        Position::new(0.0, -2.01),
        Position::new(f64::INFINITY, 0.0),
        Position::new(f64::NAN, 0.0),
    ] {
        assert!(!map.is_inside(position), "{position:?} reported inside");
        assert_eq!(map.get_index(position), None);
    }

    assert!(map.is_inside(Position::new(-2.0, -2.0)));
    assert_eq!(map.get_index(Position::new(-2.0, -2.0)), Some(Index::new(7, 7)));
}
