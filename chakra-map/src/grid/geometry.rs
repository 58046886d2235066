//! Map window geometry.

use serde::{Deserialize, Serialize};

use crate::core::{Length, Position, Size, round_half_away};

/// Resolution, extent and center of a map window.
///
/// `length == size * resolution` always holds: constructors round the
/// requested length to whole cells and store the realized extent.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct MapGeometry {
    /// Realized extent in meters
    pub length: Length,
    /// Cell edge length in meters
    pub resolution: f64,
    /// World position of the window center
    pub position: Position,
    /// Number of cells per axis
    pub size: Size,
}

impl MapGeometry {
    /// Create a geometry from a requested length.
    ///
    /// The length is rounded to whole cells.
    ///
    /// # Panics
    /// If `length` or `resolution` is not strictly positive.
    pub fn new(length: Length, resolution: f64, position: Position) -> Self {
        assert!(
            length.is_positive(),
            "map length must be positive, got ({}, {})",
            length.x,
            length.y
        );
        assert!(
            resolution > 0.0 && resolution.is_finite(),
            "map resolution must be positive, got {}",
            resolution
        );

        let size = Size::new(
            round_half_away(length.x / resolution).max(0) as usize,
            round_half_away(length.y / resolution).max(0) as usize,
        );
        Self::from_size(size, resolution, position)
    }

    /// Create a geometry from an exact cell count.
    pub fn from_size(size: Size, resolution: f64, position: Position) -> Self {
        Self {
            length: Length::new(size.rows as f64 * resolution, size.cols as f64 * resolution),
            resolution,
            position,
            size,
        }
    }

    /// World position of the window's top-left (+X, +Y) corner.
    #[inline]
    pub fn top_left_corner(&self) -> Position {
        self.position + self.length.half()
    }

    /// World position of the window's bottom-right (-X, -Y) corner.
    #[inline]
    pub fn bottom_right_corner(&self) -> Position {
        self.position - self.length.half()
    }

    /// Covered area in square meters.
    #[inline]
    pub fn area(&self) -> f64 {
        self.length.x * self.length.y
    }
}
