//! Position, index and size types for the grid map.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

/// World position in meters.
///
/// `x` maps onto buffer rows, `y` onto buffer columns.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate in meters (forward in ROS convention)
    pub x: f64,
    /// Y coordinate in meters (left in ROS convention)
    pub y: f64,
}

impl Position {
    /// Create a new position
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Zero position (origin)
    pub const ZERO: Position = Position { x: 0.0, y: 0.0 };
}

impl Add for Position {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Position::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Position {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Position {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Position::new(self.x - other.x, self.y - other.y)
    }
}

/// Position with height, as produced by [`GridMap::get_position3`](crate::GridMap::get_position3).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Position3 {
    /// X coordinate in meters
    pub x: f64,
    /// Y coordinate in meters
    pub y: f64,
    /// Layer value at (x, y)
    pub z: f64,
}

impl Position3 {
    /// Create a new 3D position
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// World-space extent of a map window in meters.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Length {
    /// Extent along X (rows)
    pub x: f64,
    /// Extent along Y (columns)
    pub y: f64,
}

impl Length {
    /// Create a new length
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Zero length (no geometry set)
    pub const ZERO: Length = Length { x: 0.0, y: 0.0 };

    /// Half extent as a position offset.
    #[inline]
    pub fn half(&self) -> Position {
        Position::new(0.5 * self.x, 0.5 * self.y)
    }

    /// Both components strictly positive and finite
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.x > 0.0 && self.y > 0.0 && self.x.is_finite() && self.y.is_finite()
    }
}

/// Buffer index of a cell (row, column).
///
/// Always refers to physical storage, never to the logical offset from the
/// map's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Index {
    /// Row (axis 0)
    pub row: usize,
    /// Column (axis 1)
    pub col: usize,
}

impl Index {
    /// Create a new index
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Index (0, 0)
    pub const ZERO: Index = Index { row: 0, col: 0 };
}

/// Number of cells per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    /// Number of rows (axis 0)
    pub rows: usize,
    /// Number of columns (axis 1)
    pub cols: usize,
}

impl Size {
    /// Create a new size
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Empty size (no geometry set)
    pub const ZERO: Size = Size { rows: 0, cols: 0 };

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Either axis has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Does `index` address a cell of a buffer this size?
    #[inline]
    pub fn contains(&self, index: Index) -> bool {
        index.row < self.rows && index.col < self.cols
    }

    /// Does a `size` block fit in this size?
    #[inline]
    pub fn fits(&self, size: Size) -> bool {
        size.rows <= self.rows && size.cols <= self.cols
    }
}

/// Signed shift of the circular buffer, in cells, in buffer order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IndexShift {
    /// Row shift (axis 0)
    pub row: i64,
    /// Column shift (axis 1)
    pub col: i64,
}

impl IndexShift {
    /// Create a new index shift
    #[inline]
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// No shift on either axis.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.row == 0 && self.col == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ops() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(0.5, -1.0);
        assert_eq!(a + b, Position::new(1.5, 1.0));
        assert_eq!(a - b, Position::new(0.5, 3.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn test_size_contains() {
        let size = Size::new(4, 3);
        assert_eq!(size.cell_count(), 12);
        assert!(size.contains(Index::new(3, 2)));
        assert!(!size.contains(Index::new(4, 0)));
        assert!(!size.contains(Index::new(0, 3)));
        assert!(size.fits(Size::new(4, 3)));
        assert!(!size.fits(Size::new(5, 1)));
        assert!(Size::ZERO.is_empty());
    }

    #[test]
    fn test_length_positive() {
        assert!(Length::new(1.0, 0.5).is_positive());
        assert!(!Length::new(0.0, 1.0).is_positive());
        assert!(!Length::new(1.0, f64::INFINITY).is_positive());
        assert_eq!(Length::new(2.0, 4.0).half(), Position::new(1.0, 2.0));
    }
}
