//! Conversion between world positions and circular buffer indices.
//!
//! Two index spaces are involved:
//!
//! - **Logical offset**: distance in cells from the window's top-left
//!   (+X, +Y) corner. Independent of the buffer layout.
//! - **Buffer index**: physical storage coordinate.
//!   `buffer = (offset + start_index) mod size`.
//!
//! ```text
//!   world X ───────────────────▶        (mirrored: offset grows as X falls)
//!   offset   rows-1  ...  1   0
//!   buffer   (offset + start) mod rows
//! ```
//!
//! Each cell owns the half-open world interval `[lower, upper)`, so the
//! window covers `[center - length/2, center + length/2)` on both axes.

use crate::core::{Index, IndexShift, Position, Size, wrap_index};

use super::geometry::MapGeometry;

/// Offset along one axis of a position inside `[center - length/2, center + length/2)`.
///
/// The cell count is clamped into the axis, so a position that passed the
/// window check never loses its cell to rounding at the upper edge.
#[inline]
fn axis_offset(p: f64, center: f64, length: f64, resolution: f64, size: usize) -> usize {
    let cells = ((p - (center - 0.5 * length)) / resolution).floor();
    let last = size.saturating_sub(1);
    // NaN saturates to zero.
    last - (cells.max(0.0) as usize).min(last)
}

/// Is `position` inside the window, regardless of buffer layout?
#[inline]
pub fn is_position_within_map(position: Position, geometry: &MapGeometry) -> bool {
    let lower = geometry.bottom_right_corner();
    let upper = geometry.top_left_corner();
    position.x >= lower.x && position.x < upper.x && position.y >= lower.y && position.y < upper.y
}

/// Logical offset of the cell covering `position`.
pub fn logical_offset(position: Position, geometry: &MapGeometry) -> Option<Index> {
    if geometry.size.is_empty() || !is_position_within_map(position, geometry) {
        return None;
    }
    Some(clamped_logical_offset(position, geometry))
}

/// Logical offset of the cell nearest to `position`, clamped into the window.
///
/// The size must not be empty.
pub(crate) fn clamped_logical_offset(position: Position, geometry: &MapGeometry) -> Index {
    Index::new(
        axis_offset(
            position.x,
            geometry.position.x,
            geometry.length.x,
            geometry.resolution,
            geometry.size.rows,
        ),
        axis_offset(
            position.y,
            geometry.position.y,
            geometry.length.y,
            geometry.resolution,
            geometry.size.cols,
        ),
    )
}

/// Buffer index of a logical offset.
///
/// Offsets beyond `size` wrap as well; callers use that to walk past the
/// physical edge.
#[inline]
pub fn buffer_index_from_offset(offset: Index, size: Size, start_index: Index) -> Index {
    Index::new(
        wrap_index(offset.row as i64 + start_index.row as i64, size.rows),
        wrap_index(offset.col as i64 + start_index.col as i64, size.cols),
    )
}

/// Logical offset of a buffer index.
#[inline]
pub fn offset_from_buffer_index(index: Index, size: Size, start_index: Index) -> Index {
    Index::new(
        wrap_index(index.row as i64 - start_index.row as i64, size.rows),
        wrap_index(index.col as i64 - start_index.col as i64, size.cols),
    )
}

/// World position of the center of the cell at logical `offset`.
#[inline]
pub fn position_of_offset(offset: Index, geometry: &MapGeometry) -> Position {
    let corner = geometry.top_left_corner();
    Position::new(
        corner.x - geometry.resolution * (offset.row as f64 + 0.5),
        corner.y - geometry.resolution * (offset.col as f64 + 0.5),
    )
}

/// Buffer index of the cell covering `position`.
///
/// Returns `None` when the position is outside the window.
///
/// # Example
/// ```
/// use chakra_map::core::{Index, Length, Position};
/// use chakra_map::grid::{MapGeometry, position_to_index};
///
/// let geometry = MapGeometry::new(Length::new(10.0, 10.0), 1.0, Position::ZERO);
/// // Top-left cell is the +X/+Y corner.
/// let index = position_to_index(Position::new(4.5, 4.5), &geometry, Index::ZERO);
/// assert_eq!(index, Some(Index::new(0, 0)));
/// assert_eq!(position_to_index(Position::new(5.0, 0.0), &geometry, Index::ZERO), None);
/// ```
#[inline]
pub fn position_to_index(
    position: Position,
    geometry: &MapGeometry,
    start_index: Index,
) -> Option<Index> {
    logical_offset(position, geometry)
        .map(|offset| buffer_index_from_offset(offset, geometry.size, start_index))
}

/// Cell-center world position of a buffer index.
///
/// Returns `None` when `index` lies outside the buffer.
#[inline]
pub fn index_to_position(
    index: Index,
    geometry: &MapGeometry,
    start_index: Index,
) -> Option<Position> {
    if !geometry.size.contains(index) {
        return None;
    }
    let offset = offset_from_buffer_index(index, geometry.size, start_index);
    Some(position_of_offset(offset, geometry))
}

/// Nearest whole number of cells in `distance`, ties away from zero.
///
/// Non-finite ratios count as no cells.
#[inline]
fn whole_cells(distance: f64, resolution: f64) -> f64 {
    let cells = distance / resolution;
    if cells.is_finite() { cells.round() } else { 0.0 }
}

/// Fit a whole-cell shift into `i64` while keeping its residue modulo `size`.
///
/// Shifts of at least `size` stay at least `size` in magnitude, so they still
/// read as a full wipe.
#[inline]
fn reduce_shift(cells: f64, size: usize) -> i64 {
    let n = size.max(1) as f64;
    if cells.abs() < n {
        return cells as i64;
    }
    let reduced = (n + cells.abs().rem_euclid(n)) as i64;
    if cells < 0.0 { -reduced } else { reduced }
}

/// Whole-cell buffer shift closest to a world translation of the window.
///
/// Rounds ties away from zero. The buffer is mirrored, so a positive world
/// translation gives a negative index shift. Shifts of the whole extent or
/// more are reduced modulo `size`, so any finite translation is accepted.
#[inline]
pub fn index_shift_from_position_shift(shift: Position, resolution: f64, size: Size) -> IndexShift {
    IndexShift::new(
        reduce_shift(-whole_cells(shift.x, resolution), size.rows),
        reduce_shift(-whole_cells(shift.y, resolution), size.cols),
    )
}

/// World translation snapped to whole cells.
///
/// This is the translation a move actually applies. It is computed in `f64`
/// and stays exact for shifts far beyond the buffer extent.
#[inline]
pub fn aligned_position_shift(shift: Position, resolution: f64) -> Position {
    Position::new(
        whole_cells(shift.x, resolution) * resolution,
        whole_cells(shift.y, resolution) * resolution,
    )
}

/// World translation realized by a buffer shift.
#[inline]
pub fn position_shift_from_index_shift(shift: IndexShift, resolution: f64) -> Position {
    Position::new(
        -(shift.row as f64) * resolution,
        -(shift.col as f64) * resolution,
    )
}
