//! Placement of a submap inside its source map.

use log::trace;

use crate::core::{Index, Length, Position, Size, round_half_away};
use crate::error::{GridMapError, Result};
use crate::grid::{
    GridMap, MapGeometry, buffer_index_from_offset, clamped_logical_offset, logical_offset,
    position_of_offset,
};

/// Where a submap window sits in a source map and what it looks like.
///
/// The window is snapped to the source cells: the requested length is rounded
/// to whole cells and the window is aligned on the source cell grid as close
/// to the requested center as the snapping allows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubmapGeometry {
    /// Source buffer index of the submap's top-left cell
    pub top_left_index: Index,
    /// Cells per axis
    pub size: Size,
    /// Realized extent (`size * resolution`)
    pub length: Length,
    /// World position of the submap center
    pub position: Position,
    /// Meters per cell, same as the source
    pub resolution: f64,
    /// Index of the requested center inside the submap
    pub requested_index_in_submap: Index,
}

impl SubmapGeometry {
    /// Place a window of `length` centered near `position` in `map`.
    ///
    /// # Errors
    /// - [`GridMapError::InvalidSubmapSize`] when `length` covers no cells
    /// - [`GridMapError::SubmapOutOfBounds`] when the window leaves the map
    pub fn new(map: &GridMap, position: Position, length: Length) -> Result<Self> {
        let geometry = map.geometry();
        let resolution = geometry.resolution;
        if !length.is_positive() || resolution <= 0.0 {
            return Err(GridMapError::InvalidSubmapSize);
        }

        let size = Size::new(
            round_half_away(length.x / resolution).max(0) as usize,
            round_half_away(length.y / resolution).max(0) as usize,
        );
        if size.is_empty() {
            return Err(GridMapError::InvalidSubmapSize);
        }

        let realized = Length::new(size.rows as f64 * resolution, size.cols as f64 * resolution);
        let half_cell = Position::new(0.5 * resolution, 0.5 * resolution);

        // Center of the submap's top-left cell, then the source cell under it.
        let top_left_center = position + realized.half() - half_cell;
        let offset =
            logical_offset(top_left_center, geometry).ok_or(GridMapError::SubmapOutOfBounds)?;
        if offset.row + size.rows > geometry.size.rows || offset.col + size.cols > geometry.size.cols
        {
            return Err(GridMapError::SubmapOutOfBounds);
        }

        let corner = position_of_offset(offset, geometry) + half_cell;
        let submap_position = corner - realized.half();
        let top_left_index = buffer_index_from_offset(offset, geometry.size, map.start_index());

        // The window covers `position` up to rounding; the start index is zero,
        // so the offset is the buffer index.
        let submap_geometry = MapGeometry::from_size(size, resolution, submap_position);
        let requested_index_in_submap = clamped_logical_offset(position, &submap_geometry);

        trace!(
            "Submap {}x{} at source index ({}, {}), center ({:.3}, {:.3})",
            size.rows,
            size.cols,
            top_left_index.row,
            top_left_index.col,
            submap_position.x,
            submap_position.y
        );

        Ok(Self {
            top_left_index,
            size,
            length: submap_geometry.length,
            position: submap_position,
            resolution,
            requested_index_in_submap,
        })
    }

    /// Geometry of the extracted map.
    #[inline]
    pub fn map_geometry(&self) -> MapGeometry {
        MapGeometry::from_size(self.size, self.resolution, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn map() -> GridMap {
        let mut map = GridMap::new(["elevation"]);
        map.set_geometry(Length::new(10.0, 10.0), 1.0, Position::ZERO);
        map
    }

    #[test]
    fn test_centered_even_submap() {
        let geometry = SubmapGeometry::new(&map(), Position::ZERO, Length::new(4.0, 2.0)).unwrap();
        assert_eq!(geometry.size, Size::new(4, 2));
        assert_eq!(geometry.top_left_index, Index::new(3, 4));
        assert_relative_eq!(geometry.position.x, 0.0);
        assert_relative_eq!(geometry.position.y, 0.0);
        // The center lies on a cell edge and belongs to the cell below it.
        assert_eq!(geometry.requested_index_in_submap, Index::new(1, 0));
    }

    #[test]
    fn test_snaps_to_source_cells() {
        // Center off-grid by a fraction of a cell.
        let geometry =
            SubmapGeometry::new(&map(), Position::new(0.3, -0.2), Length::new(3.0, 3.0)).unwrap();
        assert_eq!(geometry.size, Size::new(3, 3));
        assert_relative_eq!(geometry.position.x, 0.5);
        assert_relative_eq!(geometry.position.y, -0.5);
        assert_relative_eq!(geometry.length.x, 3.0);
        assert_eq!(geometry.requested_index_in_submap, Index::new(1, 1));
    }

    #[test]
    fn test_uses_start_index() {
        let mut map = map();
        map.set_start_index(Index::new(8, 9));
        let geometry = SubmapGeometry::new(&map, Position::ZERO, Length::new(4.0, 2.0)).unwrap();
        // Logical offset (3, 4) shifted by the start index.
        assert_eq!(geometry.top_left_index, Index::new(1, 3));
    }

    #[test]
    fn test_whole_map() {
        let geometry =
            SubmapGeometry::new(&map(), Position::ZERO, Length::new(10.0, 10.0)).unwrap();
        assert_eq!(geometry.size, Size::new(10, 10));
        assert_eq!(geometry.top_left_index, Index::ZERO);
    }

    #[test]
    fn test_rejects_window_leaving_map() {
        let result = SubmapGeometry::new(&map(), Position::new(-4.0, 0.0), Length::new(4.0, 4.0));
        assert_eq!(result, Err(GridMapError::SubmapOutOfBounds));

        let result = SubmapGeometry::new(&map(), Position::ZERO, Length::new(12.0, 2.0));
        assert_eq!(result, Err(GridMapError::SubmapOutOfBounds));
    }

    #[test]
    fn test_rejects_empty_length() {
        let result = SubmapGeometry::new(&map(), Position::ZERO, Length::new(0.4, 2.0));
        assert_eq!(result, Err(GridMapError::InvalidSubmapSize));

        let result = SubmapGeometry::new(&map(), Position::ZERO, Length::new(-1.0, 2.0));
        assert_eq!(result, Err(GridMapError::InvalidSubmapSize));
    }

    #[test]
    fn test_single_cell_windows_on_cell_edges() {
        let mut map = GridMap::new(["elevation"]);
        map.set_geometry(Length::new(10.0, 10.0), 0.1, Position::ZERO);

        let geometry =
            SubmapGeometry::new(&map, Position::new(0.4, 0.4), Length::new(0.1, 0.1)).unwrap();
        assert_eq!(geometry.size, Size::new(1, 1));
        assert_eq!(geometry.requested_index_in_submap, Index::ZERO);
        assert_relative_eq!(geometry.position.x, 0.45, epsilon = 1e-9);
        assert_relative_eq!(geometry.position.y, 0.45, epsilon = 1e-9);

        for k in -45..=45 {
            let position = Position::new(k as f64 * 0.1, -(k as f64) * 0.1);
            let geometry = SubmapGeometry::new(&map, position, Length::new(0.1, 0.1)).unwrap();
            assert_eq!(geometry.requested_index_in_submap, Index::ZERO);
            assert!((geometry.position.x - position.x).abs() <= 0.1 + 1e-9);
            assert!((geometry.position.y - position.y).abs() <= 0.1 + 1e-9);
        }
    }
}
