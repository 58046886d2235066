//! Multi-layer grid map on a circular buffer.

use std::collections::HashMap;

use log::{debug, trace, warn};

use crate::core::{Index, Length, Position, Position3, Size, wrap_index};
use crate::error::{GridMapError, Result};
use crate::submap::{Submap, SubmapGeometry, extract_submap};

use super::config::GridConfig;
use super::convert::{
    aligned_position_shift, index_shift_from_position_shift, index_to_position,
    is_position_within_map, position_to_index,
};
use super::geometry::MapGeometry;
use super::matrix::{LayerMatrix, LayerMut};
use super::shift::{CellRegion, plan_shift};

/// Outcome of [`GridMap::move_to_with_regions`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveResult {
    /// At least one axis shifted by one cell or more
    pub moved: bool,
    /// Buffer blocks that now show unseen area (invalidated in basic layers)
    pub new_regions: Vec<CellRegion>,
}

/// Multi-layer grid map.
///
/// Every layer is a [`LayerMatrix`] of exactly [`size`](Self::size) cells.
/// The map window pans by advancing a circular start index, so moving the
/// map never copies cell data; only the rows and columns that scrolled in
/// are invalidated, and only in the basic layers.
///
/// ```text
///   cell at buffer (i, j)  ↔  logical offset ((i, j) - start_index) mod size
///                          ↔  world = top_left - resolution * (offset + 0.5)
/// ```
#[derive(Clone, Debug, Default)]
pub struct GridMap {
    /// Layer names in insertion order
    layers: Vec<String>,
    /// Layer buffers by name
    data: HashMap<String, LayerMatrix>,
    /// Layers invalidated on pan and used for validity checks
    basic_layers: Vec<String>,
    geometry: MapGeometry,
    /// Buffer index of the logical top-left cell
    start_index: Index,
    /// Nanoseconds
    timestamp: u64,
    frame_id: String,
}

impl GridMap {
    /// Create a map with the given layers and no geometry.
    ///
    /// Duplicate names are kept once. Call [`set_geometry`](Self::set_geometry)
    /// before storing data.
    pub fn new<S: Into<String>>(layers: impl IntoIterator<Item = S>) -> Self {
        let mut map = Self::default();
        for layer in layers {
            let layer = layer.into();
            if !map.data.contains_key(&layer) {
                map.data.insert(layer.clone(), LayerMatrix::default());
                map.layers.push(layer);
            }
        }
        map
    }

    /// Create a map from a validated configuration.
    ///
    /// # Panics
    /// If the configuration geometry is not positive. Run
    /// [`GridConfig::validate`] first for untrusted input.
    pub fn from_config(config: &GridConfig) -> Self {
        let mut map = Self::new(config.layers.iter().cloned());
        map.set_basic_layers(config.basic_layers.iter().cloned());
        map.set_frame_id(config.frame_id.clone());
        map.set_geometry(config.length, config.resolution, config.position);
        map
    }

    // =========================================================================
    // GEOMETRY
    // =========================================================================

    /// Set the window geometry.
    ///
    /// Resizes every layer to `round(length / resolution)` cells, invalidates
    /// all cells and resets the start index.
    ///
    /// # Panics
    /// If `length` or `resolution` is not strictly positive.
    pub fn set_geometry(&mut self, length: Length, resolution: f64, position: Position) {
        self.apply_geometry(MapGeometry::new(length, resolution, position));
    }

    /// Set the window geometry to that of a submap.
    pub fn set_geometry_from_submap(&mut self, geometry: &SubmapGeometry) {
        self.apply_geometry(geometry.map_geometry());
    }

    fn apply_geometry(&mut self, geometry: MapGeometry) {
        for matrix in self.data.values_mut() {
            matrix.reset(geometry.size);
        }
        self.geometry = geometry;
        self.start_index = Index::ZERO;
    }

    /// Current window geometry.
    #[inline]
    pub fn geometry(&self) -> &MapGeometry {
        &self.geometry
    }

    /// Number of cells per axis.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Window extent in meters.
    #[inline]
    pub fn length(&self) -> Length {
        self.geometry.length
    }

    /// Meters per cell.
    #[inline]
    pub fn resolution(&self) -> f64 {
        self.geometry.resolution
    }

    /// World position of the window center.
    #[inline]
    pub fn position(&self) -> Position {
        self.geometry.position
    }

    /// Buffer index of the logical top-left cell.
    #[inline]
    pub fn start_index(&self) -> Index {
        self.start_index
    }

    /// Override the circular start index (wrapped into range).
    pub fn set_start_index(&mut self, start_index: Index) {
        let size = self.geometry.size;
        if size.is_empty() {
            self.start_index = Index::ZERO;
            return;
        }
        self.start_index = Index::new(
            wrap_index(start_index.row as i64, size.rows),
            wrap_index(start_index.col as i64, size.cols),
        );
    }

    // =========================================================================
    // METADATA
    // =========================================================================

    /// Timestamp in nanoseconds.
    #[inline]
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Set the timestamp in nanoseconds.
    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.timestamp = timestamp;
    }

    /// Reset the timestamp to zero.
    pub fn reset_timestamp(&mut self) {
        self.timestamp = 0;
    }

    /// Frame the map is expressed in.
    #[inline]
    pub fn frame_id(&self) -> &str {
        &self.frame_id
    }

    /// Set the frame the map is expressed in.
    pub fn set_frame_id(&mut self, frame_id: impl Into<String>) {
        self.frame_id = frame_id.into();
    }

    // =========================================================================
    // LAYERS
    // =========================================================================

    /// Layer names in insertion order.
    #[inline]
    pub fn layers(&self) -> &[String] {
        &self.layers
    }

    /// Layers invalidated on pan.
    #[inline]
    pub fn basic_layers(&self) -> &[String] {
        &self.basic_layers
    }

    /// Set the layers invalidated on pan and used by [`is_valid`](Self::is_valid).
    pub fn set_basic_layers<S: Into<String>>(&mut self, layers: impl IntoIterator<Item = S>) {
        self.basic_layers = layers.into_iter().map(Into::into).collect();
    }

    /// Is there a layer with this name?
    #[inline]
    pub fn exists(&self, layer: &str) -> bool {
        self.data.contains_key(layer)
    }

    /// Add a layer filled with `value`, or overwrite an existing one.
    pub fn add(&mut self, layer: impl Into<String>, value: f32) {
        let matrix = LayerMatrix::filled(self.size(), value);
        self.add_data(layer, matrix);
    }

    /// Add a layer with the given data, or overwrite an existing one.
    ///
    /// An overwritten layer keeps its place in the layer order.
    ///
    /// # Panics
    /// If `data` does not match the map size.
    pub fn add_data(&mut self, layer: impl Into<String>, data: LayerMatrix) {
        assert_eq!(
            data.size(),
            self.size(),
            "layer data must match the map size"
        );
        let layer = layer.into();
        if !self.data.contains_key(&layer) {
            self.layers.push(layer.clone());
        }
        self.data.insert(layer, data);
    }

    /// Layer data.
    pub fn get(&self, layer: &str) -> Result<&LayerMatrix> {
        self.data
            .get(layer)
            .ok_or_else(|| GridMapError::LayerNotFound(layer.to_string()))
    }

    /// Mutable view of layer data. Cells can be written, the shape is fixed.
    ///
    /// Use [`add_data`](Self::add_data) to replace a layer wholesale.
    pub fn get_mut(&mut self, layer: &str) -> Result<LayerMut<'_>> {
        self.matrix_mut(layer).map(LayerMut::new)
    }

    fn matrix_mut(&mut self, layer: &str) -> Result<&mut LayerMatrix> {
        self.data
            .get_mut(layer)
            .ok_or_else(|| GridMapError::LayerNotFound(layer.to_string()))
    }

    /// Remove a layer. Also drops it from the basic layers.
    ///
    /// Returns false when no such layer existed.
    pub fn erase(&mut self, layer: &str) -> bool {
        if self.data.remove(layer).is_none() {
            return false;
        }
        self.layers.retain(|l| l != layer);
        self.basic_layers.retain(|l| l != layer);
        true
    }

    // =========================================================================
    // CELL ACCESS
    // =========================================================================

    /// Value of `layer` at buffer `index`.
    pub fn at(&self, layer: &str, index: Index) -> Result<f32> {
        self.get(layer)?
            .get(index)
            .ok_or(GridMapError::IndexOutOfBounds {
                row: index.row,
                col: index.col,
            })
    }

    /// Write `value` into `layer` at buffer `index`.
    pub fn set_at(&mut self, layer: &str, index: Index, value: f32) -> Result<()> {
        let cell = self
            .matrix_mut(layer)?
            .get_mut(index)
            .ok_or(GridMapError::IndexOutOfBounds {
                row: index.row,
                col: index.col,
            })?;
        *cell = value;
        Ok(())
    }

    /// Value of `layer` at world `position`.
    pub fn at_position(&self, layer: &str, position: Position) -> Result<f32> {
        let index = self.index_or_err(position)?;
        self.at(layer, index)
    }

    /// Write `value` into `layer` at world `position`.
    pub fn set_at_position(&mut self, layer: &str, position: Position, value: f32) -> Result<()> {
        let index = self.index_or_err(position)?;
        self.set_at(layer, index, value)
    }

    fn index_or_err(&self, position: Position) -> Result<Index> {
        self.get_index(position)
            .ok_or(GridMapError::PositionOutOfBounds {
                x: position.x,
                y: position.y,
            })
    }

    /// Buffer index of the cell covering `position`.
    #[inline]
    pub fn get_index(&self, position: Position) -> Option<Index> {
        position_to_index(position, &self.geometry, self.start_index)
    }

    /// Cell-center world position of buffer `index`.
    #[inline]
    pub fn get_position(&self, index: Index) -> Option<Position> {
        index_to_position(index, &self.geometry, self.start_index)
    }

    /// Is `position` inside the map window?
    #[inline]
    pub fn is_inside(&self, position: Position) -> bool {
        is_position_within_map(position, &self.geometry)
    }

    /// Are all basic layers finite at `index`?
    ///
    /// False when there are no basic layers.
    pub fn is_valid(&self, index: Index) -> bool {
        matches!(self.is_valid_in_all(index, &self.basic_layers), Ok(true))
    }

    /// Is `layer` finite at `index`?
    pub fn is_valid_in(&self, index: Index, layer: &str) -> Result<bool> {
        Ok(self.at(layer, index)?.is_finite())
    }

    /// Are all `layers` finite at `index`? False for an empty set.
    pub fn is_valid_in_all<S: AsRef<str>>(&self, index: Index, layers: &[S]) -> Result<bool> {
        if layers.is_empty() {
            return Ok(false);
        }
        for layer in layers {
            if !self.is_valid_in(index, layer.as_ref())? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Cell center of `index` with the value of `layer` as height.
    ///
    /// `Ok(None)` when the cell holds no data.
    pub fn get_position3(&self, layer: &str, index: Index) -> Result<Option<Position3>> {
        let z = self.at(layer, index)?;
        if !z.is_finite() {
            return Ok(None);
        }
        Ok(self
            .get_position(index)
            .map(|p| Position3::new(p.x, p.y, z as f64)))
    }

    /// Vector stored in layers `{prefix}x`, `{prefix}y`, `{prefix}z`.
    ///
    /// `Ok(None)` when any component holds no data.
    pub fn get_vector(&self, prefix: &str, index: Index) -> Result<Option<[f32; 3]>> {
        let mut vector = [0.0; 3];
        for (value, axis) in vector.iter_mut().zip(["x", "y", "z"]) {
            let v = self.at(&format!("{prefix}{axis}"), index)?;
            if !v.is_finite() {
                return Ok(None);
            }
            *value = v;
        }
        Ok(Some(vector))
    }

    /// Number of cells of `layer` holding data.
    pub fn count_valid(&self, layer: &str) -> Result<usize> {
        Ok(self.get(layer)?.count_valid())
    }

    // =========================================================================
    // CLEARING
    // =========================================================================

    /// Invalidate every cell of `layer`.
    pub fn clear(&mut self, layer: &str) -> Result<()> {
        self.matrix_mut(layer)?.fill(f32::NAN);
        Ok(())
    }

    /// Invalidate every cell of the basic layers.
    pub fn clear_basic(&mut self) {
        for layer in &self.basic_layers {
            if let Some(matrix) = self.data.get_mut(layer) {
                matrix.fill(f32::NAN);
            }
        }
    }

    /// Invalidate every cell of every layer.
    pub fn clear_all(&mut self) {
        for matrix in self.data.values_mut() {
            matrix.fill(f32::NAN);
        }
    }

    fn clear_region(&mut self, region: CellRegion) {
        for layer in &self.basic_layers {
            if let Some(matrix) = self.data.get_mut(layer) {
                matrix.fill_block(region.index, region.size, f32::NAN);
            }
        }
    }

    // =========================================================================
    // MOVING
    // =========================================================================

    /// Re-center the map on `position`, snapped to whole cells.
    ///
    /// Returns whether the map moved.
    pub fn move_to(&mut self, position: Position) -> bool {
        self.move_to_with_regions(position).moved
    }

    /// Re-center the map on `position`, snapped to whole cells, and report
    /// the buffer blocks that now show unseen area.
    ///
    /// Data in the overlap of the old and new window is kept. Scrolled-in
    /// cells are invalidated in the basic layers only; other layers keep
    /// stale values there. A shift of the whole extent or more on either axis
    /// clears the basic layers and reports the whole buffer.
    pub fn move_to_with_regions(&mut self, position: Position) -> MoveResult {
        let resolution = self.geometry.resolution;
        if resolution <= 0.0 {
            return MoveResult::default();
        }

        let size = self.geometry.size;
        let delta = position - self.geometry.position;
        let shift = index_shift_from_position_shift(delta, resolution, size);
        if shift.is_zero() {
            return MoveResult::default();
        }

        let plan = plan_shift(shift, size, self.start_index);
        let new_regions = plan.regions(size);

        if plan.full_wipe {
            debug!(
                "Shift ({}, {}) exceeds {}x{} map, clearing basic layers",
                shift.row, shift.col, size.rows, size.cols
            );
            self.clear_basic();
        } else {
            for region in &new_regions {
                trace!(
                    "Invalidating {}x{} cells at ({}, {})",
                    region.size.rows, region.size.cols, region.index.row, region.index.col
                );
                self.clear_region(*region);
            }
        }

        self.start_index = plan.start_index;
        self.geometry.position += aligned_position_shift(delta, resolution);

        debug!(
            "Moved map by ({}, {}) wrapped cells to ({:.3}, {:.3}), start index ({}, {}), {} new regions",
            shift.row,
            shift.col,
            self.geometry.position.x,
            self.geometry.position.y,
            self.start_index.row,
            self.start_index.col,
            new_regions.len()
        );

        MoveResult {
            moved: true,
            new_regions,
        }
    }

    // =========================================================================
    // SUBMAPS
    // =========================================================================

    /// Copy the window of `length` centered near `position` into a new map.
    ///
    /// The window is snapped to the cells of this map. The result shares
    /// layers, basic layers, timestamp and frame and has a zero start index.
    ///
    /// # Errors
    /// [`GridMapError::SubmapOutOfBounds`] when the window leaves the map,
    /// [`GridMapError::InvalidSubmapSize`] when it covers no cells.
    pub fn submap(&self, position: Position, length: Length) -> Result<Submap> {
        let geometry = SubmapGeometry::new(self, position, length).inspect_err(|e| {
            warn!(
                "Rejected submap at ({:.3}, {:.3}) of ({:.3}, {:.3}): {}",
                position.x, position.y, length.x, length.y, e
            );
        })?;
        let map = extract_submap(self, &geometry)?;
        Ok(Submap {
            map,
            requested_index: geometry.requested_index_in_submap,
        })
    }
}
