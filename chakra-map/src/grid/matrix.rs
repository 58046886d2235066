//! Dense per-layer cell buffer.

use std::ops::Deref;

use crate::core::{Index, Size};
use crate::error::{GridMapError, Result};

/// Dense row-major `f32` buffer for one layer.
///
/// Cells hold `NaN` when they carry no data. The shape is fixed at
/// construction; only [`GridMap`](crate::GridMap) resizes layers, so every
/// layer of a map always matches the map size.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LayerMatrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl LayerMatrix {
    /// Create a `size` buffer filled with `value`.
    pub fn filled(size: Size, value: f32) -> Self {
        Self {
            data: vec![value; size.cell_count()],
            rows: size.rows,
            cols: size.cols,
        }
    }

    /// Create a `size` buffer with every cell invalid.
    pub fn invalid(size: Size) -> Self {
        Self::filled(size, f32::NAN)
    }

    /// Wrap row-major `data`.
    ///
    /// # Errors
    /// [`GridMapError::InvalidShape`] when `data.len() != rows * cols`.
    pub fn from_vec(size: Size, data: Vec<f32>) -> Result<Self> {
        if data.len() != size.cell_count() {
            return Err(GridMapError::InvalidShape {
                expected_len: size.cell_count(),
                actual_len: data.len(),
            });
        }
        Ok(Self {
            data,
            rows: size.rows,
            cols: size.cols,
        })
    }

    /// Build a buffer by evaluating `f` at every index.
    pub fn from_fn(size: Size, mut f: impl FnMut(Index) -> f32) -> Self {
        let mut data = Vec::with_capacity(size.cell_count());
        for row in 0..size.rows {
            for col in 0..size.cols {
                data.push(f(Index::new(row, col)));
            }
        }
        Self {
            data,
            rows: size.rows,
            cols: size.cols,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Buffer shape.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.rows, self.cols)
    }

    /// Row-major cell values.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable row-major cell values. The length cannot change.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, index: Index) -> Option<usize> {
        if index.row < self.rows && index.col < self.cols {
            Some(index.row * self.cols + index.col)
        } else {
            None
        }
    }

    /// Value at `index`.
    #[inline]
    pub fn get(&self, index: Index) -> Option<f32> {
        self.offset(index).map(|i| self.data[i])
    }

    /// Mutable value at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: Index) -> Option<&mut f32> {
        self.offset(index).map(move |i| &mut self.data[i])
    }

    /// Write `value` at `index`. Returns false when out of range.
    #[inline]
    pub fn set(&mut self, index: Index, value: f32) -> bool {
        match self.get_mut(index) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Fill every cell with `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Fill a `size` block starting at `origin` with `value`.
    ///
    /// # Panics
    /// If the block does not fit inside the buffer.
    pub fn fill_block(&mut self, origin: Index, size: Size, value: f32) {
        self.assert_block(origin, size);
        for row in origin.row..origin.row + size.rows {
            let start = row * self.cols + origin.col;
            self.data[start..start + size.cols].fill(value);
        }
    }

    /// Copy a `size` block at `source_origin` of `source` into this buffer at
    /// `origin`.
    ///
    /// # Panics
    /// If the block does not fit inside either buffer.
    pub fn copy_block(&mut self, origin: Index, source: &LayerMatrix, source_origin: Index, size: Size) {
        self.assert_block(origin, size);
        source.assert_block(source_origin, size);
        for r in 0..size.rows {
            let dst = (origin.row + r) * self.cols + origin.col;
            let src = (source_origin.row + r) * source.cols + source_origin.col;
            self.data[dst..dst + size.cols].copy_from_slice(&source.data[src..src + size.cols]);
        }
    }

    /// Number of finite (valid) cells.
    pub fn count_valid(&self) -> usize {
        self.data.iter().filter(|v| v.is_finite()).count()
    }

    /// Resize to `size` and invalidate every cell.
    pub(crate) fn reset(&mut self, size: Size) {
        self.data.clear();
        self.data.resize(size.cell_count(), f32::NAN);
        self.rows = size.rows;
        self.cols = size.cols;
    }

    fn assert_block(&self, origin: Index, size: Size) {
        assert!(
            origin.row + size.rows <= self.rows && origin.col + size.cols <= self.cols,
            "block {}x{} at ({}, {}) exceeds {}x{} buffer",
            size.rows,
            size.cols,
            origin.row,
            origin.col,
            self.rows,
            self.cols
        );
    }
}

/// Mutable view of a layer whose shape is fixed.
///
/// Cell values can be written, but the matrix itself cannot be replaced or
/// resized, so it keeps matching the map size:
///
/// ```compile_fail
/// use chakra_map::{GridMap, LayerMatrix, Length, Position, Size};
///
/// let mut map = GridMap::new(["elevation"]);
/// map.set_geometry(Length::new(2.0, 2.0), 1.0, Position::ZERO);
/// let mut layer = map.get_mut("elevation").unwrap();
/// *layer = LayerMatrix::filled(Size::new(1, 1), 0.0);
/// ```
#[derive(Debug)]
pub struct LayerMut<'a> {
    matrix: &'a mut LayerMatrix,
}

impl<'a> LayerMut<'a> {
    pub(crate) fn new(matrix: &'a mut LayerMatrix) -> Self {
        Self { matrix }
    }

    /// Mutable row-major cell values.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        self.matrix.as_mut_slice()
    }

    /// Mutable value at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: Index) -> Option<&mut f32> {
        self.matrix.get_mut(index)
    }

    /// Write `value` at `index`. Returns false when out of range.
    #[inline]
    pub fn set(&mut self, index: Index, value: f32) -> bool {
        self.matrix.set(index, value)
    }

    /// Fill every cell with `value`.
    pub fn fill(&mut self, value: f32) {
        self.matrix.fill(value);
    }

    /// See [`LayerMatrix::fill_block`].
    pub fn fill_block(&mut self, origin: Index, size: Size, value: f32) {
        self.matrix.fill_block(origin, size, value);
    }

    /// See [`LayerMatrix::copy_block`].
    pub fn copy_block(&mut self, origin: Index, source: &LayerMatrix, source_origin: Index, size: Size) {
        self.matrix.copy_block(origin, source, source_origin, size);
    }
}

impl Deref for LayerMut<'_> {
    type Target = LayerMatrix;

    fn deref(&self) -> &LayerMatrix {
        self.matrix
    }
}
