//! Decomposition of wrapped index ranges into contiguous buffer blocks.
//!
//! A range of the circular buffer that crosses a physical edge is stored as
//! up to four separate blocks. Each block is tagged with the corner of the
//! output rectangle it fills:
//!
//! ```text
//!   buffer (start = 8, 4x4 request on 10x10)     output
//!   ┌──┬──────────────┬──┐                     ┌────┬────┐
//!   │BR│              │BL│  rows 0..2          │ TL │ TR │
//!   ├──┘              └──┤                     ├────┼────┤
//!   │                    │                     │ BL │ BR │
//!   ├──┐              ┌──┤                     └────┴────┘
//!   │TR│              │TL│  rows 8..10
//!   └──┴──────────────┴──┘
//!   cols 0..2     cols 8..10
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Index, Size, Span, wrap_span};
use crate::error::{GridMapError, Result};

/// Corner of the output rectangle filled by a [`BufferRegion`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Neither axis wrapped before this block
    TopLeft,
    /// Columns wrapped
    TopRight,
    /// Rows wrapped
    BottomLeft,
    /// Both axes wrapped
    BottomRight,
}

impl Quadrant {
    /// Quadrant of the block holding the second (wrapped) run on each axis.
    #[inline]
    pub fn from_wrapped(row_wrapped: bool, col_wrapped: bool) -> Self {
        match (row_wrapped, col_wrapped) {
            (false, false) => Quadrant::TopLeft,
            (false, true) => Quadrant::TopRight,
            (true, false) => Quadrant::BottomLeft,
            (true, true) => Quadrant::BottomRight,
        }
    }

    /// Is this block below the first row run?
    #[inline]
    pub fn row_wrapped(&self) -> bool {
        matches!(self, Quadrant::BottomLeft | Quadrant::BottomRight)
    }

    /// Is this block right of the first column run?
    #[inline]
    pub fn col_wrapped(&self) -> bool {
        matches!(self, Quadrant::TopRight | Quadrant::BottomRight)
    }
}

/// Contiguous block of the source buffer and the output corner it fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferRegion {
    /// Top-left buffer index of the block
    pub index: Index,
    /// Block size
    pub size: Size,
    /// Output corner
    pub quadrant: Quadrant,
}

impl BufferRegion {
    /// Create a new buffer region
    #[inline]
    pub fn new(index: Index, size: Size, quadrant: Quadrant) -> Self {
        Self {
            index,
            size,
            quadrant,
        }
    }

    /// Top-left index of this block inside an output rectangle of `output` size.
    ///
    /// Blocks are anchored on their corner: a `TopRight` block ends at the
    /// output's last column, a `BottomLeft` block at its last row.
    #[inline]
    pub fn destination_index(&self, output: Size) -> Index {
        let row = if self.quadrant.row_wrapped() {
            output.rows - self.size.rows
        } else {
            0
        };
        let col = if self.quadrant.col_wrapped() {
            output.cols - self.size.cols
        } else {
            0
        };
        Index::new(row, col)
    }

    /// Does the block cover buffer index `index`?
    #[inline]
    pub fn contains(&self, index: Index) -> bool {
        Span::new(self.index.row, self.size.rows).contains(index.row)
            && Span::new(self.index.col, self.size.cols).contains(index.col)
    }
}

/// Split a `size` request starting at buffer index `top_left` into
/// contiguous blocks of a `buffer_size` circular buffer.
///
/// Yields 1, 2 or 4 regions, `TopLeft` first. The union of the regions tiles
/// the request exactly.
///
/// # Errors
/// [`GridMapError::RegionExceedsBuffer`] when the request is empty, larger
/// than the buffer, or starts outside it.
///
/// # Example
/// ```
/// use chakra_map::core::{Index, Size};
/// use chakra_map::grid::{Quadrant, buffer_regions};
///
/// let regions = buffer_regions(Index::new(8, 8), Size::new(4, 4), Size::new(10, 10)).unwrap();
/// assert_eq!(regions.len(), 4);
/// assert_eq!(regions[3].quadrant, Quadrant::BottomRight);
/// assert_eq!(regions[3].index, Index::new(0, 0));
/// ```
pub fn buffer_regions(top_left: Index, size: Size, buffer_size: Size) -> Result<Vec<BufferRegion>> {
    if size.is_empty() || !buffer_size.fits(size) || !buffer_size.contains(top_left) {
        return Err(GridMapError::RegionExceedsBuffer {
            rows: size.rows,
            cols: size.cols,
        });
    }

    let (row_first, row_second) = wrap_span(top_left.row, size.rows, buffer_size.rows);
    let (col_first, col_second) = wrap_span(top_left.col, size.cols, buffer_size.cols);

    let rows = [Some(row_first), row_second];
    let cols = [Some(col_first), col_second];

    let mut regions = Vec::with_capacity(4);
    for (row_wrapped, row_span) in [false, true].into_iter().zip(rows) {
        let Some(row_span) = row_span else { continue };
        for (col_wrapped, col_span) in [false, true].into_iter().zip(cols) {
            let Some(col_span) = col_span else { continue };
            regions.push(BufferRegion::new(
                Index::new(row_span.start, col_span.start),
                Size::new(row_span.len, col_span.len),
                Quadrant::from_wrapped(row_wrapped, col_wrapped),
            ));
        }
    }

    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_region() {
        let regions = buffer_regions(Index::new(2, 3), Size::new(4, 5), Size::new(10, 10)).unwrap();
        assert_eq!(
            regions,
            vec![BufferRegion::new(
                Index::new(2, 3),
                Size::new(4, 5),
                Quadrant::TopLeft
            )]
        );
    }

    #[test]
    fn test_rows_wrap() {
        let regions = buffer_regions(Index::new(8, 0), Size::new(4, 10), Size::new(10, 10)).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].quadrant, Quadrant::TopLeft);
        assert_eq!(regions[0].index, Index::new(8, 0));
        assert_eq!(regions[0].size, Size::new(2, 10));
        assert_eq!(regions[1].quadrant, Quadrant::BottomLeft);
        assert_eq!(regions[1].index, Index::new(0, 0));
        assert_eq!(regions[1].size, Size::new(2, 10));
    }

    #[test]
    fn test_cols_wrap() {
        let regions = buffer_regions(Index::new(1, 7), Size::new(3, 6), Size::new(10, 10)).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].size, Size::new(3, 3));
        assert_eq!(regions[1].quadrant, Quadrant::TopRight);
        assert_eq!(regions[1].index, Index::new(1, 0));
        assert_eq!(regions[1].size, Size::new(3, 3));
    }

    #[test]
    fn test_four_quadrants() {
        let regions = buffer_regions(Index::new(8, 8), Size::new(4, 4), Size::new(10, 10)).unwrap();
        let expected = [
            (Quadrant::TopLeft, Index::new(8, 8)),
            (Quadrant::TopRight, Index::new(8, 0)),
            (Quadrant::BottomLeft, Index::new(0, 8)),
            (Quadrant::BottomRight, Index::new(0, 0)),
        ];
        assert_eq!(regions.len(), 4);
        for (region, (quadrant, index)) in regions.iter().zip(expected) {
            assert_eq!(region.quadrant, quadrant);
            assert_eq!(region.index, index);
            assert_eq!(region.size, Size::new(2, 2));
        }
    }

    #[test]
    fn test_destination_index() {
        let output = Size::new(4, 5);
        let region = BufferRegion::new(Index::new(0, 0), Size::new(1, 2), Quadrant::BottomRight);
        assert_eq!(region.destination_index(output), Index::new(3, 3));

        let region = BufferRegion::new(Index::new(0, 0), Size::new(3, 2), Quadrant::TopRight);
        assert_eq!(region.destination_index(output), Index::new(0, 3));

        let region = BufferRegion::new(Index::new(0, 0), Size::new(3, 2), Quadrant::TopLeft);
        assert_eq!(region.destination_index(output), Index::ZERO);
    }

    #[test]
    fn test_rejects_oversized_request() {
        let buffer = Size::new(10, 10);
        assert!(buffer_regions(Index::new(0, 0), Size::new(11, 1), buffer).is_err());
        assert!(buffer_regions(Index::new(10, 0), Size::new(1, 1), buffer).is_err());
        assert!(buffer_regions(Index::new(0, 0), Size::new(0, 3), buffer).is_err());
    }

    #[test]
    fn test_full_buffer_with_offset_start() {
        let buffer = Size::new(5, 5);
        let regions = buffer_regions(Index::new(3, 0), buffer, buffer).unwrap();
        let covered: usize = regions.iter().map(|r| r.size.cell_count()).sum();
        assert_eq!(covered, buffer.cell_count());
    }
}
