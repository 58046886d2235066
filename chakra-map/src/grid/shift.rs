//! Pan planning for the circular buffer.
//!
//! Moving the window never copies cell data. The start index advances by the
//! index shift and the rows/columns that scrolled in are invalidated:
//!
//! ```text
//!   shift +3 rows (window moves toward -X), start 0 → 3
//!
//!   buffer row   0 1 2 | 3 4 5 6 7 8 9
//!   before       ─────── kept ─────────   logical 0..10
//!   after        stale   kept             rows 0..3 are now logical 7..10
//! ```
//!
//! For a negative shift the stale band ends at the old start index instead.
//! A band that reaches past the physical edge wraps into two runs.

use serde::{Deserialize, Serialize};

use crate::core::{Index, IndexShift, Size, Span, wrap_index, wrap_span};

/// Buffer axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Axis 0 (X)
    Rows,
    /// Axis 1 (Y)
    Cols,
}

/// Run of buffer rows or columns that now shows unseen area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaleBand {
    /// Which axis the run indexes
    pub axis: Axis,
    /// Buffer rows (for [`Axis::Rows`]) or columns
    pub span: Span,
}

impl StaleBand {
    /// Full-width/full-height block covered by this band.
    pub fn region(&self, size: Size) -> CellRegion {
        match self.axis {
            Axis::Rows => CellRegion::new(
                Index::new(self.span.start, 0),
                Size::new(self.span.len, size.cols),
            ),
            Axis::Cols => CellRegion::new(
                Index::new(0, self.span.start),
                Size::new(size.rows, self.span.len),
            ),
        }
    }
}

/// Rectangular block of buffer cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRegion {
    /// Top-left buffer index
    pub index: Index,
    /// Block size
    pub size: Size,
}

impl CellRegion {
    /// Create a new cell region
    #[inline]
    pub fn new(index: Index, size: Size) -> Self {
        Self { index, size }
    }

    /// Does the block cover buffer index `index`?
    #[inline]
    pub fn contains(&self, index: Index) -> bool {
        Span::new(self.index.row, self.size.rows).contains(index.row)
            && Span::new(self.index.col, self.size.cols).contains(index.col)
    }
}

/// What a pan does to the buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShiftPlan {
    /// Realized shift
    pub shift: IndexShift,
    /// Shift reaches the whole extent on at least one axis
    pub full_wipe: bool,
    /// Stale rows first, then stale columns. Empty on a full wipe.
    pub bands: Vec<StaleBand>,
    /// Start index after the pan
    pub start_index: Index,
}

impl ShiftPlan {
    /// Buffer blocks holding unseen area after the pan.
    ///
    /// A full wipe reports the whole buffer as one block.
    pub fn regions(&self, size: Size) -> Vec<CellRegion> {
        if self.full_wipe {
            return vec![CellRegion::new(Index::ZERO, size)];
        }
        self.bands.iter().map(|band| band.region(size)).collect()
    }
}

/// Stale runs on one axis for `shift` cells from `start` on a `size` axis.
///
/// Requires `0 < |shift| < size`.
fn stale_spans(shift: i64, size: usize, start: usize) -> (Span, Option<Span>) {
    let cells = shift.unsigned_abs() as usize;
    let first = if shift > 0 {
        start
    } else {
        wrap_index(start as i64 + shift, size)
    };
    wrap_span(first, cells, size)
}

/// Plan a pan by `shift` cells of a `size` buffer currently starting at `start`.
pub fn plan_shift(shift: IndexShift, size: Size, start: Index) -> ShiftPlan {
    let axes = [
        (Axis::Rows, shift.row, size.rows, start.row),
        (Axis::Cols, shift.col, size.cols, start.col),
    ];

    let full_wipe = axes
        .iter()
        .any(|&(_, s, n, _)| s != 0 && s.unsigned_abs() >= n as u64);

    let mut bands = Vec::new();
    if !full_wipe {
        for (axis, s, n, first) in axes {
            if s == 0 {
                continue;
            }
            let (run, wrapped) = stale_spans(s, n, first);
            bands.push(StaleBand { axis, span: run });
            if let Some(run) = wrapped {
                bands.push(StaleBand { axis, span: run });
            }
        }
    }

    let advance = |first: usize, s: i64, n: usize| {
        if n == 0 {
            0
        } else {
            wrap_index(first as i64 + s, n)
        }
    };

    ShiftPlan {
        shift,
        full_wipe,
        bands,
        start_index: Index::new(
            advance(start.row, shift.row, size.rows),
            advance(start.col, shift.col, size.cols),
        ),
    }
}
