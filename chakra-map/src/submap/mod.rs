//! Submap extraction.
//!
//! A submap is an independent [`GridMap`] holding a copy of a rectangular
//! window of a source map. The window may straddle the physical edge of the
//! source buffer; the copy is always unwrapped.
//!
//! ```text
//!   source (start = 8)          submap (start = 0)
//!   ┌────────────┐              ┌──────┐
//!   │▓▓        ▓▓│  rows 0..2    │▓▓▓▓▓▓│
//!   │            │      ──▶     │▓▓▓▓▓▓│
//!   │▓▓        ▓▓│  rows 8..10  └──────┘
//!   └────────────┘
//! ```

mod extract;
mod geometry;

pub use extract::extract_submap;
pub use geometry::SubmapGeometry;

use crate::core::Index;
use crate::grid::GridMap;

/// Extracted submap and where the requested center landed in it.
#[derive(Clone, Debug)]
pub struct Submap {
    /// Copied window
    pub map: GridMap,
    /// Buffer index of the requested center inside [`map`](Self::map)
    pub requested_index: Index,
}
