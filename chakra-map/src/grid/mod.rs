//! Multi-layer grid map on a circular buffer.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                         GridMap                           │
//! ├───────────────────────────────────────────────────────────┤
//! │  layers: "elevation", "variance", ...  (LayerMatrix each) │
//! │  basic_layers: invalidated on pan                          │
//! │  geometry: length, resolution, position, size              │
//! │  start_index: buffer index of logical (0, 0)               │
//! └───────────────────────────────────────────────────────────┘
//!          │ move_to                        │ submap
//!          ▼                                ▼
//!   plan_shift → stale bands        buffer_regions → 1/2/4 blocks
//! ```
//!
//! ## Coordinate Frame
//!
//! Axis 0 (rows) follows world X, axis 1 (columns) follows world Y. Logical
//! offset (0, 0) is the (+X, +Y) corner; offsets grow toward -X and -Y.

mod config;
mod convert;
mod geometry;
mod map;
mod matrix;
mod region;
mod shift;

pub use config::{ConfigError, GridConfig};
pub use convert::{
    aligned_position_shift, buffer_index_from_offset, index_shift_from_position_shift,
    index_to_position, is_position_within_map, logical_offset, offset_from_buffer_index,
    position_of_offset, position_shift_from_index_shift, position_to_index,
};
pub(crate) use convert::clamped_logical_offset;
pub use geometry::MapGeometry;
pub use map::{GridMap, MoveResult};
pub use matrix::{LayerMatrix, LayerMut};
pub use region::{BufferRegion, Quadrant, buffer_regions};
pub use shift::{Axis, CellRegion, ShiftPlan, StaleBand, plan_shift};
