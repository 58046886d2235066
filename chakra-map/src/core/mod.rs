//! Core types for the chakra-map grid library.
//!
//! This module provides the value types shared by every component:
//! - [`Position`], [`Position3`] and [`Length`]: world coordinates in meters
//! - [`Index`], [`Size`] and [`IndexShift`]: buffer cell coordinates
//! - [`math`]: the modular arithmetic behind the circular buffer
//!
//! ## Coordinate Frame
//!
//! World coordinates follow ROS REP-103 (X forward, Y left). The buffer is
//! mirrored on both axes: row 0 of the map's logical top-left corner sits at
//! the `+X` edge, column 0 at the `+Y` edge.
//!
//! ```text
//!            +X
//!             ↑
//!   +Y ←──────┼──────
//!     ┌───────────────┐   logical (0, 0) = top-left
//!     │(0,0)  ...     │
//!     │  .            │
//!     │  .   center   │
//!     │               │
//!     │     (rows-1,  │
//!     │      cols-1) ●│
//!     └───────────────┘
//! ```

pub mod math;
mod point;

pub use math::{Span, round_half_away, wrap_index, wrap_span};
pub use point::{Index, IndexShift, Length, Position, Position3, Size};
