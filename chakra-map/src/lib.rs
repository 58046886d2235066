//! # ChakraMap
//!
//! Multi-layer 2D grid map on a circular buffer, for rolling robot-centric
//! terrain maps.
//!
//! ## Overview
//!
//! A [`GridMap`] holds a fixed-size window of the world split into square
//! cells. Every named layer stores one `f32` per cell; `NaN` marks a cell
//! with no data. The window follows the robot:
//!
//! - **Pan without copying**: [`GridMap::move_to`] advances a circular start
//!   index and invalidates only the rows/columns that scrolled in
//! - **Basic layers**: the layers that get invalidated on pan and that
//!   define cell validity
//! - **Wrapped submaps**: [`GridMap::submap`] copies any window of the map,
//!   including ones that straddle the physical buffer edge
//!
//! ## Quick Start
//!
//! ```
//! use chakra_map::{GridMap, Length, Position};
//!
//! let mut map = GridMap::new(["elevation"]);
//! map.set_geometry(Length::new(10.0, 10.0), 0.5, Position::ZERO);
//! map.set_basic_layers(["elevation"]);
//! map.add("elevation", 0.0);
//!
//! map.set_at_position("elevation", Position::new(1.0, 2.0), 0.3).unwrap();
//!
//! // Follow the robot 2m forward; the value stays where it was in the world.
//! let result = map.move_to_with_regions(Position::new(2.0, 0.0));
//! assert!(result.moved);
//! assert_eq!(map.at_position("elevation", Position::new(1.0, 2.0)), Ok(0.3));
//!
//! let submap = map.submap(Position::new(2.0, 0.0), Length::new(2.0, 2.0)).unwrap();
//! assert_eq!(submap.map.size().rows, 4);
//! ```
//!
//! ## Coordinate System
//!
//! Uses ROS REP-103 convention:
//! - X: Forward, mapped onto buffer rows
//! - Y: Left, mapped onto buffer columns
//! - Index (0, 0) of the unwrapped map is the (+X, +Y) corner

#![warn(missing_docs)]

// Core types
pub mod core;

// Grid storage, conversion and panning
pub mod grid;

// Submap extraction
pub mod submap;

// File configuration
pub mod config;

pub mod error;

// Re-export commonly used types
pub use crate::core::{Index, IndexShift, Length, Position, Position3, Size};

pub use error::{GridMapError, Result};
pub use grid::{
    BufferRegion, CellRegion, ConfigError, GridConfig, GridMap, LayerMatrix, LayerMut, MapGeometry,
    MoveResult, Quadrant,
};
pub use submap::{Submap, SubmapGeometry};
