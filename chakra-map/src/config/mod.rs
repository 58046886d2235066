//! Configuration loading for chakra-map.
//!
//! Loads grid geometry and layer names from a single YAML file with sensible
//! defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chakra_map::GridMap;
//! use chakra_map::config::ChakraConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = ChakraConfig::load_default()?;
//!
//! let map = GridMap::from_config(&config.to_grid_config());
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   length_x: 10.0    # meters
//!   length_y: 10.0
//!   resolution: 0.05  # 5cm cells
//!   frame_id: map
//!
//! layers:
//!   names: [elevation, variance]
//!   basic: [elevation]
//! ```

mod chakra;
mod defaults;
mod error;
mod grid;
mod layers;

pub use chakra::ChakraConfig;
pub use error::ConfigLoadError;

pub use grid::GridSection;
pub use layers::LayerSection;
