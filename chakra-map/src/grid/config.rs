//! Configuration types for the grid map.

use serde::{Deserialize, Serialize};

use crate::core::{Length, Position, round_half_away};

/// Invalid grid configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Resolution is zero, negative or not finite
    #[error("resolution must be positive, got {0}")]
    InvalidResolution(f64),

    /// Length is zero, negative or not finite on some axis
    #[error("length must be positive, got ({x}, {y})")]
    InvalidLength {
        /// Requested X extent
        x: f64,
        /// Requested Y extent
        y: f64,
    },

    /// Length rounds to no cells
    #[error("length ({x}, {y}) is smaller than one cell")]
    EmptyGrid {
        /// Requested X extent
        x: f64,
        /// Requested Y extent
        y: f64,
    },

    /// Layer listed twice
    #[error("duplicate layer '{0}'")]
    DuplicateLayer(String),

    /// Basic layer that is not a layer
    #[error("basic layer '{0}' is not in the layer list")]
    UnknownBasicLayer(String),
}

/// Grid map configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Window extent in meters (rounded to whole cells)
    pub length: Length,

    /// Meters per cell (e.g., 0.05 = 5cm cells)
    pub resolution: f64,

    /// World position of the window center
    pub position: Position,

    /// Layer names in iteration order
    pub layers: Vec<String>,

    /// Layers invalidated when the map pans
    pub basic_layers: Vec<String>,

    /// Frame the map is expressed in
    pub frame_id: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            length: Length::new(10.0, 10.0), // 200 x 200 cells
            resolution: 0.05,
            position: Position::ZERO,
            layers: vec!["elevation".to_string(), "variance".to_string()],
            basic_layers: vec!["elevation".to_string()],
            frame_id: "map".to_string(),
        }
    }
}

impl GridConfig {
    /// Create a configuration for a specific area size (in meters)
    pub fn for_area(length_x: f64, length_y: f64, resolution: f64) -> Self {
        Self {
            length: Length::new(length_x, length_y),
            resolution,
            ..Default::default()
        }
    }

    /// Number of cells per axis after rounding.
    pub fn cells(&self) -> (usize, usize) {
        let rows = round_half_away(self.length.x / self.resolution).max(0) as usize;
        let cols = round_half_away(self.length.y / self.resolution).max(0) as usize;
        (rows, cols)
    }

    /// Total cell count.
    pub fn cell_count(&self) -> usize {
        let (rows, cols) = self.cells();
        rows * cols
    }

    /// Memory used by all layer buffers in bytes.
    pub fn memory_bytes(&self) -> usize {
        // One f32 per cell per layer
        self.cell_count() * self.layers.len() * std::mem::size_of::<f32>()
    }

    /// Check geometry and layer lists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.resolution > 0.0 && self.resolution.is_finite()) {
            return Err(ConfigError::InvalidResolution(self.resolution));
        }
        if !self.length.is_positive() {
            return Err(ConfigError::InvalidLength {
                x: self.length.x,
                y: self.length.y,
            });
        }
        let (rows, cols) = self.cells();
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid {
                x: self.length.x,
                y: self.length.y,
            });
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if self.layers[..i].contains(layer) {
                return Err(ConfigError::DuplicateLayer(layer.clone()));
            }
        }
        if let Some(layer) = self.basic_layers.iter().find(|b| !self.layers.contains(b)) {
            return Err(ConfigError::UnknownBasicLayer(layer.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.resolution, 0.05);
        assert_eq!(config.cells(), (200, 200));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_for_area() {
        let config = GridConfig::for_area(4.0, 2.0, 0.1);
        assert_eq!(config.cells(), (40, 20));
        assert_eq!(config.cell_count(), 800);
    }

    #[test]
    fn test_memory_calculation() {
        let config = GridConfig::default();
        // 200 * 200 cells * 2 layers * 4 bytes
        assert_eq!(config.memory_bytes(), 320_000);
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let config = GridConfig {
            resolution: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidResolution(0.0)));

        let config = GridConfig::for_area(-1.0, 1.0, 0.1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLength { .. })
        ));

        let config = GridConfig::for_area(0.01, 1.0, 0.1);
        assert!(matches!(config.validate(), Err(ConfigError::EmptyGrid { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_layers() {
        let config = GridConfig {
            layers: vec!["a".to_string(), "a".to_string()],
            basic_layers: vec![],
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateLayer("a".to_string()))
        );

        let config = GridConfig {
            basic_layers: vec!["color".to_string()],
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownBasicLayer("color".to_string()))
        );
    }
}
