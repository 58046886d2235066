//! Main ChakraConfig and conversion methods.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{Length, Position};
use crate::grid::GridConfig;

use super::error::ConfigLoadError;
use super::grid::GridSection;
use super::layers::LayerSection;

/// Full chakra-map configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct ChakraConfig {
    /// Grid geometry
    #[serde(default)]
    pub grid: GridSection,

    /// Layer names
    #[serde(default)]
    pub layers: LayerSection,
}

impl ChakraConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        let config = Self::from_yaml(&contents)?;
        info!("Loaded grid map config from {}", path.display());
        Ok(config)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.to_grid_config().validate()?;
        Ok(config)
    }

    /// Convert to GridConfig for GridMap
    pub fn to_grid_config(&self) -> GridConfig {
        GridConfig {
            length: Length::new(self.grid.length_x, self.grid.length_y),
            resolution: self.grid.resolution,
            position: Position::new(self.grid.position_x, self.grid.position_y),
            layers: self.layers.names.clone(),
            basic_layers: self.layers.basic.clone(),
            frame_id: self.grid.frame_id.clone(),
        }
    }
}
