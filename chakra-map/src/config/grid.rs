//! Grid configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Grid configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    /// Window extent along X (meters)
    #[serde(default = "defaults::length")]
    pub length_x: f64,

    /// Window extent along Y (meters)
    #[serde(default = "defaults::length")]
    pub length_y: f64,

    /// Cell resolution (meters)
    #[serde(default = "defaults::resolution")]
    pub resolution: f64,

    /// Initial window center X
    #[serde(default)]
    pub position_x: f64,

    /// Initial window center Y
    #[serde(default)]
    pub position_y: f64,

    /// Frame the map is expressed in
    #[serde(default = "defaults::frame_id")]
    pub frame_id: String,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            length_x: 10.0,
            length_y: 10.0,
            resolution: 0.05,
            position_x: 0.0,
            position_y: 0.0,
            frame_id: "map".to_string(),
        }
    }
}
