//! Layer configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Layer configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerSection {
    /// Layer names in iteration order
    #[serde(default = "defaults::layer_names")]
    pub names: Vec<String>,

    /// Layers invalidated when the map pans
    #[serde(default = "defaults::basic_layers")]
    pub basic: Vec<String>,
}

impl Default for LayerSection {
    fn default() -> Self {
        Self {
            names: defaults::layer_names(),
            basic: defaults::basic_layers(),
        }
    }
}
