//! Configuration loading errors.

use crate::grid::ConfigError;

/// Config load error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// File parsed but describes an unusable grid
    #[error("Invalid config: {0}")]
    Invalid(#[from] ConfigError),
}
