//! Error types for chakra-map

/// Result type alias
pub type Result<T> = std::result::Result<T, GridMapError>;

/// Recoverable grid map errors.
///
/// Degenerate geometry and layer shape mismatches are programming errors and
/// panic at the call site instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridMapError {
    /// No layer with this name
    #[error("No map layer '{0}' available")]
    LayerNotFound(String),

    /// Position outside the map window
    #[error("Position ({x:.3}, {y:.3}) is outside the map")]
    PositionOutOfBounds {
        /// X coordinate of the rejected position
        x: f64,
        /// Y coordinate of the rejected position
        y: f64,
    },

    /// Buffer index outside the buffer
    #[error("Index ({row}, {col}) is outside the buffer")]
    IndexOutOfBounds {
        /// Rejected row
        row: usize,
        /// Rejected column
        col: usize,
    },

    /// Requested submap does not fit inside the map
    #[error("Submap does not fit inside the map")]
    SubmapOutOfBounds,

    /// Requested submap length rounds to no cells
    #[error("Submap length must cover at least one cell")]
    InvalidSubmapSize,

    /// Requested region is larger than the buffer or starts outside it
    #[error("Region of {rows}x{cols} cells does not fit the buffer")]
    RegionExceedsBuffer {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// Raw buffer length does not match the requested shape
    #[error("Invalid buffer shape: expected {expected_len} values, got {actual_len}")]
    InvalidShape {
        /// rows * cols
        expected_len: usize,
        /// Length of the supplied data
        actual_len: usize,
    },
}
