//! # Render Error Types
//!
//! Construction-time failures. Per-frame drawing never fails: missing
//! sprites draw nothing and off-screen pixels are clipped.

use thiserror::Error;

/// Errors raised while building render targets and maps.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The pixel buffer could not be allocated.
    #[error("failed to allocate {width}x{height} pixel buffer")]
    Allocation {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// A zero-sized buffer or grid was requested.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// An explicit tile grid does not match `cols * rows`.
    #[error("tile grid has {actual} tiles, expected {expected}")]
    TileCountMismatch {
        /// `cols * rows`.
        expected: usize,
        /// Length of the supplied grid.
        actual: usize,
    },
}

/// Result type for render construction.
pub type RenderResult<T> = Result<T, RenderError>;
