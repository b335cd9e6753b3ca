//! Error types for the drawing surface.

use thiserror::Error;

/// Errors reported by [`DrawingSurface`](super::DrawingSurface) operations.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// Export failed to produce image bytes. Not retried.
    #[error("Failed to encode canvas: {0}")]
    Encoding(String),

    /// A non-positive line width or surface dimension was supplied.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The raster backend could not allocate the canvas.
    #[error("Raster backend unavailable: {0}")]
    Backend(String),
}

impl From<cairo::IoError> for SurfaceError {
    fn from(err: cairo::IoError) -> Self {
        SurfaceError::Encoding(err.to_string())
    }
}
