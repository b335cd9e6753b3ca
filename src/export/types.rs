//! Error types for saving exported artwork.

use crate::surface::SurfaceError;
use thiserror::Error;

/// Errors that can occur while exporting the canvas to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to save image: {0}")]
    SaveError(#[from] std::io::Error),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
