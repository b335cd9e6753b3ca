//! Saving exported artwork to disk.
//!
//! The drawing surface produces PNG bytes; this module decides where they go
//! (an explicit path or a timestamped file in the configured directory).

pub mod file;
pub mod types;

pub use file::{
    FileSaveConfig, ensure_directory_exists, expand_tilde, export_surface, generate_filename,
    save_image, save_image_to,
};
pub use types::ExportError;
