//! File saving functionality for exported artwork.

use super::types::ExportError;
use crate::config::ExportConfig;
use crate::surface::DrawingSurface;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for file saving.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save images to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Image format extension.
    pub format: String,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join("Artboard"),
            filename_template: "artwork_%Y-%m-%d_%H%M%S".to_string(),
            format: "png".to_string(),
        }
    }
}

impl From<&ExportConfig> for FileSaveConfig {
    /// Blank settings fall back to the defaults (the Pictures directory and
    /// a timestamped name).
    fn from(config: &ExportConfig) -> Self {
        let defaults = Self::default();
        let save_directory = match config.save_directory.trim() {
            "" => defaults.save_directory,
            dir => expand_tilde(dir),
        };
        let filename_template = match config.filename_template.trim() {
            "" => defaults.filename_template,
            template => template.to_string(),
        };

        Self {
            save_directory,
            filename_template,
            format: defaults.format,
        }
    }
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
///
/// # Returns
/// Generated filename with extension
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the save directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    // Canonicalize to resolve relative paths
    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save image data to a timestamped file in the configured directory.
///
/// # Returns
/// Path to the saved file
pub fn save_image(image_data: &[u8], config: &FileSaveConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let filename = generate_filename(&config.filename_template, &config.format);
    save_image_to(image_data, &directory.join(filename))
}

/// Save image data to an explicit path, creating parent directories.
///
/// The file is restricted to user read/write on Unix.
pub fn save_image_to(image_data: &[u8], file_path: &Path) -> Result<PathBuf, ExportError> {
    if let Some(parent) = file_path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_directory_exists(parent)?;
    }

    log::info!(
        "Saving artwork to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(file_path, image_data)?;

    let written_size = fs::metadata(file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(file_path, Permissions::from_mode(0o600))?;
    }

    Ok(file_path.to_path_buf())
}

/// Exports the surface and writes it either to `output` or, when `None`,
/// to a timestamped file described by `config`.
pub fn export_surface(
    surface: &DrawingSurface,
    output: Option<&Path>,
    config: &FileSaveConfig,
) -> Result<PathBuf, ExportError> {
    let png = surface.export_image()?;
    match output {
        Some(path) => save_image_to(&png, path),
        None => save_image(&png, config),
    }
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
