//! Configuration file support for artboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/artboard/config.toml`. Settings include the canvas size and
//! background, the initial tool state, and where exported images are saved.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, PreviewMode};
pub use types::{CanvasConfig, DrawingConfig, ExportConfig};

use crate::surface::SurfaceOptions;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted canvas edge in pixels.
const MAX_DIMENSION: i32 = 8192;
/// Line width range offered by the brush size slider.
const LINE_WIDTH_RANGE: (i32, i32) = (1, 50);

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1024
/// height = 576
/// background = "#4A1D96"
/// preview_mode = "overlay"
///
/// [drawing]
/// default_tool = "pen"
/// default_color = "white"
/// default_line_width = 5
///
/// [export]
/// save_directory = "~/Pictures/Artboard"
/// filename_template = "artwork_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size, background, and shape preview behavior
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Initial tool state (tool, color, line width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Where exported images are written
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 1 - 8192
    /// - `drawing.default_line_width`: 1 - 50
    /// - colors must be a known name, `#RRGGBB`, or an RGB array
    fn validate_and_clamp(&mut self) {
        if !(1..=MAX_DIMENSION).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width,
                MAX_DIMENSION
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_DIMENSION);
        }

        if !(1..=MAX_DIMENSION).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height,
                MAX_DIMENSION
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_DIMENSION);
        }

        let (min_width, max_width) = LINE_WIDTH_RANGE;
        if !(min_width..=max_width).contains(&self.drawing.default_line_width) {
            log::warn!(
                "Invalid default_line_width {}, clamping to {}-{} range",
                self.drawing.default_line_width,
                min_width,
                max_width
            );
            self.drawing.default_line_width =
                self.drawing.default_line_width.clamp(min_width, max_width);
        }

        if self.canvas.background.try_to_color().is_none() {
            log::warn!(
                "Invalid canvas background {:?}, falling back to default",
                self.canvas.background
            );
            self.canvas.background = CanvasConfig::default().background;
        }

        if self.drawing.default_color.try_to_color().is_none() {
            log::warn!(
                "Invalid default_color {:?}, falling back to default",
                self.drawing.default_color
            );
            self.drawing.default_color = DrawingConfig::default().default_color;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/artboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("artboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from TOML text and validates it.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        // Create directory
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file, for editors and tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Builds drawing surface options from the validated settings.
    pub fn surface_options(&self) -> SurfaceOptions {
        SurfaceOptions {
            width: self.canvas.width,
            height: self.canvas.height,
            background: self.canvas.background.to_color(),
            tool: self.drawing.default_tool,
            color: self.drawing.default_color.to_color(),
            line_width: self.drawing.default_line_width,
            preview_mode: self.canvas.preview_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{PURPLE, RED, WHITE};
    use crate::input::Tool;

    #[test]
    fn empty_config_uses_drawing_page_defaults() {
        let config = Config::from_toml_str("").unwrap();
        let options = config.surface_options();
        assert_eq!(options, SurfaceOptions::default());
        assert_eq!(options.background, PURPLE);
        assert_eq!(options.color, WHITE);
    }

    #[test]
    fn parses_all_sections() {
        let config = Config::from_toml_str(
            r##"
            [canvas]
            width = 400
            height = 300
            background = "black"
            preview_mode = "scratch"

            [drawing]
            default_tool = "square"
            default_color = [255, 0, 0]
            default_line_width = 12

            [export]
            save_directory = "/tmp/art"
            filename_template = "piece_%H%M"
            "##,
        )
        .unwrap();

        let options = config.surface_options();
        assert_eq!((options.width, options.height), (400, 300));
        assert_eq!(options.background.to_rgb8(), [0, 0, 0]);
        assert_eq!(options.preview_mode, PreviewMode::Scratch);
        assert_eq!(options.tool, Tool::Rectangle);
        assert_eq!(options.color, RED);
        assert_eq!(options.line_width, 12);
        assert_eq!(config.export.save_directory, "/tmp/art");
        assert_eq!(config.export.filename_template, "piece_%H%M");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml_str(
            r#"
            [canvas]
            width = 0
            height = 100000

            [drawing]
            default_line_width = 99
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, 8192);
        assert_eq!(config.drawing.default_line_width, 50);
    }

    #[test]
    fn invalid_colors_fall_back_to_defaults() {
        let config = Config::from_toml_str(
            r##"
            [canvas]
            background = "#12"

            [drawing]
            default_color = "chartreuse"
            "##,
        )
        .unwrap();

        assert_eq!(config.canvas.background.to_color(), PURPLE);
        assert_eq!(config.drawing.default_color.to_color(), WHITE);
    }

    #[test]
    fn tool_names_ignore_case() {
        let config = Config::from_toml_str("[drawing]\ndefault_tool = \"Circle\"\n").unwrap();
        assert_eq!(config.surface_options().tool, Tool::Circle);
    }

    #[test]
    fn unknown_tool_is_a_parse_error() {
        let result = Config::from_toml_str("[drawing]\ndefault_tool = \"lasso\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn example_config_parses() {
        let config = Config::from_toml_str(include_str!("../../config.example.toml")).unwrap();
        assert_eq!(config.surface_options(), SurfaceOptions::default());
    }

    #[test]
    fn schema_lists_top_level_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for section in ["canvas", "drawing", "export"] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }
}
