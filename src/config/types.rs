//! Configuration type definitions.

use super::enums::{ColorSpec, PreviewMode};
use crate::input::Tool;
use crate::surface::{DEFAULT_HEIGHT, DEFAULT_LINE_WIDTH, DEFAULT_WIDTH};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas settings.
///
/// The canvas has a fixed size for the lifetime of a drawing surface.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Background fill, also used by the eraser
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Rectangle/circle drag rendering: "overlay" keeps every intermediate
    /// outline, "scratch" keeps only the final one
    #[serde(default)]
    pub preview_mode: PreviewMode,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            preview_mode: PreviewMode::default(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the tool state when a new surface is created.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initially selected tool (pen, eraser, rectangle, circle)
    #[serde(default)]
    pub default_tool: Tool,

    /// Default pen color - a named color, a hex string like "#FFFFFF",
    /// or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default line width in pixels (valid range: 1 - 50)
    #[serde(default = "default_line_width")]
    pub default_line_width: i32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: Tool::default(),
            default_color: default_color(),
            default_line_width: default_line_width(),
        }
    }
}

/// Export settings for saving artwork to disk.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory for exported images (supports a leading `~/`)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template with chrono format specifiers (extension is appended)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

fn default_width() -> i32 {
    DEFAULT_WIDTH
}

fn default_height() -> i32 {
    DEFAULT_HEIGHT
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("#4A1D96".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("#FFFFFF".to_string())
}

fn default_line_width() -> i32 {
    DEFAULT_LINE_WIDTH
}

fn default_save_directory() -> String {
    "~/Pictures/Artboard".to_string()
}

fn default_filename_template() -> String {
    "artwork_%Y-%m-%d_%H%M%S".to_string()
}
