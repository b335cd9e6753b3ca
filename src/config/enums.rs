//! Configuration enum types.

use crate::draw::{Color, color::RED};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How rectangle and circle drags render while the pointer moves.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewMode {
    /// Every intermediate outline stays on the raster (ghost trail)
    #[default]
    Overlay,
    /// The canvas is rewound before each outline so only the last one remains
    Scratch,
}

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex color
/// background = "#4A1D96"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, magenta, cyan, white, black, purple)
    /// or a `#RRGGBB` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct, or `None` if
    /// the name is neither a palette color nor valid hex.
    pub fn try_to_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => {
                crate::util::name_to_color(name).or_else(|| Color::from_hex(name))
            }
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b)),
        }
    }

    /// Like [`try_to_color`](Self::try_to_color), falling back to red with a
    /// warning for unknown names.
    pub fn to_color(&self) -> Color {
        self.try_to_color().unwrap_or_else(|| {
            warn!("Unknown color '{:?}', using red", self);
            RED
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{PURPLE, WHITE};

    #[test]
    fn color_spec_accepts_names_hex_and_rgb() {
        assert_eq!(ColorSpec::Name("White".into()).to_color(), WHITE);
        assert_eq!(ColorSpec::Name("#4a1d96".into()).to_color(), PURPLE);
        assert_eq!(ColorSpec::Rgb([74, 29, 150]).to_color(), PURPLE);
    }

    #[test]
    fn unknown_color_names_fall_back_to_red() {
        let spec = ColorSpec::Name("chartreuse".into());
        assert!(spec.try_to_color().is_none());
        assert_eq!(spec.to_color(), RED);
    }
}
