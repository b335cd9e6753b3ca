//! Utility functions for color names.
//!
//! This module provides:
//! - Name-to-color mapping for config files and stroke scripts
//! - Color-to-name mapping for log output (constants live in draw::color)

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "magenta" (or "pink"), "cyan",
///   "white", "black", "purple"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "magenta" | "pink" => Some(MAGENTA),
        "cyan" => Some(CYAN),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "purple" => Some(PURPLE),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Matches palette colors exactly (after rounding to 8-bit channels); any
/// other color is reported as its hex string.
pub fn color_to_name(color: &Color) -> String {
    const NAMED: [(Color, &str); 9] = [
        (RED, "Red"),
        (GREEN, "Green"),
        (BLUE, "Blue"),
        (YELLOW, "Yellow"),
        (MAGENTA, "Magenta"),
        (CYAN, "Cyan"),
        (WHITE, "White"),
        (BLACK, "Black"),
        (PURPLE, "Purple"),
    ];

    let rgb = color.to_rgb8();
    NAMED
        .iter()
        .find(|(named, _)| named.to_rgb8() == rgb)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| color.to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_color_mappings() {
        assert_eq!(name_to_color("white").unwrap(), WHITE);
        assert_eq!(name_to_color(" PINK ").unwrap(), MAGENTA);
        assert_eq!(name_to_color("purple").unwrap(), PURPLE);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn color_to_name_matches_known_colors() {
        assert_eq!(color_to_name(&RED), "Red");
        assert_eq!(color_to_name(&BLACK), "Black");
        assert_eq!(color_to_name(&Color::from_rgb8(0x4A, 0x1D, 0x96)), "Purple");
        assert_eq!(color_to_name(&Color::new(0.42, 0.42, 0.42)), "#6B6B6B");
    }
}
