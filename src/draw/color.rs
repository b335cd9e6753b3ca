//! Opaque RGB color type and predefined color constants.

/// Represents an opaque RGB color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum), which is
/// the form Cairo consumes directly.
///
/// # Examples
///
/// ```
/// use artboard::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0 };
/// let purple = Color::from_hex("#4A1D96").unwrap();
/// assert_eq!(purple.to_rgb8(), [0x4A, 0x1D, 0x96]);
/// # let _ = red;
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
}

impl Color {
    /// Creates a new color from RGB components, clamped to 0.0 - 1.0.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Creates a color from 0-255 byte components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Parses `#RRGGBB` or `RRGGBB` (case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts back to 0-255 byte components (rounded).
    pub fn to_rgb8(&self) -> [u8; 3] {
        let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }

    /// Formats the color as `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (#FF0000)
pub const RED: Color = Color::from_rgb8(0xFF, 0x00, 0x00);

/// Predefined green color (#00FF00)
pub const GREEN: Color = Color::from_rgb8(0x00, 0xFF, 0x00);

/// Predefined blue color (#0000FF)
pub const BLUE: Color = Color::from_rgb8(0x00, 0x00, 0xFF);

/// Predefined yellow color (#FFFF00)
pub const YELLOW: Color = Color::from_rgb8(0xFF, 0xFF, 0x00);

/// Predefined magenta color (#FF00FF)
pub const MAGENTA: Color = Color::from_rgb8(0xFF, 0x00, 0xFF);

/// Predefined cyan color (#00FFFF)
pub const CYAN: Color = Color::from_rgb8(0x00, 0xFF, 0xFF);

/// Predefined white color (#FFFFFF)
pub const WHITE: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);

/// Predefined black color (#000000)
pub const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);

/// Default canvas background (#4A1D96)
pub const PURPLE: Color = Color::from_rgb8(0x4A, 0x1D, 0x96);

/// Quick-pick palette offered next to the color picker.
pub const PRESETS: [Color; 6] = [RED, GREEN, BLUE, YELLOW, MAGENTA, CYAN];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_accepts_optional_hash() {
        assert_eq!(Color::from_hex("#FF0000"), Some(RED));
        assert_eq!(Color::from_hex("00ff00"), Some(GREEN));
        assert_eq!(Color::from_hex(" #4a1d96 "), Some(PURPLE));
    }

    #[test]
    fn hex_parsing_rejects_malformed_input() {
        assert!(Color::from_hex("#FFF").is_none());
        assert!(Color::from_hex("#GG0000").is_none());
        assert!(Color::from_hex("#FF00000").is_none());
        assert!(Color::from_hex("#ÿÿÿ").is_none());
        assert!(Color::from_hex("#+1+2+3").is_none());
        assert!(Color::from_hex("-1-2-3").is_none());
    }

    #[test]
    fn preset_palette_order() {
        let hexes: Vec<String> = PRESETS.iter().map(Color::to_hex).collect();
        assert_eq!(
            hexes,
            ["#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF"]
        );
    }

    #[test]
    fn hex_formatting_is_uppercase() {
        assert_eq!(PURPLE.to_hex(), "#4A1D96");
        assert_eq!(Color::new(2.0, -1.0, 0.5).to_rgb8(), [255, 0, 128]);
    }
}
