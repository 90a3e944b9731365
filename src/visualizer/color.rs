// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Color type and the per-keypoint palette.

use crate::error::{OverlayError, Result};
use crate::keypoint::Keypoint;

/// Color type for visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Red color.
    pub const RED: Color = Color(255, 0, 0);
    /// Green color.
    pub const GREEN: Color = Color(0, 255, 0);
    /// Blue color.
    pub const BLUE: Color = Color(0, 0, 255);
    /// White color.
    pub const WHITE: Color = Color(255, 255, 255);
    /// Black color.
    pub const BLACK: Color = Color(0, 0, 0);

    /// Create a new color from RGB values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Get a color from the keypoint palette by index.
    pub fn from_index(index: usize) -> Self {
        let color = KEYPOINT_COLORS[index % KEYPOINT_COLORS.len()];
        Self(color[0], color[1], color[2])
    }

    /// Parse a color from a `#rrggbb` hex string, as found in themed
    /// resource tables.
    ///
    /// # Arguments
    ///
    /// * `hex` - Color string, with or without the leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::ConfigError`] if the string is not six hex
    /// digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(OverlayError::ConfigError(format!(
                "Expected 6 hex digits in color, got '{hex}'"
            )));
        }
        let parse = |s: &str| {
            u8::from_str_radix(s, 16)
                .map_err(|_| OverlayError::ConfigError(format!("Invalid hex color '{hex}'")))
        };
        Ok(Self(
            parse(&digits[0..2])?,
            parse(&digits[2..4])?,
            parse(&digits[4..6])?,
        ))
    }
}

/// Palette index of the background slot (one past the last keypoint).
pub const BACKGROUND_INDEX: usize = 14;

/// Default keypoint color palette: one entry per keypoint in model output
/// order, plus a trailing background slot.
pub const KEYPOINT_COLORS: [[u8; 3]; 15] = [
    [255, 128, 0],   // #ff8000 head
    [255, 153, 51],  // #ff9933 neck
    [102, 178, 255], // #66b2ff left shoulder
    [255, 153, 153], // #ff9999 right shoulder
    [51, 153, 255],  // #3399ff left elbow
    [255, 102, 102], // #ff6666 right elbow
    [0, 180, 255],   // #00b4ff left wrist
    [255, 51, 51],   // #ff3333 right wrist
    [102, 255, 102], // #66ff66 left hip
    [255, 153, 255], // #ff99ff right hip
    [51, 255, 51],   // #33ff33 left knee
    [255, 102, 255], // #ff66ff right knee
    [0, 255, 0],     // #00ff00 left ankle
    [255, 51, 255],  // #ff33ff right ankle
    [230, 230, 0],   // #e6e600 background
];

/// Fixed color-per-keypoint table used for rendering.
///
/// Fifteen slots: one per keypoint index plus a background slot. Defaults to
/// [`KEYPOINT_COLORS`]; a themed table can be supplied as hex strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; 15],
}

impl Default for Palette {
    fn default() -> Self {
        let mut colors = [Color::BLACK; 15];
        for (slot, rgb) in colors.iter_mut().zip(KEYPOINT_COLORS) {
            *slot = Color(rgb[0], rgb[1], rgb[2]);
        }
        Self { colors }
    }
}

impl Palette {
    /// Build a palette from fifteen `#rrggbb` strings.
    ///
    /// # Arguments
    ///
    /// * `table` - One hex color per keypoint index, background last.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::ConfigError`] if any entry fails to parse.
    pub fn from_hex_table(table: &[&str; 15]) -> Result<Self> {
        let mut colors = [Color::BLACK; 15];
        for (slot, hex) in colors.iter_mut().zip(table) {
            *slot = Color::from_hex(hex)?;
        }
        Ok(Self { colors })
    }

    /// Get the color for a keypoint.
    #[must_use]
    pub fn color(&self, keypoint: Keypoint) -> Color {
        self.colors[keypoint.index()]
    }

    /// Get the color for a raw palette index (keypoints and background).
    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Get the background slot color.
    #[must_use]
    pub fn background(&self) -> Color {
        self.colors[BACKGROUND_INDEX]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ff8000").unwrap(), Color(255, 128, 0));
        assert_eq!(Color::from_hex("6fa8dc").unwrap(), Color(111, 168, 220));
        assert!(Color::from_hex("#ff80").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
    }

    #[test]
    fn test_palette_default_matches_table() {
        let palette = Palette::default();
        assert_eq!(palette.color(Keypoint::Head), Color(255, 128, 0));
        assert_eq!(palette.background(), Color(230, 230, 0));
    }

    #[test]
    fn test_palette_from_hex_table() {
        let table = ["#000000"; 15];
        let palette = Palette::from_hex_table(&table).unwrap();
        assert_eq!(palette.color(Keypoint::Neck), Color::BLACK);
    }
}
