// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Overlay rendering configuration.
//!
//! This module defines the [`OverlayConfig`] struct, which controls how the
//! skeleton is painted: bone color, stroke width, keypoint circle radius,
//! the keypoint palette, and optional landmark labels.

use crate::visualizer::color::{Color, Palette};
use crate::visualizer::skeleton::LINE_COLOR;

/// Configuration for overlay rendering.
///
/// This struct is used to customize the appearance of the skeleton overlay.
/// It uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use pose_overlay::OverlayConfig;
///
/// let config = OverlayConfig::new()
///     .with_circle_radius(4)
///     .with_stroke_width(3)
///     .with_labels(true);
/// ```
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// Uniform color used for every skeleton line segment.
    pub line_color: Color,
    /// Radius of the filled circle drawn at each keypoint, in pixels.
    pub circle_radius: i32,
    /// Line thickness for skeleton segments, in pixels.
    pub stroke_width: u32,
    /// Color-per-keypoint table (14 keypoints plus a background slot).
    pub palette: Palette,
    /// Whether to draw landmark name labels next to keypoints.
    pub labels: bool,
    /// Label text size in pixels.
    pub label_size: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            line_color: Color(LINE_COLOR[0], LINE_COLOR[1], LINE_COLOR[2]),
            circle_radius: 3,
            stroke_width: 2,
            palette: Palette::default(),
            labels: false,
            label_size: 13.0,
        }
    }
}

impl OverlayConfig {
    /// Create a new configuration with default values.
    ///
    /// # Returns
    ///
    /// * A new `OverlayConfig` instance with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skeleton line color.
    ///
    /// # Arguments
    ///
    /// * `color` - Color used for every bone segment.
    ///
    /// # Returns
    ///
    /// * The modified `OverlayConfig`.
    #[must_use]
    pub const fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    /// Set the keypoint circle radius.
    ///
    /// # Arguments
    ///
    /// * `radius` - Radius in pixels.
    ///
    /// # Returns
    ///
    /// * The modified `OverlayConfig`.
    #[must_use]
    pub const fn with_circle_radius(mut self, radius: i32) -> Self {
        self.circle_radius = radius;
        self
    }

    /// Set the skeleton line thickness.
    ///
    /// # Arguments
    ///
    /// * `width` - Stroke width in pixels.
    ///
    /// # Returns
    ///
    /// * The modified `OverlayConfig`.
    #[must_use]
    pub const fn with_stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Replace the keypoint color palette.
    ///
    /// # Arguments
    ///
    /// * `palette` - Fifteen-slot color table.
    ///
    /// # Returns
    ///
    /// * The modified `OverlayConfig`.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Enable or disable landmark name labels.
    ///
    /// # Arguments
    ///
    /// * `labels` - `true` to draw a name next to each keypoint.
    ///
    /// # Returns
    ///
    /// * The modified `OverlayConfig`.
    #[must_use]
    pub const fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Set the label text size.
    ///
    /// # Arguments
    ///
    /// * `size` - Text size in pixels.
    ///
    /// # Returns
    ///
    /// * The modified `OverlayConfig`.
    #[must_use]
    pub const fn with_label_size(mut self, size: f32) -> Self {
        self.label_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = OverlayConfig::default();
        assert_eq!(config.line_color, Color(111, 168, 220));
        assert_eq!(config.circle_radius, 3);
        assert_eq!(config.stroke_width, 2);
        assert!(!config.labels);
    }

    #[test]
    fn test_config_builder() {
        let config = OverlayConfig::new()
            .with_line_color(Color::WHITE)
            .with_circle_radius(5)
            .with_stroke_width(4)
            .with_labels(true)
            .with_label_size(16.0);

        assert_eq!(config.line_color, Color::WHITE);
        assert_eq!(config.circle_radius, 5);
        assert_eq!(config.stroke_width, 4);
        assert!(config.labels);
        assert!((config.label_size - 16.0).abs() < f32::EPSILON);
    }
}
