// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! The pose overlay view.
//!
//! [`OverlayView`] owns the view-space sizing state and the current set of
//! scaled keypoints, and paints the skeleton through a [`Canvas`]. The flow
//! mirrors a toolkit layout/paint cycle: configure the source image size and
//! aspect ratio, run [`measure`](OverlayView::measure) against the available
//! bounds, feed keypoints, then [`draw`](OverlayView::draw).

use crate::canvas::Canvas;
use crate::config::OverlayConfig;
use crate::error::{OverlayError, Result};
use crate::pose::Pose;
use crate::visualizer::skeleton::SKELETON;

/// Overlay view: scales keypoints from image space into the measured view
/// size and renders circles plus skeleton segments.
#[derive(Debug, Clone, Default)]
pub struct OverlayView {
    /// Configured aspect ratio, zero components disable the constraint.
    ratio_width: u32,
    ratio_height: u32,
    /// View-space keypoints, replaced wholesale on each new pose.
    draw_points: Vec<(f32, f32)>,
    /// Measured view size.
    width: u32,
    height: u32,
    /// Image-to-view scale factors, recomputed on every `measure`.
    ratio_x: f32,
    ratio_y: f32,
    /// Source image size.
    img_width: u32,
    img_height: u32,
    config: OverlayConfig,
}

impl OverlayView {
    /// Create a view with the default rendering configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view with a custom rendering configuration.
    #[must_use]
    pub fn with_config(config: OverlayConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Set the source image dimensions.
    ///
    /// Scale factors are recomputed on the next [`measure`](Self::measure)
    /// pass, the toolkit equivalent of a re-layout request.
    pub fn set_img_size(&mut self, width: u32, height: u32) {
        self.img_width = width;
        self.img_height = height;
    }

    /// Set the aspect ratio for this view.
    ///
    /// The measured size is based on the ratio calculated from the
    /// parameters; the actual magnitudes don't matter, so `(2, 3)` and
    /// `(4, 6)` yield the same result. A zero component disables the
    /// constraint and the view takes the full available bounds.
    ///
    /// # Arguments
    ///
    /// * `width` - Relative horizontal size.
    /// * `height` - Relative vertical size.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::ConfigError`] if either component is negative.
    pub fn set_aspect_ratio(&mut self, width: i32, height: i32) -> Result<()> {
        if width < 0 || height < 0 {
            return Err(OverlayError::ConfigError(
                "Size cannot be negative".to_string(),
            ));
        }
        #[allow(clippy::cast_sign_loss)]
        {
            self.ratio_width = width as u32;
            self.ratio_height = height as u32;
        }
        Ok(())
    }

    /// Measure the view against the available bounds.
    ///
    /// Without an aspect ratio the available size is used directly.
    /// Otherwise the result is the largest ratio-preserving size fitting
    /// within the bounds. Afterwards the image-to-view scale factors are
    /// recomputed from the source image size over the chosen view size.
    ///
    /// # Arguments
    ///
    /// * `avail_width` - Available width in pixels.
    /// * `avail_height` - Available height in pixels.
    ///
    /// # Returns
    ///
    /// * The measured `(width, height)`.
    pub fn measure(&mut self, avail_width: u32, avail_height: u32) -> (u32, u32) {
        if self.ratio_width == 0 || self.ratio_height == 0 {
            self.width = avail_width;
            self.height = avail_height;
        } else if avail_width < avail_height * self.ratio_width / self.ratio_height {
            // width is the limiting dimension
            self.width = avail_width;
            self.height = avail_width * self.ratio_height / self.ratio_width;
        } else {
            self.width = avail_height * self.ratio_width / self.ratio_height;
            self.height = avail_height;
        }

        #[allow(clippy::cast_precision_loss)]
        {
            self.ratio_x = self.img_width as f32 / self.width as f32;
            self.ratio_y = self.img_height as f32 / self.height as f32;
        }

        (self.width, self.height)
    }

    /// Replace the stored keypoint set with a scaled copy of `pose`.
    ///
    /// Each point is stored as `(x / divisor / ratio_x, y / divisor /
    /// ratio_y)`, mapping model output coordinates into view space. The
    /// previous set is discarded entirely.
    ///
    /// # Arguments
    ///
    /// * `pose` - Keypoint coordinates in scaled image space.
    /// * `divisor` - Scale divisor applied by the producer (e.g. the model
    ///   input downscale factor).
    pub fn set_draw_points(&mut self, pose: &Pose, divisor: f32) {
        self.draw_points.clear();
        for i in 0..pose.len() {
            let x = pose.x(i) / divisor / self.ratio_x;
            let y = pose.y(i) / divisor / self.ratio_y;
            self.draw_points.push((x, y));
        }
    }

    /// Drop the stored keypoint set; subsequent draws paint nothing.
    pub fn clear_points(&mut self) {
        self.draw_points.clear();
    }

    /// Paint the overlay: one line per skeleton segment in the configured
    /// line color, then one filled circle per keypoint in its palette
    /// color. An empty keypoint set draws nothing.
    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        if self.draw_points.is_empty() {
            return;
        }

        for [a, b] in SKELETON {
            canvas.draw_line(self.draw_points[a], self.draw_points[b], self.config.line_color);
        }

        for (index, &point) in self.draw_points.iter().enumerate() {
            let color = self.config.palette.color_at(index);
            canvas.draw_circle(point, self.config.circle_radius, color);
        }
    }

    /// Measured view width.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Measured view height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Current image-to-view scale factors `(ratio_x, ratio_y)`.
    #[must_use]
    pub const fn scale_factors(&self) -> (f32, f32) {
        (self.ratio_x, self.ratio_y)
    }

    /// Stored view-space keypoints.
    #[must_use]
    pub fn points(&self) -> &[(f32, f32)] {
        &self.draw_points
    }

    /// Rendering configuration.
    #[must_use]
    pub const fn config(&self) -> &OverlayConfig {
        &self.config
    }
}
