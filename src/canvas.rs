// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Drawing-surface abstraction.
//!
//! [`OverlayView`](crate::OverlayView) renders through this trait so the
//! layout and scaling logic stays independent of any particular canvas
//! backend. The `annotate` feature ships [`ImageCanvas`], an
//! `image`/`imageproc` backed implementation.

use crate::visualizer::color::Color;

/// Minimal drawing surface consumed by the overlay view.
pub trait Canvas {
    /// Draw a straight line segment between two view-space points.
    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color);

    /// Draw a filled circle centered at a view-space point.
    fn draw_circle(&mut self, center: (f32, f32), radius: i32, color: Color);
}

#[cfg(feature = "annotate")]
pub use image_canvas::ImageCanvas;

#[cfg(feature = "annotate")]
mod image_canvas {
    use image::{Rgb, RgbImage};
    use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

    use super::Canvas;
    use crate::visualizer::color::Color;

    /// [`Canvas`] implementation that paints into an [`RgbImage`].
    pub struct ImageCanvas<'a> {
        image: &'a mut RgbImage,
        stroke_width: u32,
    }

    impl<'a> ImageCanvas<'a> {
        /// Create a canvas over an image buffer.
        ///
        /// # Arguments
        ///
        /// * `image` - Target buffer, drawn into in place.
        /// * `stroke_width` - Line thickness in pixels (minimum 1).
        pub fn new(image: &'a mut RgbImage, stroke_width: u32) -> Self {
            Self {
                image,
                stroke_width: stroke_width.max(1),
            }
        }
    }

    impl Canvas for ImageCanvas<'_> {
        fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color) {
            let rgb = Rgb([color.0, color.1, color.2]);
            // imageproc lines are 1px; thickness comes from offsetting along
            // the minor axis, same trick the box annotator uses for borders.
            let offset_x = (to.1 - from.1).abs() > (to.0 - from.0).abs();
            for t in 0..self.stroke_width {
                let d = t as f32 - (self.stroke_width - 1) as f32 / 2.0;
                let (dx, dy) = if offset_x { (d, 0.0) } else { (0.0, d) };
                draw_line_segment_mut(
                    self.image,
                    (from.0 + dx, from.1 + dy),
                    (to.0 + dx, to.1 + dy),
                    rgb,
                );
            }
        }

        fn draw_circle(&mut self, center: (f32, f32), radius: i32, color: Color) {
            let rgb = Rgb([color.0, color.1, color.2]);
            draw_filled_circle_mut(
                self.image,
                (center.0.round() as i32, center.1.round() as i32),
                radius,
                rgb,
            );
        }
    }
}
