// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Window for displaying annotated overlay images.

use image::DynamicImage;
use minifb::{Key, Window, WindowOptions};

use crate::error::{OverlayError, Result};

/// A simple image viewer using minifb.
pub struct Viewer {
    window: Window,
    pub width: usize,
    pub height: usize,
    buffer: Vec<u32>,
}

impl Viewer {
    /// Create a new viewer window.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| OverlayError::ViewerError(format!("Failed to create window: {e}")))?;

        // Limit update rate
        window.limit_update_rate(Some(std::time::Duration::from_micros(16600)));

        Ok(Self {
            window,
            width,
            height,
            buffer: Vec::new(),
        })
    }

    /// Update the window with a new image.
    ///
    /// Returns `Ok(false)` once the window was closed or Escape/Q pressed.
    pub fn update(&mut self, image: &DynamicImage) -> Result<bool> {
        if self.closed() {
            return Ok(false);
        }

        let (img_width, img_height) = (image.width() as usize, image.height() as usize);

        let num_pixels = img_width * img_height;
        if self.buffer.len() != num_pixels {
            self.buffer.resize(num_pixels, 0);
        }

        // minifb wants one u32 per pixel, packed 0x00RRGGBB
        let rgb = image.to_rgb8();
        for (i, pixel) in rgb.pixels().enumerate() {
            let r = u32::from(pixel[0]);
            let g = u32::from(pixel[1]);
            let b = u32::from(pixel[2]);
            self.buffer[i] = (r << 16) | (g << 8) | b;
        }

        if self.width != img_width || self.height != img_height {
            self.width = img_width;
            self.height = img_height;
        }

        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| OverlayError::ViewerError(format!("Failed to update window: {e}")))?;

        Ok(true)
    }

    /// Keep the window responsive until it is closed or Escape/Q pressed.
    ///
    /// Used by the CLI after a single still image was drawn.
    pub fn wait_until_closed(&mut self) -> Result<()> {
        while !self.closed() {
            // update_with_buffer keeps the image on screen; minifb applies
            // the configured rate limit so this loop does not spin.
            self.window
                .update_with_buffer(&self.buffer, self.width, self.height)
                .map_err(|e| OverlayError::ViewerError(format!("Failed to update window: {e}")))?;
        }
        Ok(())
    }

    fn closed(&self) -> bool {
        !self.window.is_open()
            || self.window.is_key_down(Key::Escape)
            || self.window.is_key_down(Key::Q)
    }
}
