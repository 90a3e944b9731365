// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Render the overlay onto image files.

use ab_glyph::{FontRef, PxScale};
use image::DynamicImage;
use imageproc::drawing::draw_text_mut;
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::canvas::ImageCanvas;
use crate::keypoint::Keypoint;
use crate::view::OverlayView;

/// Assets URL for downloading fonts
const ASSETS_URL: &str = "https://github.com/ultralytics/assets/releases/download/v0.0.0";

/// Find the next available run directory (draw, draw2, draw3, etc.)
pub fn find_next_run_dir(base: &str, prefix: &str) -> String {
    let base_path = Path::new(base);

    // First try without number
    let first = base_path.join(prefix);
    if !first.exists() {
        return first.to_string_lossy().to_string();
    }

    // Try with incrementing numbers
    for i in 2.. {
        let numbered = base_path.join(format!("{prefix}{i}"));
        if !numbered.exists() {
            return numbered.to_string_lossy().to_string();
        }
    }

    // Fallback (should never reach here)
    base_path.join(prefix).to_string_lossy().to_string()
}

/// Load image helper with a direct jpeg-decoder path for files the generic
/// loader mishandles.
pub fn load_image(path: &str) -> image::ImageResult<DynamicImage> {
    let path_obj = Path::new(path);
    let ext = path_obj
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    if let Some("jpg") | Some("jpeg") = ext.as_deref() {
        if let Ok(file) = File::open(path) {
            let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
            if let Ok(pixels) = decoder.decode() {
                if let Some(metadata) = decoder.info() {
                    let width = u32::from(metadata.width);
                    let height = u32::from(metadata.height);
                    match metadata.pixel_format {
                        jpeg_decoder::PixelFormat::RGB24 => {
                            if let Some(buffer) =
                                image::ImageBuffer::from_raw(width, height, pixels)
                            {
                                return Ok(DynamicImage::ImageRgb8(buffer));
                            }
                        }
                        jpeg_decoder::PixelFormat::L8 => {
                            if let Some(buffer) =
                                image::ImageBuffer::from_raw(width, height, pixels)
                            {
                                return Ok(DynamicImage::ImageLuma8(buffer));
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }
    // Fallback
    image::open(path)
}

/// Check if the label font exists locally or download it
pub fn check_font(font: &str) -> Option<PathBuf> {
    let font_name = Path::new(font).file_name()?.to_string_lossy();
    let config_dir = dirs::config_dir()?.join("PoseOverlay");
    let font_path = config_dir.join(font_name.as_ref());

    if font_path.exists() {
        return Some(font_path);
    }

    // Create config directory if it doesn't exist
    if let Err(e) = fs::create_dir_all(&config_dir) {
        eprintln!("Failed to create config directory: {e}");
        return None;
    }

    // Download font
    let url = format!("{ASSETS_URL}/{font_name}");
    println!("Downloading {url} to {}", font_path.display());

    match ureq::get(&url).call() {
        Ok(response) => {
            let mut file = match File::create(&font_path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Failed to create font file: {e}");
                    return None;
                }
            };

            let mut reader = response.into_body().into_reader();
            if let Err(e) = io::copy(&mut reader, &mut file) {
                eprintln!("Failed to download font: {e}");
                // Try to remove partial file
                let _ = fs::remove_file(&font_path);
                return None;
            }

            Some(font_path)
        }
        Err(e) => {
            eprintln!("Failed to download font from {url}: {e}");
            None
        }
    }
}

/// Render the pose overlay onto a copy of an image.
///
/// Skeleton segments and keypoint circles come from the view's stored
/// points and configuration. When labels are enabled, each keypoint gets
/// its landmark name drawn beside it; labels are skipped silently if no
/// font can be resolved.
#[allow(clippy::cast_possible_truncation)]
pub fn annotate_pose(image: &DynamicImage, view: &OverlayView) -> DynamicImage {
    let mut img = image.to_rgb8();
    let (width, height) = img.dimensions();

    {
        let mut canvas = ImageCanvas::new(&mut img, view.config().stroke_width);
        view.draw(&mut canvas);
    }

    if view.config().labels && !view.points().is_empty() {
        // Load font
        let font_path = check_font("Arial.ttf");
        let font_data = font_path.and_then(|path| {
            let mut file = File::open(path).ok()?;
            let mut buffer = Vec::new();
            file.read_to_end(&mut buffer).ok()?;
            Some(buffer)
        });

        let font = font_data
            .as_ref()
            .and_then(|data| FontRef::try_from_slice(data).ok());

        if let Some(ref f) = font {
            let scale = PxScale::from(view.config().label_size);
            let offset = view.config().circle_radius + 2;

            for (index, &(x, y)) in view.points().iter().enumerate() {
                let Some(keypoint) = Keypoint::from_index(index) else {
                    continue;
                };
                let color = view.config().palette.color(keypoint);
                let text_x = (x.round() as i32) + offset;
                let text_y = (y.round() as i32) - offset;
                // Only draw text if within bounds
                if text_x >= 0 && text_y >= 0 && text_x < width as i32 && text_y < height as i32 {
                    draw_text_mut(
                        &mut img,
                        image::Rgb([color.0, color.1, color.2]),
                        text_x,
                        text_y,
                        scale,
                        f,
                        keypoint.name(),
                    );
                }
            }
        }
    }

    DynamicImage::ImageRgb8(img)
}
