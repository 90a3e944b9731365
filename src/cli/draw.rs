// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::fs;
use std::path::Path;
use std::process;

use crate::annotate::{annotate_pose, find_next_run_dir, load_image};
use crate::cli::args::DrawArgs;
use crate::config::OverlayConfig;
use crate::error::{OverlayError, Result};
use crate::pose::Pose;
use crate::view::OverlayView;
use crate::{error, success, verbose};

#[cfg(feature = "visualize")]
use crate::visualizer::Viewer;

/// Parse a `W:H` aspect ratio argument.
fn parse_aspect(value: &str) -> Result<(i32, i32)> {
    let (w, h) = value.split_once(':').ok_or_else(|| {
        OverlayError::ConfigError(format!("Expected aspect ratio as W:H, got '{value}'"))
    })?;
    let parse = |s: &str| {
        s.trim()
            .parse::<i32>()
            .map_err(|_| OverlayError::ConfigError(format!("Invalid aspect component '{s}'")))
    };
    Ok((parse(w)?, parse(h)?))
}

/// Read a keypoint file: 28 whitespace-separated floats, x row then y row.
fn read_keypoints(path: &str) -> Result<Pose> {
    let text = fs::read_to_string(path)
        .map_err(|e| OverlayError::IoError(format!("Failed to read '{path}': {e}")))?;
    let values = text
        .split_whitespace()
        .map(|token| {
            token.parse::<f32>().map_err(|_| {
                OverlayError::KeypointError(format!("Invalid keypoint value '{token}' in '{path}'"))
            })
        })
        .collect::<Result<Vec<f32>>>()?;
    Pose::from_flat(&values)
}

/// Run the draw command: overlay a pose skeleton onto an image.
#[allow(clippy::cast_possible_truncation)]
pub fn run_draw(args: &DrawArgs) {
    let verbose = args.verbose;

    let pose = match read_keypoints(&args.keypoints) {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to load keypoints: {e}");
            process::exit(1);
        }
    };

    let image = match load_image(&args.image) {
        Ok(img) => img,
        Err(e) => {
            error!("Failed to load image '{}': {e}", args.image);
            process::exit(1);
        }
    };

    let config = OverlayConfig::new()
        .with_circle_radius(args.radius)
        .with_stroke_width(args.stroke)
        .with_labels(args.labels);

    let mut view = OverlayView::with_config(config);
    view.set_img_size(image.width(), image.height());

    if let Some(aspect) = &args.aspect {
        let (w, h) = match parse_aspect(aspect) {
            Ok(pair) => pair,
            Err(e) => {
                error!("{e}");
                process::exit(1);
            }
        };
        if let Err(e) = view.set_aspect_ratio(w, h) {
            error!("{e}");
            process::exit(1);
        }
    }

    // Lay the view out against the image itself; the overlay is painted
    // straight onto the source pixels.
    let (view_w, view_h) = view.measure(image.width(), image.height());
    let (ratio_x, ratio_y) = view.scale_factors();
    if verbose {
        verbose!(
            "image {}x{}, view {view_w}x{view_h}, scale ({ratio_x:.2}, {ratio_y:.2})",
            image.width(),
            image.height()
        );
    }

    view.set_draw_points(&pose, args.scale);
    let annotated = annotate_pose(&image, &view);

    if args.save || args.output.is_some() {
        let output = args.output.clone().unwrap_or_else(|| {
            let dir = find_next_run_dir("runs/overlay", "draw");
            let name = Path::new(&args.image)
                .file_name()
                .map_or_else(|| "overlay.png".to_string(), |n| n.to_string_lossy().to_string());
            format!("{dir}/{name}")
        });

        if let Some(parent) = Path::new(&output).parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create output directory: {e}");
                process::exit(1);
            }
        }
        if let Err(e) = annotated.save(&output) {
            error!("Failed to save annotated image: {e}");
            process::exit(1);
        }
        success!("Saved annotated image to {output}");
    }

    if args.show {
        #[cfg(feature = "visualize")]
        {
            let result = Viewer::new(
                "pose-overlay",
                annotated.width() as usize,
                annotated.height() as usize,
            )
            .and_then(|mut viewer| {
                viewer.update(&annotated)?;
                viewer.wait_until_closed()
            });
            if let Err(e) = result {
                error!("{e}");
                process::exit(1);
            }
        }
        #[cfg(not(feature = "visualize"))]
        {
            error!("--show requires the 'visualize' feature");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aspect() {
        assert_eq!(parse_aspect("3:4").unwrap(), (3, 4));
        assert_eq!(parse_aspect(" 16 : 9 ").unwrap(), (16, 9));
        assert!(parse_aspect("3x4").is_err());
        assert!(parse_aspect("a:b").is_err());
    }

    #[test]
    fn test_read_keypoints_roundtrip() {
        let dir = std::env::temp_dir().join("pose-overlay-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("pose.txt");

        let values: Vec<String> = (0..28).map(|i| format!("{}.0", i)).collect();
        fs::write(&path, values.join(" ")).unwrap();

        let pose = read_keypoints(path.to_str().unwrap()).unwrap();
        assert!((pose.x(0) - 0.0).abs() < f32::EPSILON);
        assert!((pose.y(0) - 14.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_read_keypoints_wrong_count() {
        let dir = std::env::temp_dir().join("pose-overlay-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("short.txt");
        fs::write(&path, "1.0 2.0 3.0").unwrap();

        assert!(read_keypoints(path.to_str().unwrap()).is_err());
    }
}
