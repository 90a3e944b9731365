// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]

//! # Pose Overlay Library
//!
//! Renders a human-pose skeleton overlay (14 anatomical keypoints and their
//! connecting bones) on top of an image surface. The library owns the
//! aspect-ratio-constrained layout measurement, the image-to-view coordinate
//! transform, and the skeleton rendering itself; pose estimation and image
//! capture live elsewhere.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pose_overlay::{OverlayView, Pose};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut view = OverlayView::new();
//!
//!     // Geometry: source image size, aspect constraint, layout pass
//!     view.set_img_size(640, 480);
//!     view.set_aspect_ratio(4, 3)?;
//!     view.measure(320, 240);
//!
//!     // Feed one pose (2x14 coordinates, x row then y row)
//!     let pose = Pose::from_flat(&[0.0; 28])?;
//!     view.set_draw_points(&pose, 1.0);
//!
//!     // Paint through any Canvas implementation; with the `annotate`
//!     // feature, `annotate::annotate_pose` renders onto an image buffer.
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Overlay keypoints from a text file onto an image
//! pose-overlay draw --image frame.jpg --keypoints pose.txt --save
//!
//! # With a model downscale divisor and an aspect constraint
//! pose-overlay draw -i frame.jpg -k pose.txt --scale 0.5 --aspect 3:4 --show
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`view`] | Core [`OverlayView`]: layout, scaling, and draw loop |
//! | [`pose`] | [`Pose`] keypoint payload (2×14 coordinate array) |
//! | [`keypoint`] | [`Keypoint`] identity enum for the 14-point body model |
//! | [`canvas`] | [`Canvas`] drawing-surface trait and image backend |
//! | [`config`] | [`OverlayConfig`] rendering settings |
//! | [`visualizer`] | Skeleton table, colors, palette, and display window |
//! | [`annotate`] | Overlay rendering onto image files |
//! | [`error`] | Error types ([`OverlayError`], [`Result`]) |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `annotate` | Image annotation support (default) |
//! | `visualize` | Real-time window display (default) |

// Modules
#[cfg(feature = "annotate")]
pub mod annotate;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod error;
pub mod keypoint;
pub mod pose;
pub mod view;
pub mod visualizer;

// Re-export main types for convenience
pub use canvas::Canvas;
pub use config::OverlayConfig;
pub use error::{OverlayError, Result};
pub use keypoint::{KEYPOINT_COUNT, Keypoint};
pub use pose::Pose;
pub use view::OverlayView;
pub use visualizer::color::{Color, Palette};
pub use visualizer::skeleton::SKELETON;

#[cfg(feature = "annotate")]
pub use canvas::ImageCanvas;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // Version should be semver format like "0.1.0"
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "pose-overlay");
    }
}
