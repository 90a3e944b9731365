// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Visualization tables and display tools for the overlay.

/// Color definitions and the keypoint palette.
pub mod color;

/// Skeleton connectivity table.
pub mod skeleton;

#[cfg(feature = "visualize")]
pub mod viewer;

pub use color::{Color, Palette};
pub use skeleton::SKELETON;

#[cfg(feature = "visualize")]
pub use viewer::Viewer;
