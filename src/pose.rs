// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Keypoint payload for a single estimated pose.
//!
//! A pose is a flat 2×14 coordinate array: row 0 holds the x coordinates and
//! row 1 the y coordinates, one column per [`Keypoint`](crate::Keypoint) in
//! model output order. Coordinates are in the source image space of whatever
//! produced them; scaling to view space happens in
//! [`OverlayView`](crate::OverlayView).

use ndarray::{Array2, ArrayView1};

use crate::error::{OverlayError, Result};
use crate::keypoint::KEYPOINT_COUNT;

/// Keypoint coordinates for one pose, shape `(2, 14)`.
#[derive(Debug, Clone)]
pub struct Pose {
    /// Raw coordinate data: row 0 = x, row 1 = y.
    data: Array2<f32>,
}

impl Pose {
    /// Create a new pose from a coordinate array.
    ///
    /// # Arguments
    ///
    /// * `data` - Coordinate array with shape `(2, 14)`.
    ///
    /// # Returns
    ///
    /// * A new `Pose` instance.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::KeypointError`] if the shape is not `(2, 14)`.
    pub fn new(data: Array2<f32>) -> Result<Self> {
        let shape = data.shape();
        if shape != [2, KEYPOINT_COUNT] {
            return Err(OverlayError::KeypointError(format!(
                "Expected keypoint array of shape (2, {KEYPOINT_COUNT}), got ({}, {})",
                shape[0], shape[1]
            )));
        }
        Ok(Self { data })
    }

    /// Create a pose from a flat slice of 28 values (x row then y row).
    ///
    /// # Arguments
    ///
    /// * `values` - Exactly `2 * 14` floats, all x coordinates followed by
    ///   all y coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::KeypointError`] on a length mismatch.
    pub fn from_flat(values: &[f32]) -> Result<Self> {
        if values.len() != 2 * KEYPOINT_COUNT {
            return Err(OverlayError::KeypointError(format!(
                "Expected {} values, got {}",
                2 * KEYPOINT_COUNT,
                values.len()
            )));
        }
        let data = Array2::from_shape_vec((2, KEYPOINT_COUNT), values.to_vec())
            .map_err(|e| OverlayError::KeypointError(e.to_string()))?;
        Ok(Self { data })
    }

    /// Get the x coordinate of keypoint `index`.
    #[must_use]
    pub fn x(&self, index: usize) -> f32 {
        self.data[[0, index]]
    }

    /// Get the y coordinate of keypoint `index`.
    #[must_use]
    pub fn y(&self, index: usize) -> f32 {
        self.data[[1, index]]
    }

    /// View of the x coordinate row.
    #[must_use]
    pub fn xs(&self) -> ArrayView1<'_, f32> {
        self.data.row(0)
    }

    /// View of the y coordinate row.
    #[must_use]
    pub fn ys(&self) -> ArrayView1<'_, f32> {
        self.data.row(1)
    }

    /// Number of keypoints in the pose (always 14).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.shape()[1]
    }

    /// Check if the pose has no keypoints. Always `false` for a constructed
    /// pose; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
