// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Keypoint identity for the 14-point body model.
//!
//! The model emits keypoints in a fixed order; index identity determines both
//! the palette color and the skeleton connectivity. This enum names the
//! indices so callers never touch raw magic numbers.

/// Number of keypoints in a pose.
pub const KEYPOINT_COUNT: usize = 14;

/// One anatomical landmark of the 14-point body model, in model output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Keypoint {
    /// Top of the head.
    Head = 0,
    /// Base of the neck.
    Neck = 1,
    /// Left shoulder.
    LeftShoulder = 2,
    /// Right shoulder.
    RightShoulder = 3,
    /// Left elbow.
    LeftElbow = 4,
    /// Right elbow.
    RightElbow = 5,
    /// Left wrist.
    LeftWrist = 6,
    /// Right wrist.
    RightWrist = 7,
    /// Left hip.
    LeftHip = 8,
    /// Right hip.
    RightHip = 9,
    /// Left knee.
    LeftKnee = 10,
    /// Right knee.
    RightKnee = 11,
    /// Left ankle.
    LeftAnkle = 12,
    /// Right ankle.
    RightAnkle = 13,
}

impl Keypoint {
    /// All keypoints in model output order.
    pub const ALL: [Keypoint; KEYPOINT_COUNT] = [
        Keypoint::Head,
        Keypoint::Neck,
        Keypoint::LeftShoulder,
        Keypoint::RightShoulder,
        Keypoint::LeftElbow,
        Keypoint::RightElbow,
        Keypoint::LeftWrist,
        Keypoint::RightWrist,
        Keypoint::LeftHip,
        Keypoint::RightHip,
        Keypoint::LeftKnee,
        Keypoint::RightKnee,
        Keypoint::LeftAnkle,
        Keypoint::RightAnkle,
    ];

    /// Get the model output index of this keypoint.
    ///
    /// # Returns
    ///
    /// * The zero-based index, also the palette index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a keypoint by model output index.
    ///
    /// # Arguments
    ///
    /// * `index` - Zero-based model output index.
    ///
    /// # Returns
    ///
    /// * `Some` keypoint for indices `0..14`, otherwise `None`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable landmark name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Neck => "neck",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for kp in Keypoint::ALL {
            assert_eq!(Keypoint::from_index(kp.index()), Some(kp));
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Keypoint::from_index(KEYPOINT_COUNT), None);
        assert_eq!(Keypoint::from_index(usize::MAX), None);
    }

    #[test]
    fn test_names_unique() {
        let mut names: Vec<&str> = Keypoint::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), KEYPOINT_COUNT);
    }
}
