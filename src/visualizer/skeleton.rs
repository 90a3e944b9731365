// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

/// 14-point body model skeleton structure (pairs of keypoint indices)
/// Defines which keypoints connect to form the pose skeleton
pub const SKELETON: [[usize; 2]; 14] = [
    [0, 1],   // head to neck
    [1, 2],   // neck to left shoulder
    [1, 3],   // neck to right shoulder
    [2, 4],   // left shoulder to left elbow
    [4, 6],   // left elbow to left wrist
    [3, 5],   // right shoulder to right elbow
    [5, 7],   // right elbow to right wrist
    [2, 8],   // left shoulder to left hip
    [3, 9],   // right shoulder to right hip
    [8, 9],   // left hip to right hip
    [8, 10],  // left hip to left knee
    [10, 12], // left knee to left ankle
    [9, 11],  // right hip to right knee
    [11, 13], // right knee to right ankle
];

/// Uniform bone color used for every skeleton segment (#6fa8dc).
pub const LINE_COLOR: [u8; 3] = [111, 168, 220];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypoint::KEYPOINT_COUNT;

    #[test]
    fn test_skeleton_indices_in_range() {
        for [a, b] in SKELETON {
            assert!(a < KEYPOINT_COUNT);
            assert!(b < KEYPOINT_COUNT);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_skeleton_segments_unique() {
        let mut pairs: Vec<[usize; 2]> = SKELETON
            .iter()
            .map(|&[a, b]| if a < b { [a, b] } else { [b, a] })
            .collect();
        pairs.sort_unstable();
        pairs.dedup();
        assert_eq!(pairs.len(), SKELETON.len());
    }
}
