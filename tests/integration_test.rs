// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for the overlay library

use ndarray::Array2;
use pose_overlay::{
    Canvas, Color, KEYPOINT_COUNT, Keypoint, OverlayConfig, OverlayView, Palette, Pose, SKELETON,
};

/// Canvas that counts draw calls instead of painting.
#[derive(Default)]
struct CountingCanvas {
    lines: usize,
    circles: usize,
    circle_colors: Vec<Color>,
}

impl Canvas for CountingCanvas {
    fn draw_line(&mut self, _from: (f32, f32), _to: (f32, f32), _color: Color) {
        self.lines += 1;
    }

    fn draw_circle(&mut self, _center: (f32, f32), _radius: i32, color: Color) {
        self.circles += 1;
        self.circle_colors.push(color);
    }
}

fn grid_pose() -> Pose {
    let mut data = Array2::<f32>::zeros((2, KEYPOINT_COUNT));
    for i in 0..KEYPOINT_COUNT {
        data[[0, i]] = 10.0 * i as f32;
        data[[1, i]] = 5.0 * i as f32;
    }
    Pose::new(data).unwrap()
}

#[test]
fn test_layout_preserves_aspect_ratio() {
    let mut view = OverlayView::new();
    view.set_aspect_ratio(9, 16).unwrap();

    let (w, h) = view.measure(1080, 1080);
    assert!(w <= 1080 && h <= 1080);
    // measured size preserves 9:16 within integer division
    assert_eq!(w, h * 9 / 16);
}

#[test]
fn test_negative_aspect_ratio_is_invalid_argument() {
    let mut view = OverlayView::new();
    let err = view.set_aspect_ratio(-1, 5).unwrap_err();
    assert!(err.to_string().contains("Config error"));
}

#[test]
fn test_scale_factors_from_image_and_view_size() {
    let mut view = OverlayView::new();
    view.set_img_size(640, 480);
    view.measure(320, 240);
    assert_eq!(view.scale_factors(), (2.0, 2.0));
}

#[test]
fn test_point_scaling_through_divisor_and_ratio() {
    let mut view = OverlayView::new();
    view.set_img_size(640, 480);
    view.measure(320, 240);

    let pose = grid_pose();
    view.set_draw_points(&pose, 4.0);

    // stored = (px / divisor / ratio_x, py / divisor / ratio_y)
    let (x, y) = view.points()[2];
    assert!((x - 20.0 / 4.0 / 2.0).abs() < f32::EPSILON);
    assert!((y - 10.0 / 4.0 / 2.0).abs() < f32::EPSILON);
}

#[test]
fn test_empty_keypoint_set_renders_nothing() {
    let view = OverlayView::new();
    let mut canvas = CountingCanvas::default();
    view.draw(&mut canvas);
    assert_eq!(canvas.lines, 0);
    assert_eq!(canvas.circles, 0);
}

#[test]
fn test_full_pose_renders_skeleton_and_keypoints() {
    let mut view = OverlayView::new();
    view.set_img_size(640, 480);
    view.measure(640, 480);
    view.set_draw_points(&grid_pose(), 1.0);

    let mut canvas = CountingCanvas::default();
    view.draw(&mut canvas);

    assert_eq!(canvas.lines, SKELETON.len());
    assert_eq!(canvas.circles, KEYPOINT_COUNT);

    // one circle per palette color, in keypoint order
    let palette = Palette::default();
    for (index, color) in canvas.circle_colors.iter().enumerate() {
        let keypoint = Keypoint::from_index(index).unwrap();
        assert_eq!(*color, palette.color(keypoint));
    }
}

#[test]
fn test_custom_palette_flows_through_draw() {
    let palette = Palette::from_hex_table(&["#112233"; 15]).unwrap();
    let config = OverlayConfig::new().with_palette(palette);

    let mut view = OverlayView::with_config(config);
    view.set_img_size(100, 100);
    view.measure(100, 100);
    view.set_draw_points(&grid_pose(), 1.0);

    let mut canvas = CountingCanvas::default();
    view.draw(&mut canvas);
    assert!(canvas
        .circle_colors
        .iter()
        .all(|c| *c == Color(0x11, 0x22, 0x33)));
}

#[test]
fn test_wrong_shape_keypoints_rejected() {
    let bad = Array2::<f32>::zeros((2, KEYPOINT_COUNT - 1));
    assert!(Pose::new(bad).is_err());
}
