// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Draw a synthetic pose overlay and save it to disk.
//!
//! ```bash
//! cargo run --example draw_overlay
//! ```

use image::DynamicImage;
use pose_overlay::annotate::annotate_pose;
use pose_overlay::{OverlayConfig, OverlayView, Pose};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A standing figure in 640x480 image space, x row then y row.
    #[rustfmt::skip]
    let coords: [f32; 28] = [
        // head neck  ls     rs     le     re     lw     rw     lh     rh     lk     rk     la     ra
        320.0, 320.0, 260.0, 380.0, 240.0, 400.0, 230.0, 410.0, 280.0, 360.0, 275.0, 365.0, 270.0, 370.0,
        60.0,  120.0, 140.0, 140.0, 210.0, 210.0, 280.0, 280.0, 260.0, 260.0, 350.0, 350.0, 440.0, 440.0,
    ];
    let pose = Pose::from_flat(&coords)?;

    let config = OverlayConfig::new()
        .with_circle_radius(5)
        .with_stroke_width(3);

    let mut view = OverlayView::with_config(config);
    view.set_img_size(640, 480);
    view.set_aspect_ratio(4, 3)?;
    view.measure(640, 480);
    view.set_draw_points(&pose, 1.0);

    let background = DynamicImage::new_rgb8(640, 480);
    let annotated = annotate_pose(&background, &view);
    annotated.save("overlay.png")?;
    println!("Saved overlay.png");

    Ok(())
}
