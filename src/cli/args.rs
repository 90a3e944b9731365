// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Draw Options:
    --image, -i <IMAGE>        Path to the source image
    --keypoints, -k <FILE>     Keypoint file: 28 floats, x row then y row
    --scale <SCALE>            Scale divisor applied by the producer [default: 1]
    --aspect <W:H>             Aspect ratio constraint, e.g. 3:4
    --radius <RADIUS>          Keypoint circle radius in pixels [default: 3]
    --stroke <STROKE>          Skeleton line thickness in pixels [default: 2]
    --labels                   Draw landmark name labels
    --save                     Save the annotated image to runs/overlay/draw
    --output, -o <OUTPUT>      Explicit output path (overrides --save location)
    --show                     Display the result in a window
    --verbose                  Show verbose output

Examples:
    pose-overlay draw --image frame.jpg --keypoints pose.txt
    pose-overlay draw -i frame.jpg -k pose.txt --scale 0.5 --save
    pose-overlay draw -i frame.jpg -k pose.txt --aspect 3:4 --labels --show"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw a pose skeleton overlay onto an image
    Draw(DrawArgs),
}

/// Arguments for the draw command.
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct DrawArgs {
    /// Path to the source image
    #[arg(short, long)]
    pub image: String,

    /// Keypoint file: 28 whitespace-separated floats, x row then y row
    #[arg(short, long)]
    pub keypoints: String,

    /// Scale divisor applied by the keypoint producer
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,

    /// Aspect ratio constraint as W:H, e.g. 3:4
    #[arg(long)]
    pub aspect: Option<String>,

    /// Keypoint circle radius in pixels
    #[arg(long, default_value_t = 3)]
    pub radius: i32,

    /// Skeleton line thickness in pixels
    #[arg(long, default_value_t = 2)]
    pub stroke: u32,

    /// Draw landmark name labels next to keypoints
    #[arg(long, default_value_t = false)]
    pub labels: bool,

    /// Save the annotated image to runs/overlay/draw
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Explicit output path for the annotated image
    #[arg(short, long)]
    pub output: Option<String>,

    /// Display the result in a window
    #[arg(long, default_value_t = false)]
    pub show: bool,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_draw_args_defaults() {
        let args = Cli::parse_from(["app", "draw", "--image", "a.jpg", "--keypoints", "p.txt"]);
        match args.command {
            Commands::Draw(draw_args) => {
                assert_eq!(draw_args.image, "a.jpg");
                assert_eq!(draw_args.keypoints, "p.txt");
                assert!((draw_args.scale - 1.0).abs() < f32::EPSILON);
                assert_eq!(draw_args.radius, 3);
                assert_eq!(draw_args.stroke, 2);
                assert!(!draw_args.labels);
                assert!(!draw_args.save);
                assert!(draw_args.verbose);
                assert!(draw_args.aspect.is_none());
            }
        }
    }

    #[test]
    fn test_draw_args_custom() {
        let args = Cli::parse_from([
            "app",
            "draw",
            "--image",
            "frame.png",
            "--keypoints",
            "pose.txt",
            "--scale",
            "0.5",
            "--aspect",
            "3:4",
            "--labels",
            "--verbose",
            "false",
        ]);
        match args.command {
            Commands::Draw(draw_args) => {
                assert_eq!(draw_args.image, "frame.png");
                assert!((draw_args.scale - 0.5).abs() < f32::EPSILON);
                assert_eq!(draw_args.aspect, Some("3:4".to_string()));
                assert!(draw_args.labels);
                assert!(!draw_args.verbose);
            }
        }
    }
}
