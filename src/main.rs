// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use pose_overlay::cli::args::{Cli, Commands};
use pose_overlay::cli::logging::set_verbose;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Draw(args) => {
            set_verbose(args.verbose);

            #[cfg(feature = "annotate")]
            pose_overlay::cli::draw::run_draw(&args);

            #[cfg(not(feature = "annotate"))]
            {
                let _ = args;
                eprintln!("Error: the 'draw' command requires the 'annotate' feature");
                std::process::exit(1);
            }
        }
    }
}
