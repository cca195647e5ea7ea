/// distpack Rebuild - Incremental Executable Updater
///
/// Repackages one script and replaces only its executable inside the
/// existing distribution folder, skipping a full dependency rebuild.

use clap::Parser;
use distpack::config::{self, CONFIG_FILE};
use distpack::layout::Layout;
use distpack::packager::{exe_name, PyInstaller};
use distpack::updater;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "rebuild", version, about = "Swap a single rebuilt executable into dist/")]
struct Args {
    /// Script to repackage, e.g. start_app.py
    script: Option<PathBuf>,

    /// Project root containing the scripts and resources
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Build configuration, relative to the project root
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,
}

fn print_usage() {
    println!("Usage: rebuild <script.py>");
    println!("Example: rebuild start_app.py");
}

fn main() -> ExitCode {
    distpack::init_logging();
    let args = Args::parse();

    let Some(script) = args.script else {
        print_usage();
        return ExitCode::FAILURE;
    };

    let layout = Layout::new(&args.root);
    let build_config = match config::load_config(&layout.path(&args.config)) {
        Ok(c) => c,
        Err(e) => {
            println!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let packager = PyInstaller::new(&build_config.packager.command);
    let target_dir = layout.app_dir(&build_config.main.name);

    match updater::fast_update(&layout, &packager, &script, &target_dir) {
        Ok(report) => {
            println!("\n🔄 Run the updated EXE: {}", report.executable.display());
        }
        Err(e) => {
            println!("❌ Error: {}", e);
            let app = updater::app_name(&script).unwrap_or_default();
            println!("\n❌ Full rebuild required ({} in {})", exe_name(&app), target_dir.display());
        }
    }

    // A failed update is reported above but is not a failed invocation.
    ExitCode::SUCCESS
}
