/// distpack Manager - Full Build Orchestrator
///
/// The Manager is responsible for:
/// - Cleaning previous build output
/// - Checking the required inputs
/// - Packaging the main application and the test system
/// - Assembling both into a single distribution folder

use clap::Parser;
use distpack::config::{self, CONFIG_FILE};
use distpack::layout::Layout;
use distpack::orchestrator::Orchestrator;
use distpack::packager::PyInstaller;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "manager", version, about = "Package the main application and the test system")]
struct Args {
    /// Project root containing the scripts and resources
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Build configuration, relative to the project root
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,
}

fn main() -> ExitCode {
    distpack::init_logging();
    let args = Args::parse();

    println!("🚀 DISTPACK BUILDER");

    let layout = Layout::new(&args.root);
    let build_config = match config::load_config(&layout.path(&args.config)) {
        Ok(c) => c,
        Err(e) => {
            println!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let packager = PyInstaller::new(&build_config.packager.command);
    let orchestrator = Orchestrator::new(layout, &build_config, &packager);

    match orchestrator.build_all() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
