use clap::Parser;
use gridkit::cli::{self, Cli};

fn main() {
    // Parse CLI arguments first so --log-level can configure logging
    let cli = Cli::parse();

    // Initialize unified logging: routes all log::info!() etc. to the debug log file.
    // When RUST_LOG is set, also mirrors to stderr.
    gridkit::debug::init_log_bridge(cli.log_level.map(|l| l.to_level_filter()));

    log::info!("Starting gridkit {}", gridkit::VERSION);

    if let Err(e) = cli::run(cli) {
        log::error!("{e:#}");
        eprintln!("gridkit: error: {e:#}");
        std::process::exit(1);
    }
}
