//! langtour binary entry point

use clap::Parser;
use colored::Colorize;
use langtour::cli::{self, Cli};
use langtour::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = cli::run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Initialise the stderr tracing subscriber.
///
/// The filter comes from `LANGTOUR_LOG` and defaults to `warn`, so the
/// transcript on stdout is the only output of a normal run.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
