//! CLI entry point for the grid authoring tool

use clap::Parser;
use gridwright::io::cli::{Cli, SessionProcessor};
use gridwright::io::configuration::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use gridwright::io::error::computation_error;
use tracing_subscriber::EnvFilter;

fn main() -> gridwright::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let processor = SessionProcessor::new(cli);
    let lines = processor.process()?;
    print_lines(&lines);
    Ok(())
}

// RUST_LOG takes precedence over --verbose
fn init_logging(verbose: bool) -> gridwright::Result<()> {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| computation_error("logging setup", &e))
}

// Allow print for the command's report
#[allow(clippy::print_stdout)]
fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
