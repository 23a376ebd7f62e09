//! CLI module

mod commands;
pub mod output;

pub use commands::{Cli, Commands};

use tracing::Level;

/// Installs the stderr log subscriber for the requested verbosity
///
/// Warnings only by default, `--verbose` for info, `--debug` for debug.
pub fn init_tracing(verbose: bool, debug: bool) {
    let level = if debug {
        Level::DEBUG
    } else if verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
