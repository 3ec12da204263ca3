//! Log output for the CLI.
//!
//! Library crates log through the `log` facade; the subscriber installed
//! here picks those records up and writes them to stderr.

use tracing::Level;

/// Install the global subscriber. `verbose` lowers the level to DEBUG.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
