// Logging setup

use tracing::Level;

/// Pick the max log level from CLI flags
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::WARN
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Initialize logging based on CLI flags
///
/// Logs go to stderr so generated output on stdout stays clean.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = level_for(verbose, quiet);

    // A subscriber may already be set (tests, embedding); keep it
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}
