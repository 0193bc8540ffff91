//! Log setup for the CLI.
//!
//! Diagnostics go to stderr through `env_logger`; the list, stats and hints
//! are written to stdout by the presenter and never pass through the logger.

use log::LevelFilter;

/// Pick the log level from the `--quiet` / `--verbose` flags.
pub(crate) fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. `RUST_LOG` still overrides the flag level.
pub(crate) fn init(quiet: bool, verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(quiet, verbose));
    if !verbose {
        builder.format_timestamp(None).format_target(false);
    }
    builder.parse_default_env();
    if let Err(e) = builder.try_init() {
        eprintln!("Logger already initialized: {e}");
    }
}
