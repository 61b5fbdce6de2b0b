//! Logger setup for the demo binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises the global logger.
///
/// Debug messages are printed when `verbose` is set, info level and above
/// otherwise. An explicit `RUST_LOG` value overrides the flag entirely.
/// Repeated calls are harmless: only the first one installs a logger, so
/// tests may call this freely.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = Builder::from_env(Env::default().default_filter_or(default_level.to_string()))
        .try_init();
}
