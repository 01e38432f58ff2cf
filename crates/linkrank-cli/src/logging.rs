//! Log level handling and subscriber setup.

use tracing_subscriber::EnvFilter;

/// Accepted level names, quietest first.
pub const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Level used when the config file does not set one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Position of `level` in [`LEVELS`], ignoring case.
pub fn level_index(level: &str) -> Option<usize> {
    LEVELS.iter().position(|l| l.eq_ignore_ascii_case(level.trim()))
}

/// Raises `base` by one step per `-v`, stopping at `trace`.
///
/// An unrecognised base counts as [`DEFAULT_LEVEL`].
pub fn effective_level(base: &str, verbosity: u8) -> &'static str {
    let start = level_index(base)
        .or_else(|| level_index(DEFAULT_LEVEL))
        .unwrap_or(2);
    LEVELS[(start + usize::from(verbosity)).min(LEVELS.len() - 1)]
}

/// Installs the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level raised by
/// `verbosity` applies. Records from the `log` facade are forwarded too.
pub fn init(base: &str, verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(effective_level(base, verbosity)));

    // Fails only if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
