//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
