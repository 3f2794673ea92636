//! Console logging setup

use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global fmt subscriber
///
/// `RUST_LOG` takes precedence; otherwise `info`, or `debug` when verbose.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
