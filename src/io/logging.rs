//! Logging setup for the command-line tool

use tracing_subscriber::EnvFilter;

use crate::io::configuration::{DEBUG_LOG_FILTER, DEFAULT_LOG_FILTER};

/// Filter directives used when `RUST_LOG` is unset
pub const fn default_filter(debug: bool) -> &'static str {
    if debug {
        DEBUG_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Install a stderr subscriber
///
/// `RUST_LOG` takes precedence over `debug`. Repeated calls are harmless;
/// only the first subscriber is installed.
pub fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_err() {
        tracing::debug!("logging already initialised");
    }
}
