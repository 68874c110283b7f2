//! # Structured Logging
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the
//! secret value itself.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Level used when `RUST_LOG` is unset and verbose output was not requested.
pub const DEFAULT_LEVEL: &str = "warn";

/// Level used for `-verbose`.
pub const VERBOSE_LEVEL: &str = "debug";

/// Install the global stderr subscriber.
///
/// `RUST_LOG` takes precedence over the `verbose` switch. An already
/// installed subscriber (e.g. in integration tests) is left in place.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let subscriber =
        FmtSubscriber::builder().with_env_filter(filter).with_writer(std::io::stderr).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn default_level(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LEVEL
    } else {
        DEFAULT_LEVEL
    }
}
