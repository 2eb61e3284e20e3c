//! Logging setup for hosts embedding the parser.
//!
//! The library itself only emits `tracing` events; this helper installs a
//! subscriber for callers that do not bring their own.

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install an stderr subscriber filtered by `RUST_LOG`, falling back to `level`
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("airmen_registry={}", level)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .is_ok();

    if installed {
        debug!("Logging initialized at level: {}", level);
    }
    installed
}
