//! Structured logging initialization via `tracing`.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Respects the `RUST_LOG` environment variable for filtering; the given
/// default level directive applies when it is not set.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
