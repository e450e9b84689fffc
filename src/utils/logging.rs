//! Logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber.
///
/// The log level comes from `RUST_LOG`; the default keeps the crate and
/// tower-http at debug. Safe to call more than once (later calls are no-ops),
/// which keeps test setup simple.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,sandbox_hint_server=debug,tower_http=debug")
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();
}
