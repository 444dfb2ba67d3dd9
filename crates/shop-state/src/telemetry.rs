//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::ShopConfig;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shop_state=trace` - Show trace for the store layer only
/// - Default: `config.log_filter` (`info,shop=debug` unless overridden)
///
/// Call once, at startup.
pub fn init_tracing(config: &ShopConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .init();
}

fn env_filter(config: &ShopConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
}
