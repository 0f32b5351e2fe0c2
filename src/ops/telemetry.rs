// * Telemetry - structured logging setup for the inspector binary and embedding services.
// * The library itself only emits events; installing a subscriber is the caller's choice.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when RUST_LOG is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Initializes the tracing subscriber with JSON formatting on stderr
///
/// # Example
/// ```ignore
/// use content_intel::ops::telemetry;
///
/// telemetry::init_tracing();
/// tracing::info!(base_path = "/en", "Generating links");
/// ```
pub fn init_tracing() {
    init_tracing_with_level(DEFAULT_LOG_LEVEL);
}

/// Initializes JSON tracing with a custom default level. RUST_LOG still wins when set.
pub fn init_tracing_with_level(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // * try_init: a host application may already have installed a subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init();
}

/// Initializes tracing with pretty formatting (for development)
pub fn init_tracing_pretty() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().pretty().with_writer(std::io::stderr))
        .try_init();
}
