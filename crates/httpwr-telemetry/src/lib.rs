//! Logging setup for the httpwr demo server
//!
//! Installs a `tracing-subscriber` registry with an env filter and a `fmt`
//! layer in text or JSON form.

use httpwr_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the log filter
///
/// A valid `RUST_LOG` wins over the configured directives.
fn build_filter(config: &TelemetryConfig) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.log_filter)
            .map_err(|e| anyhow::anyhow!("invalid telemetry.log_filter '{}': {e}", config.log_filter))
    })
}

/// Initialize the global `tracing` subscriber
///
/// # Errors
///
/// Returns an error if the filter directives are invalid or a global
/// subscriber is already installed
pub fn init(config: &TelemetryConfig) -> anyhow::Result<()> {
    let filter = build_filter(config)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => registry.with(fmt_layer).try_init(),
        LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
