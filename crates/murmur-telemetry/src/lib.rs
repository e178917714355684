//! Telemetry for Murmur
//!
//! Structured logging via the `tracing` ecosystem.

use murmur_config::{LogFormat, TelemetryConfig};

/// Initialize the global tracing subscriber
///
/// `log_filter` is the default directive; the `RUST_LOG` environment
/// variable overrides it when set.
pub fn init(config: Option<&TelemetryConfig>, log_filter: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let format = config.map_or(LogFormat::Text, |c| c.log_format);

    match format {
        LogFormat::Text => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);

            tracing_subscriber::registry().with(filter).with(fmt_layer).init();
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

            tracing_subscriber::registry().with(filter).with(fmt_layer).init();
        }
    }
}
