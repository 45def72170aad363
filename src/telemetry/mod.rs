mod config;

pub use config::{LogFormat, TelemetryConfig};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// Logs go to stderr so that command output on stdout stays clean.
pub fn init_telemetry() {
    init_with_config(&TelemetryConfig::from_env());
}

pub fn init_with_config(config: &TelemetryConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    // A subscriber may already be installed (tests, embedding callers)
    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    if result.is_ok() {
        tracing::debug!(format = ?config.format, "tracing initialized");
    }
}
