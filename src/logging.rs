use std::io;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogConfig, LogFormat, DEFAULT_LOG_FILTER};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter. Logs go to stderr so the
/// variable block can be piped from stdout. Calling this twice is harmless.
pub fn init_logging(config: &LogConfig) {
    let fallback = config.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr);

    let _ = match config.format.unwrap_or_default() {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
