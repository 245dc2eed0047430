// Logging module for structured logging using the tracing crate

use crate::config::{LogFormat, LoggingConfig};
use crate::error::ScanError;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for structured logging
///
/// `RUST_LOG` takes precedence over the configured level. Output goes to
/// stderr so that JSON reports written to stdout by callers stay clean.
///
/// # Errors
///
/// Returns [`ScanError::Logging`] if the filter directive is invalid or a
/// global subscriber is already installed.
///
/// # Examples
///
/// ```
/// use noticescan::config::LoggingConfig;
/// use noticescan::logging::init_subscriber;
///
/// let _ = init_subscriber(&LoggingConfig::default());
/// tracing::info!("scanner ready");
/// ```
pub fn init_subscriber(config: &LoggingConfig) -> Result<(), ScanError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| ScanError::Logging(e.to_string()))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    result.map_err(|e| ScanError::Logging(e.to_string()))
}
