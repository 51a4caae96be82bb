//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat};
use crate::error::AppError;

/// Installs the global tracing subscriber described by `config`.
///
/// # Errors
///
/// Returns `AppError::Config` if the filter directives do not parse or a
/// global subscriber is already installed.
pub fn init_tracing(config: &AppConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| AppError::Config(format!("RUST_LOG is not a valid filter: {e}")))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    installed.map_err(|e| AppError::Config(format!("failed to install tracing subscriber: {e}")))
}
