//! Storefront application error types.

use storefront_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is missing or invalid, or tracing could not
    /// be set up.
    #[error("configuration error: {0}")]
    Config(String),

    /// A command or one of the handlers it triggered failed.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}
