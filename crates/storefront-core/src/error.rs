//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity or value object invariant was violated.
    #[error("validation error: {0}")]
    Validation(String),

    /// A handler received an event whose payload it could not decode.
    #[error("event decoding error: {0}")]
    EventDecoding(String),

    /// A handler's own side effect failed.
    #[error("handler {handler} failed: {reason}")]
    HandlerFailed {
        /// Name of the failing handler.
        handler: String,
        /// What went wrong.
        reason: String,
    },
}
