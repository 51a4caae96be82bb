//! Event handler abstraction.

use crate::error::DomainError;
use crate::event::DomainEvent;

/// A side effect run in response to one kind of domain event.
///
/// Handlers are registered with an [`EventDispatcher`](crate::dispatcher::EventDispatcher)
/// under an event type name and receive every event of that type passed to
/// `notify`. Retry or timeout behaviour, if any, belongs to the handler.
pub trait EventHandler: Send + Sync {
    /// Handles one event.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the handler could not complete its side
    /// effect. The dispatcher stops the fan-out and hands this error to the
    /// caller of `notify`.
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), DomainError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}
