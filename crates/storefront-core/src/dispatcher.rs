//! In-process domain event dispatcher.
//!
//! The dispatcher keeps an ordered list of handlers per event type name and
//! fans each notified event out to that list synchronously, in registration
//! order. It holds no locks: a host that shares one dispatcher across threads
//! wraps it in a `Mutex` (or similar) itself.
//!
//! Handler failures are fail-fast. The first handler that returns `Err` stops
//! the fan-out, later handlers for that event are not invoked, and the error
//! is returned unchanged from [`EventDispatcher::notify`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::aggregate::AggregateRoot;
use crate::error::DomainError;
use crate::event::DomainEvent;
use crate::handler::EventHandler;

/// Mapping from event type name to the handlers subscribed to it, in
/// registration order.
pub type HandlerRegistry = HashMap<String, Vec<Arc<dyn EventHandler>>>;

/// Synchronous publish/subscribe registry keyed by event type name.
///
/// A key is present exactly when at least one handler has been registered for
/// it since the last [`unregister_all`](Self::unregister_all). Removing the
/// last handler of a type with [`unregister`](Self::unregister) leaves an
/// empty list behind rather than dropping the key.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HandlerRegistry,
}

impl EventDispatcher {
    /// Creates a dispatcher with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `handler` to the list for `event_type`, creating the list if
    /// needed. Registering the same handler twice keeps both entries.
    pub fn register(&mut self, event_type: &str, handler: Arc<dyn EventHandler>) {
        debug!(event_type, handler = handler.name(), "registering event handler");
        self.handlers
            .entry(event_type.to_owned())
            .or_default()
            .push(handler);
    }

    /// Removes the first registration of this handler instance under
    /// `event_type`. Unknown types and handlers are ignored.
    pub fn unregister(&mut self, event_type: &str, handler: &Arc<dyn EventHandler>) {
        let Some(handlers) = self.handlers.get_mut(event_type) else {
            return;
        };
        if let Some(index) = handlers.iter().position(|h| same_instance(h, handler)) {
            debug!(event_type, handler = handler.name(), "unregistering event handler");
            handlers.remove(index);
        }
    }

    /// Drops every event type and all of its handlers.
    pub fn unregister_all(&mut self) {
        debug!(event_types = self.handlers.len(), "clearing event handler registry");
        self.handlers.clear();
    }

    /// Read-only view of the registry.
    #[must_use]
    pub fn event_handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    /// Handlers registered for `event_type`, or `None` if the type has never
    /// been registered (or the registry was cleared since).
    #[must_use]
    pub fn handlers_for(&self, event_type: &str) -> Option<&[Arc<dyn EventHandler>]> {
        self.handlers.get(event_type).map(Vec::as_slice)
    }

    /// Invokes every handler registered for the event's type, in order,
    /// passing the same event to each. Does nothing when no handler is
    /// registered for the type.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a handler. Handlers after the
    /// failing one are not invoked.
    pub fn notify(&self, event: &dyn DomainEvent) -> Result<(), DomainError> {
        let event_type = event.event_type();
        let Some(handlers) = self.handlers.get(event_type) else {
            debug!(event_type, "no handlers registered for event");
            return Ok(());
        };

        let event_id = event.metadata().event_id;
        debug!(event_type, %event_id, handlers = handlers.len(), "dispatching event");

        for handler in handlers {
            if let Err(err) = handler.handle(event) {
                warn!(
                    event_type,
                    %event_id,
                    handler = handler.name(),
                    error = %err,
                    "event handler failed"
                );
                return Err(err);
            }
        }
        Ok(())
    }

    /// Takes the aggregate's pending events and notifies each one, oldest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns the first handler error. Events after the one that failed are
    /// dropped along with the rest of the batch.
    pub fn publish_pending<A: AggregateRoot>(&self, aggregate: &mut A) -> Result<(), DomainError> {
        for event in aggregate.take_uncommitted_events() {
            self.notify(&event)?;
        }
        Ok(())
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (event_type, handlers) in &self.handlers {
            let names: Vec<&str> = handlers.iter().map(|h| h.name()).collect();
            map.entry(event_type, &names);
        }
        map.finish()
    }
}

fn same_instance(a: &Arc<dyn EventHandler>, b: &Arc<dyn EventHandler>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
