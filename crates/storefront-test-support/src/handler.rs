//! Test handlers — `EventHandler` implementations that record what they see.

use std::sync::{Arc, Mutex};

use storefront_core::error::DomainError;
use storefront_core::event::DomainEvent;
use storefront_core::handler::EventHandler;
use uuid::Uuid;

/// One recorded `handle` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Name of the handler that was called.
    pub handler: &'static str,
    /// Type name of the event it received.
    pub event_type: String,
    /// ID of the event it received.
    pub event_id: Uuid,
    /// Payload of the event it received.
    pub payload: serde_json::Value,
}

/// A call log shared between handlers so tests can assert cross-handler
/// ordering.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Invocation>>>);

impl CallLog {
    /// Creates an empty call log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every recorded invocation, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn invocations(&self) -> Vec<Invocation> {
        self.0.lock().unwrap().clone()
    }

    /// Returns the handler names in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().iter().map(|i| i.handler).collect()
    }

    /// Returns how many times `handler` was called.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn count_for(&self, handler: &str) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.handler == handler)
            .count()
    }

    fn record(&self, handler: &'static str, event: &dyn DomainEvent) {
        self.0.lock().unwrap().push(Invocation {
            handler,
            event_type: event.event_type().to_owned(),
            event_id: event.metadata().event_id,
            payload: event.to_payload(),
        });
    }
}

/// A handler that records every event it receives and always succeeds.
#[derive(Debug)]
pub struct RecordingEventHandler {
    name: &'static str,
    log: CallLog,
}

impl RecordingEventHandler {
    /// Creates a handler that records into `log` under `name`.
    #[must_use]
    pub fn new(name: &'static str, log: &CallLog) -> Self {
        Self {
            name,
            log: log.clone(),
        }
    }

    /// Creates the handler already wrapped for registration.
    #[must_use]
    pub fn shared(name: &'static str, log: &CallLog) -> Arc<dyn EventHandler> {
        Arc::new(Self::new(name, log))
    }
}

impl EventHandler for RecordingEventHandler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), DomainError> {
        self.log.record(self.name, event);
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// A handler that records the event and then fails with
/// `DomainError::HandlerFailed`.
#[derive(Debug)]
pub struct FailingEventHandler {
    name: &'static str,
    log: CallLog,
}

impl FailingEventHandler {
    /// Creates the handler already wrapped for registration.
    #[must_use]
    pub fn shared(name: &'static str, log: &CallLog) -> Arc<dyn EventHandler> {
        Arc::new(Self {
            name,
            log: log.clone(),
        })
    }
}

impl EventHandler for FailingEventHandler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), DomainError> {
        self.log.record(self.name, event);
        Err(DomainError::HandlerFailed {
            handler: self.name.to_owned(),
            reason: "mail server unreachable".into(),
        })
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
