//! Test event — a `DomainEvent` with an arbitrary type name and payload.

use storefront_core::event::{DomainEvent, EventMetadata};
use uuid::Uuid;

use crate::clock::FixedClock;

/// An event whose type name and JSON payload are chosen by the test.
#[derive(Debug, Clone)]
pub struct TestEvent {
    /// Event metadata. `event_type` doubles as the registry key.
    pub metadata: EventMetadata,
    /// Payload returned from `to_payload`.
    pub payload: serde_json::Value,
}

impl TestEvent {
    /// Creates an event of `event_type` carrying `payload`, stamped with the
    /// shared fixed test time. The aggregate ID is taken from the payload's
    /// `"id"` field when present.
    #[must_use]
    pub fn new(event_type: &str, payload: serde_json::Value) -> Self {
        let aggregate_id = payload
            .get("id")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_owned();
        Self {
            metadata: EventMetadata::new(
                event_type,
                &aggregate_id,
                Uuid::new_v4(),
                &FixedClock::default(),
            ),
            payload,
        }
    }
}

impl DomainEvent for TestEvent {
    fn event_type(&self) -> &str {
        &self.metadata.event_type
    }

    fn to_payload(&self) -> serde_json::Value {
        self.payload.clone()
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
