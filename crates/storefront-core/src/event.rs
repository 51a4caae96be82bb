//! Domain event abstractions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;

/// Metadata attached to every domain event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Type name used as the dispatcher's registry key.
    pub event_type: String,
    /// Identifier of the entity the event is about.
    pub aggregate_id: String,
    /// Correlation ID for tracing a command through its effects.
    pub correlation_id: Uuid,
    /// Timestamp of event creation.
    pub occurred_at: DateTime<Utc>,
}

impl EventMetadata {
    /// Builds metadata for an event created now, with a fresh event ID.
    #[must_use]
    pub fn new(
        event_type: &str,
        aggregate_id: &str,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event_type: event_type.to_owned(),
            aggregate_id: aggregate_id.to_owned(),
            correlation_id,
            occurred_at: clock.now(),
        }
    }
}

/// Trait that all domain events implement.
///
/// Events are immutable once built; the dispatcher hands the same instance
/// to every subscribed handler.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Returns the event type name. Matched verbatim against registry keys.
    fn event_type(&self) -> &str;

    /// Serializes the event payload to JSON.
    fn to_payload(&self) -> serde_json::Value;

    /// Returns the metadata for this event.
    fn metadata(&self) -> &EventMetadata;
}
