//! Aggregate root abstraction.

use crate::event::DomainEvent;

/// Trait for aggregate roots that record domain events as their state changes.
///
/// Recorded events stay pending until the application layer takes them and
/// publishes them through the dispatcher.
pub trait AggregateRoot: Send + Sync {
    /// The event type this aggregate produces.
    type Event: DomainEvent;

    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> &str;

    /// Returns events recorded since they were last taken.
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Removes and returns the recorded events, oldest first.
    fn take_uncommitted_events(&mut self) -> Vec<Self::Event>;
}
