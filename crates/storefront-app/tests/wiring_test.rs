//! Tests for the default dispatcher wiring and the demo scenario.

use storefront_app::{demo, wiring};
use storefront_core::aggregate::AggregateRoot;
use storefront_test_support::FixedClock;

fn handler_names(dispatcher: &storefront_core::dispatcher::EventDispatcher, event_type: &str) -> Vec<&'static str> {
    dispatcher
        .handlers_for(event_type)
        .unwrap_or_default()
        .iter()
        .map(|h| h.name())
        .collect()
}

#[test]
fn test_build_dispatcher_subscribes_default_handlers() {
    // Act
    let dispatcher = wiring::build_dispatcher();

    // Assert
    assert_eq!(dispatcher.event_handlers().len(), 3);
    assert_eq!(
        handler_names(&dispatcher, "CustomerCreatedEvent"),
        vec!["SendConsoleLog1Handler", "SendConsoleLog2Handler"]
    );
    assert_eq!(
        handler_names(&dispatcher, "AddressChangedEvent"),
        vec!["SendConsoleLogHandler"]
    );
    assert_eq!(
        handler_names(&dispatcher, "ProductCreatedEvent"),
        vec!["SendEmailWhenProductIsCreatedHandler"]
    );
}

#[test]
fn test_build_dispatcher_returns_independent_instances() {
    // Arrange
    let mut first = wiring::build_dispatcher();
    let second = wiring::build_dispatcher();

    // Act
    first.unregister_all();

    // Assert
    assert!(first.event_handlers().is_empty());
    assert_eq!(second.event_handlers().len(), 3);
}

#[test]
fn test_demo_run_publishes_every_event_and_activates_customer() {
    // Arrange
    let dispatcher = wiring::build_dispatcher();

    // Act
    let outcome = demo::run(&dispatcher, &FixedClock::default()).unwrap();

    // Assert
    assert!(outcome.customer.is_active());
    assert_eq!(
        outcome.customer.address().map(ToString::to_string).as_deref(),
        Some("street 1, 2, 302010 BH")
    );
    assert!(outcome.customer.uncommitted_events().is_empty());
    assert_eq!(outcome.product.id, "p1");
    assert!(outcome.product.uncommitted_events().is_empty());
}
