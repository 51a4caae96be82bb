//! Command handlers for the Customer context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: build or mutate the aggregate, then publish the
//! events it recorded through the dispatcher.

use storefront_core::clock::Clock;
use storefront_core::dispatcher::EventDispatcher;
use storefront_core::error::DomainError;
use tracing::{info, instrument};

use crate::domain::aggregates::Customer;
use crate::domain::commands::{ChangeCustomerAddress, CreateCustomer};
use crate::domain::value_objects::Address;

/// Handles the `CreateCustomer` command: creates the aggregate and publishes
/// its `CustomerCreated` event.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the customer is invalid, or the first
/// error raised by a subscribed handler.
#[instrument(skip_all, fields(customer_id = %command.customer_id, correlation_id = %command.correlation_id))]
pub fn handle_create_customer(
    command: &CreateCustomer,
    clock: &dyn Clock,
    dispatcher: &EventDispatcher,
) -> Result<Customer, DomainError> {
    info!("handling create_customer command");

    let mut customer = Customer::create(
        command.customer_id.clone(),
        command.name.clone(),
        command.correlation_id,
        clock,
    )?;

    dispatcher.publish_pending(&mut customer)?;

    Ok(customer)
}

/// Handles the `ChangeCustomerAddress` command: validates the new address,
/// applies it to `customer` and publishes the `AddressChanged` event.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the command targets another customer
/// or the address is invalid, or the first error raised by a subscribed
/// handler.
#[instrument(skip_all, fields(customer_id = %command.customer_id, correlation_id = %command.correlation_id))]
pub fn handle_change_customer_address(
    command: &ChangeCustomerAddress,
    customer: &mut Customer,
    clock: &dyn Clock,
    dispatcher: &EventDispatcher,
) -> Result<(), DomainError> {
    if command.customer_id != customer.id {
        return Err(DomainError::Validation(format!(
            "command targets customer {} but customer {} was supplied",
            command.customer_id, customer.id
        )));
    }

    info!("handling change_customer_address command");

    let address = Address::new(
        command.street.clone(),
        command.number,
        command.zip.clone(),
        command.city.clone(),
    )?;

    customer.change_address(address, command.correlation_id, clock);
    dispatcher.publish_pending(customer)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use storefront_core::aggregate::AggregateRoot;
    use storefront_core::dispatcher::EventDispatcher;
    use storefront_core::error::DomainError;
    use storefront_test_support::{CallLog, FailingEventHandler, FixedClock, RecordingEventHandler};
    use uuid::Uuid;

    use super::{handle_change_customer_address, handle_create_customer};
    use crate::domain::commands::{ChangeCustomerAddress, CreateCustomer};
    use crate::domain::events::{ADDRESS_CHANGED_EVENT_TYPE, CUSTOMER_CREATED_EVENT_TYPE};

    fn create_command() -> CreateCustomer {
        CreateCustomer {
            correlation_id: Uuid::new_v4(),
            customer_id: "1".to_owned(),
            name: "Test".to_owned(),
        }
    }

    fn change_address_command(customer_id: &str) -> ChangeCustomerAddress {
        ChangeCustomerAddress {
            correlation_id: Uuid::new_v4(),
            customer_id: customer_id.to_owned(),
            street: "street 1".to_owned(),
            number: 2,
            zip: "302010".to_owned(),
            city: "BH".to_owned(),
        }
    }

    #[test]
    fn test_handle_create_customer_publishes_customer_created_event() {
        // Arrange
        let log = CallLog::new();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(
            CUSTOMER_CREATED_EVENT_TYPE,
            RecordingEventHandler::shared("created", &log),
        );
        let command = create_command();

        // Act
        let customer = handle_create_customer(&command, &FixedClock::default(), &dispatcher).unwrap();

        // Assert
        assert_eq!(customer.id, "1");
        assert!(customer.uncommitted_events().is_empty());

        let invocations = log.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].event_type, "CustomerCreatedEvent");
        assert_eq!(
            invocations[0].payload,
            serde_json::json!({"CustomerCreated": {"customer_id": "1", "name": "Test"}})
        );
    }

    #[test]
    fn test_handle_create_customer_rejects_blank_name_before_publishing() {
        // Arrange
        let log = CallLog::new();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(
            CUSTOMER_CREATED_EVENT_TYPE,
            RecordingEventHandler::shared("created", &log),
        );
        let command = CreateCustomer {
            name: " ".to_owned(),
            ..create_command()
        };

        // Act
        let result = handle_create_customer(&command, &FixedClock::default(), &dispatcher);

        // Assert
        match result {
            Err(DomainError::Validation(msg)) => assert_eq!(msg, "customer name is required"),
            other => panic!("expected Validation, got {other:?}"),
        }
        assert!(log.invocations().is_empty());
    }

    #[test]
    fn test_handle_create_customer_propagates_handler_failure() {
        // Arrange
        let log = CallLog::new();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(
            CUSTOMER_CREATED_EVENT_TYPE,
            FailingEventHandler::shared("mailer", &log),
        );

        // Act
        let result = handle_create_customer(&create_command(), &FixedClock::default(), &dispatcher);

        // Assert
        match result {
            Err(DomainError::HandlerFailed { handler, .. }) => assert_eq!(handler, "mailer"),
            other => panic!("expected HandlerFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_handle_change_customer_address_publishes_address_changed_event() {
        // Arrange
        let log = CallLog::new();
        let mut dispatcher = EventDispatcher::new();
        let clock = FixedClock::default();
        let mut customer = handle_create_customer(&create_command(), &clock, &dispatcher).unwrap();
        dispatcher.register(
            ADDRESS_CHANGED_EVENT_TYPE,
            RecordingEventHandler::shared("address", &log),
        );
        let command = change_address_command("1");

        // Act
        handle_change_customer_address(&command, &mut customer, &clock, &dispatcher).unwrap();

        // Assert
        assert_eq!(
            customer.address().map(ToString::to_string).as_deref(),
            Some("street 1, 2, 302010 BH")
        );
        let invocations = log.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].event_type, "AddressChangedEvent");
    }

    #[test]
    fn test_handle_change_customer_address_rejects_mismatched_customer() {
        // Arrange
        let dispatcher = EventDispatcher::new();
        let clock = FixedClock::default();
        let mut customer = handle_create_customer(&create_command(), &clock, &dispatcher).unwrap();
        let command = change_address_command("2");

        // Act
        let result = handle_change_customer_address(&command, &mut customer, &clock, &dispatcher);

        // Assert
        match result {
            Err(DomainError::Validation(msg)) => {
                assert_eq!(msg, "command targets customer 2 but customer 1 was supplied");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
        assert!(customer.address().is_none());
    }

    #[test]
    fn test_handle_change_customer_address_rejects_invalid_address() {
        let dispatcher = EventDispatcher::new();
        let clock = FixedClock::default();
        let mut customer = handle_create_customer(&create_command(), &clock, &dispatcher).unwrap();
        let command = ChangeCustomerAddress {
            number: 0,
            ..change_address_command("1")
        };

        let result = handle_change_customer_address(&command, &mut customer, &clock, &dispatcher);

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(customer.address().is_none());
    }

    #[test]
    fn test_registered_handler_instance_can_be_shared_across_types() {
        let log = CallLog::new();
        let handler = RecordingEventHandler::shared("audit", &log);
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(CUSTOMER_CREATED_EVENT_TYPE, Arc::clone(&handler));
        dispatcher.register(ADDRESS_CHANGED_EVENT_TYPE, handler);
        let clock = FixedClock::default();

        let mut customer = handle_create_customer(&create_command(), &clock, &dispatcher).unwrap();
        handle_change_customer_address(&change_address_command("1"), &mut customer, &clock, &dispatcher)
            .unwrap();

        assert_eq!(log.count_for("audit"), 2);
    }
}
