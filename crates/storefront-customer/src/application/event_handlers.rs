//! Event handlers for the Customer context.
//!
//! Each handler is a log-only side effect registered with the dispatcher
//! under one customer event type.

use storefront_core::error::DomainError;
use storefront_core::event::DomainEvent;
use storefront_core::handler::EventHandler;
use tracing::info;

use crate::domain::events::{AddressChanged, CustomerEventKind};

/// First log line written when a customer is created.
#[derive(Debug, Default, Clone, Copy)]
pub struct SendConsoleLog1Handler;

impl EventHandler for SendConsoleLog1Handler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), DomainError> {
        info!(
            handler = self.name(),
            aggregate_id = %event.metadata().aggregate_id,
            "this is the first console.log of the event: CustomerCreated"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SendConsoleLog1Handler"
    }
}

/// Second log line written when a customer is created.
#[derive(Debug, Default, Clone, Copy)]
pub struct SendConsoleLog2Handler;

impl EventHandler for SendConsoleLog2Handler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), DomainError> {
        info!(
            handler = self.name(),
            aggregate_id = %event.metadata().aggregate_id,
            "this is the second console.log of the event: CustomerCreated"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SendConsoleLog2Handler"
    }
}

/// Logs the new address of a customer whose address changed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SendConsoleLogHandler;

impl SendConsoleLogHandler {
    /// Renders the log line for an address change.
    #[must_use]
    pub fn message(changed: &AddressChanged) -> String {
        format!(
            "customer address: {}, {} changed to: {}",
            changed.customer_id, changed.name, changed.address
        )
    }
}

impl EventHandler for SendConsoleLogHandler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), DomainError> {
        let kind: CustomerEventKind = serde_json::from_value(event.to_payload())
            .map_err(|e| DomainError::EventDecoding(format!("{}: {e}", event.event_type())))?;

        let CustomerEventKind::AddressChanged(changed) = kind else {
            return Err(DomainError::EventDecoding(format!(
                "{}: expected an AddressChanged payload",
                event.event_type()
            )));
        };

        info!(handler = self.name(), "{}", Self::message(&changed));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SendConsoleLogHandler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_test_support::TestEvent;

    use crate::domain::value_objects::Address;

    fn address_changed() -> AddressChanged {
        AddressChanged {
            customer_id: "1".to_owned(),
            name: "Test".to_owned(),
            address: Address::new("street 1", 2, "302010", "BH").unwrap(),
        }
    }

    #[test]
    fn test_customer_created_log_handlers_accept_any_payload() {
        let event = TestEvent::new(
            "CustomerCreatedEvent",
            serde_json::json!({"id": "1", "name": "Test"}),
        );

        assert!(SendConsoleLog1Handler.handle(&event).is_ok());
        assert!(SendConsoleLog2Handler.handle(&event).is_ok());
    }

    #[test]
    fn test_address_message_names_customer_and_new_address() {
        assert_eq!(
            SendConsoleLogHandler::message(&address_changed()),
            "customer address: 1, Test changed to: street 1, 2, 302010 BH"
        );
    }

    #[test]
    fn test_address_handler_decodes_address_changed_payload() {
        // Arrange
        let payload = serde_json::to_value(CustomerEventKind::AddressChanged(address_changed()))
            .unwrap();
        let event = TestEvent::new("AddressChangedEvent", payload);

        // Act
        let result = SendConsoleLogHandler.handle(&event);

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_address_handler_rejects_foreign_payload() {
        // Arrange
        let event = TestEvent::new(
            "AddressChangedEvent",
            serde_json::json!({"id": "1", "name": "Test"}),
        );

        // Act
        let result = SendConsoleLogHandler.handle(&event);

        // Assert
        match result {
            Err(DomainError::EventDecoding(msg)) => {
                assert!(msg.starts_with("AddressChangedEvent: "), "{msg}");
            }
            other => panic!("expected EventDecoding, got {other:?}"),
        }
    }

    #[test]
    fn test_address_handler_rejects_other_customer_event() {
        let payload = serde_json::to_value(CustomerEventKind::CustomerCreated(
            crate::domain::events::CustomerCreated {
                customer_id: "1".to_owned(),
                name: "Test".to_owned(),
            },
        ))
        .unwrap();
        let event = TestEvent::new("AddressChangedEvent", payload);

        match SendConsoleLogHandler.handle(&event) {
            Err(DomainError::EventDecoding(msg)) => {
                assert_eq!(msg, "AddressChangedEvent: expected an AddressChanged payload");
            }
            other => panic!("expected EventDecoding, got {other:?}"),
        }
    }
}
