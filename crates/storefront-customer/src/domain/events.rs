//! Domain events for the Customer context.

use serde::{Deserialize, Serialize};
use storefront_core::event::{DomainEvent, EventMetadata};

use super::value_objects::Address;

/// Event type name for [`CustomerCreated`].
pub const CUSTOMER_CREATED_EVENT_TYPE: &str = "CustomerCreatedEvent";
/// Event type name for [`AddressChanged`].
pub const ADDRESS_CHANGED_EVENT_TYPE: &str = "AddressChangedEvent";

/// Emitted when a customer is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreated {
    /// The customer identifier.
    pub customer_id: String,
    /// The customer's name.
    pub name: String,
}

/// Emitted when a customer's address is changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressChanged {
    /// The customer identifier.
    pub customer_id: String,
    /// The customer's name at the time of the change.
    pub name: String,
    /// The new address.
    pub address: Address,
}

/// Event payload variants for the Customer context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerEventKind {
    /// A customer has been created.
    CustomerCreated(CustomerCreated),
    /// A customer's address has changed.
    AddressChanged(AddressChanged),
}

/// Domain event envelope for the Customer context.
#[derive(Debug, Clone)]
pub struct CustomerEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: CustomerEventKind,
}

impl DomainEvent for CustomerEvent {
    fn event_type(&self) -> &str {
        match &self.kind {
            CustomerEventKind::CustomerCreated(_) => CUSTOMER_CREATED_EVENT_TYPE,
            CustomerEventKind::AddressChanged(_) => ADDRESS_CHANGED_EVENT_TYPE,
        }
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("CustomerEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
