//! Domain events for the Product context.

use serde::{Deserialize, Serialize};
use storefront_core::event::{DomainEvent, EventMetadata};

/// Event type name for [`ProductCreated`].
pub const PRODUCT_CREATED_EVENT_TYPE: &str = "ProductCreatedEvent";

/// Emitted when a product is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreated {
    /// The product identifier.
    pub product_id: String,
    /// The product name.
    pub name: String,
    /// Unit price at creation.
    pub price: f64,
}

/// Event payload variants for the Product context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProductEventKind {
    /// A product has been created.
    ProductCreated(ProductCreated),
}

/// Domain event envelope for the Product context.
#[derive(Debug, Clone)]
pub struct ProductEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: ProductEventKind,
}

impl DomainEvent for ProductEvent {
    fn event_type(&self) -> &str {
        match &self.kind {
            ProductEventKind::ProductCreated(_) => PRODUCT_CREATED_EVENT_TYPE,
        }
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("ProductEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
