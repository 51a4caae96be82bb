//! Aggregate roots for the Product context.

use storefront_core::aggregate::AggregateRoot;
use storefront_core::clock::Clock;
use storefront_core::error::DomainError;
use storefront_core::event::EventMetadata;
use uuid::Uuid;

use super::events::{PRODUCT_CREATED_EVENT_TYPE, ProductCreated, ProductEvent, ProductEventKind};

/// The aggregate root for a catalogue product.
#[derive(Debug)]
pub struct Product {
    /// Aggregate identifier.
    pub id: String,
    name: String,
    price: f64,
    /// Events recorded but not yet published.
    uncommitted_events: Vec<ProductEvent>,
}

impl Product {
    /// Creates a product, recording a `ProductCreated` event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `id` or `name` is blank, or
    /// `price` is negative or not finite.
    pub fn create(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(DomainError::Validation("product id is required".into()));
        }
        validate_name(&name)?;
        validate_price(price)?;

        let event = ProductEvent {
            metadata: EventMetadata::new(PRODUCT_CREATED_EVENT_TYPE, &id, correlation_id, clock),
            kind: ProductEventKind::ProductCreated(ProductCreated {
                product_id: id.clone(),
                name: name.clone(),
                price,
            }),
        };

        Ok(Self {
            id,
            name,
            price,
            uncommitted_events: vec![event],
        })
    }

    /// The product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Renames the product.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `name` is blank.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Changes the unit price.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `price` is negative or not finite.
    pub fn change_price(&mut self, price: f64) -> Result<(), DomainError> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation("product name is required".into()));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), DomainError> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::Validation(
            "price must be a non-negative amount".into(),
        ));
    }
    Ok(())
}

impl AggregateRoot for Product {
    type Event = ProductEvent;

    fn aggregate_id(&self) -> &str {
        &self.id
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn take_uncommitted_events(&mut self) -> Vec<Self::Event> {
        std::mem::take(&mut self.uncommitted_events)
    }
}
