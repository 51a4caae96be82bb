//! Aggregate roots for the Customer context.

use storefront_core::aggregate::AggregateRoot;
use storefront_core::clock::Clock;
use storefront_core::error::DomainError;
use storefront_core::event::EventMetadata;
use uuid::Uuid;

use super::events::{
    ADDRESS_CHANGED_EVENT_TYPE, AddressChanged, CUSTOMER_CREATED_EVENT_TYPE, CustomerCreated,
    CustomerEvent, CustomerEventKind,
};
use super::value_objects::Address;

/// The aggregate root for a customer.
#[derive(Debug)]
pub struct Customer {
    /// Aggregate identifier.
    pub id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
    /// Events recorded but not yet published.
    uncommitted_events: Vec<CustomerEvent>,
}

impl Customer {
    /// Creates a customer, recording a `CustomerCreated` event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `id` or `name` is blank.
    pub fn create(
        id: impl Into<String>,
        name: impl Into<String>,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(DomainError::Validation("customer id is required".into()));
        }
        validate_name(&name)?;

        let mut customer = Self {
            id,
            name,
            address: None,
            active: false,
            reward_points: 0,
            uncommitted_events: Vec::new(),
        };

        let event = CustomerEvent {
            metadata: EventMetadata::new(
                CUSTOMER_CREATED_EVENT_TYPE,
                &customer.id,
                correlation_id,
                clock,
            ),
            kind: CustomerEventKind::CustomerCreated(CustomerCreated {
                customer_id: customer.id.clone(),
                name: customer.name.clone(),
            }),
        };
        customer.uncommitted_events.push(event);

        Ok(customer)
    }

    /// The customer's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The customer's current address, if one has been set.
    #[must_use]
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Whether the customer is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Accumulated reward points.
    #[must_use]
    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }

    /// Renames the customer.
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

    /// Replaces the customer's address, recording an `AddressChanged` event.
    pub fn change_address(&mut self, address: Address, correlation_id: Uuid, clock: &dyn Clock) {
        let event = CustomerEvent {
            metadata: EventMetadata::new(
                ADDRESS_CHANGED_EVENT_TYPE,
                &self.id,
                correlation_id,
                clock,
            ),
            kind: CustomerEventKind::AddressChanged(AddressChanged {
                customer_id: self.id.clone(),
                name: self.name.clone(),
                address: address.clone(),
            }),
        };
        self.address = Some(address);
        self.uncommitted_events.push(event);
    }

    /// Activates the customer.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the customer has no address.
    pub fn activate(&mut self) -> Result<(), DomainError> {
        if self.address.is_none() {
            return Err(DomainError::Validation(
                "address is mandatory to activate a customer".into(),
            ));
        }
        self.active = true;
        Ok(())
    }

    /// Deactivates the customer.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Adds reward points, saturating at `u64::MAX`.
    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points = self.reward_points.saturating_add(points);
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation("customer name is required".into()));
    }
    Ok(())
}

impl AggregateRoot for Customer {
    type Event = CustomerEvent;

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
