//! Commands for the Customer context.

use uuid::Uuid;

/// Command to create a new customer.
#[derive(Debug, Clone)]
pub struct CreateCustomer {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The customer identifier.
    pub customer_id: String,
    /// The customer's name.
    pub name: String,
}

/// Command to move a customer to a new address.
#[derive(Debug, Clone)]
pub struct ChangeCustomerAddress {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The customer identifier.
    pub customer_id: String,
    /// Street name.
    pub street: String,
    /// Street number.
    pub number: u32,
    /// Postal code.
    pub zip: String,
    /// City.
    pub city: String,
}
