//! Commands for the Product context.

use uuid::Uuid;

/// Command to add a product to the catalogue.
#[derive(Debug, Clone)]
pub struct CreateProduct {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The product identifier.
    pub product_id: String,
    /// The product name.
    pub name: String,
    /// Unit price.
    pub price: f64,
}
