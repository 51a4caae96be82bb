//! Command handlers for the Product context.

use storefront_core::clock::Clock;
use storefront_core::dispatcher::EventDispatcher;
use storefront_core::error::DomainError;
use tracing::{info, instrument};

use crate::domain::aggregates::Product;
use crate::domain::commands::CreateProduct;

/// Handles the `CreateProduct` command: creates the aggregate and publishes
/// its `ProductCreated` event.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the product is invalid, or the first
/// error raised by a subscribed handler.
#[instrument(skip_all, fields(product_id = %command.product_id, correlation_id = %command.correlation_id))]
pub fn handle_create_product(
    command: &CreateProduct,
    clock: &dyn Clock,
    dispatcher: &EventDispatcher,
) -> Result<Product, DomainError> {
    info!("handling create_product command");

    let mut product = Product::create(
        command.product_id.clone(),
        command.name.clone(),
        command.price,
        command.correlation_id,
        clock,
    )?;

    dispatcher.publish_pending(&mut product)?;

    Ok(product)
}
