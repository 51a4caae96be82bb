//! A short scenario that drives every bounded context through the
//! dispatcher.

use storefront_core::clock::Clock;
use storefront_core::dispatcher::EventDispatcher;
use storefront_customer::application::command_handlers::{
    handle_change_customer_address, handle_create_customer,
};
use storefront_customer::domain::aggregates::Customer;
use storefront_customer::domain::commands::{ChangeCustomerAddress, CreateCustomer};
use storefront_product::application::command_handlers::handle_create_product;
use storefront_product::domain::aggregates::Product;
use storefront_product::domain::commands::CreateProduct;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;

/// The aggregates left behind by [`run`].
#[derive(Debug)]
pub struct DemoOutcome {
    /// The customer, with an address, activated.
    pub customer: Customer,
    /// The product added to the catalogue.
    pub product: Product,
}

/// Creates a customer, moves them to a new address, activates them, and
/// adds a product. Each step publishes its events through `dispatcher`.
///
/// # Errors
///
/// Returns `AppError::Domain` if a command is rejected or a handler fails.
pub fn run(dispatcher: &EventDispatcher, clock: &dyn Clock) -> Result<DemoOutcome, AppError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "running storefront scenario");

    let mut customer = handle_create_customer(
        &CreateCustomer {
            correlation_id,
            customer_id: "1".to_owned(),
            name: "Test".to_owned(),
        },
        clock,
        dispatcher,
    )?;

    handle_change_customer_address(
        &ChangeCustomerAddress {
            correlation_id,
            customer_id: customer.id.clone(),
            street: "street 1".to_owned(),
            number: 2,
            zip: "302010".to_owned(),
            city: "BH".to_owned(),
        },
        &mut customer,
        clock,
        dispatcher,
    )?;
    customer.activate()?;

    let product = handle_create_product(
        &CreateProduct {
            correlation_id,
            product_id: "p1".to_owned(),
            name: "Product 1".to_owned(),
            price: 10.0,
        },
        clock,
        dispatcher,
    )?;

    Ok(DemoOutcome { customer, product })
}
