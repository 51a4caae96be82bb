//! Storefront demo entry point.

use storefront_app::config::AppConfig;
use storefront_app::error::AppError;
use storefront_app::{demo, telemetry, wiring};
use storefront_core::clock::SystemClock;

fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    telemetry::init_tracing(&config)?;

    tracing::info!("Starting Storefront domain events demo");

    // One dispatcher for the whole process, passed by reference to publishers.
    let dispatcher = wiring::build_dispatcher();
    tracing::debug!(registry = ?dispatcher, "dispatcher wired");

    let outcome = demo::run(&dispatcher, &SystemClock)?;

    tracing::info!(
        customer_id = %outcome.customer.id,
        customer_active = outcome.customer.is_active(),
        product_id = %outcome.product.id,
        "scenario complete"
    );

    Ok(())
}
