//! Dispatcher wiring.

use std::sync::Arc;

use storefront_core::dispatcher::EventDispatcher;
use storefront_customer::application::event_handlers::{
    SendConsoleLog1Handler, SendConsoleLog2Handler, SendConsoleLogHandler,
};
use storefront_customer::domain::events::{
    ADDRESS_CHANGED_EVENT_TYPE, CUSTOMER_CREATED_EVENT_TYPE,
};
use storefront_product::application::event_handlers::SendEmailWhenProductIsCreatedHandler;
use storefront_product::domain::events::PRODUCT_CREATED_EVENT_TYPE;

/// Builds a dispatcher with every built-in handler subscribed to its event
/// type.
#[must_use]
pub fn build_dispatcher() -> EventDispatcher {
    let mut dispatcher = EventDispatcher::new();

    dispatcher.register(CUSTOMER_CREATED_EVENT_TYPE, Arc::new(SendConsoleLog1Handler));
    dispatcher.register(CUSTOMER_CREATED_EVENT_TYPE, Arc::new(SendConsoleLog2Handler));
    dispatcher.register(ADDRESS_CHANGED_EVENT_TYPE, Arc::new(SendConsoleLogHandler));
    dispatcher.register(
        PRODUCT_CREATED_EVENT_TYPE,
        Arc::new(SendEmailWhenProductIsCreatedHandler),
    );

    dispatcher
}
