//! Event handlers for the Product context.

use storefront_core::error::DomainError;
use storefront_core::event::DomainEvent;
use storefront_core::handler::EventHandler;
use tracing::info;

use crate::domain::events::ProductEventKind;

/// Sends the "new product" notification e-mail. Delivery is simulated with a
/// log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct SendEmailWhenProductIsCreatedHandler;

impl EventHandler for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), DomainError> {
        let ProductEventKind::ProductCreated(created) =
            serde_json::from_value::<ProductEventKind>(event.to_payload()).map_err(|e| {
                DomainError::EventDecoding(format!("{}: {e}", event.event_type()))
            })?;

        info!(
            handler = self.name(),
            product_id = %created.product_id,
            price = created.price,
            "sending email about new product {}",
            created.name
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SendEmailWhenProductIsCreatedHandler"
    }
}
