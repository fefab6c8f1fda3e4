//! Handlers reacting to product events.

use events::{DomainEvent, EventError, EventHandler, HandlerResult};

use super::ProductCreated;

/// Sends (logs) a notification e-mail when a product is created.
#[derive(Debug, Clone)]
pub struct SendEmailWhenProductIsCreated {
    sender: String,
}

impl SendEmailWhenProductIsCreated {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Renders the e-mail body for a `ProductCreatedEvent`.
    pub fn message(&self, event: &DomainEvent) -> Result<String, EventError> {
        let payload: ProductCreated = event.payload_as()?;
        Ok(format!(
            "Sending email from {}: product {} ({}) created at {}",
            self.sender, payload.name, payload.price, payload.product_id
        ))
    }
}

impl EventHandler for SendEmailWhenProductIsCreated {
    fn name(&self) -> &str {
        "SendEmailWhenProductIsCreated"
    }

    fn handle(&self, event: &DomainEvent) -> HandlerResult {
        let message = self.message(event)?;
        tracing::info!(target: "notifications", sender = %self.sender, "{message}");
        Ok(())
    }
}
