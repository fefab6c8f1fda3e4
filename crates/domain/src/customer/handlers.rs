//! Handlers reacting to customer events.

use events::{DomainEvent, EventError, EventHandler, HandlerResult};

use super::{CustomerAddressChanged, CustomerCreated};

/// Logs a line whenever a customer is created.
///
/// Two instances (`first` and `second`) are usually registered on
/// `CustomerCreatedEvent` to show ordered fan-out.
#[derive(Debug, Clone)]
pub struct LogWhenCustomerIsCreated {
    name: &'static str,
    ordinal: &'static str,
}

impl LogWhenCustomerIsCreated {
    pub fn first() -> Self {
        Self {
            name: "LogWhenCustomerIsCreated1",
            ordinal: "first",
        }
    }

    pub fn second() -> Self {
        Self {
            name: "LogWhenCustomerIsCreated2",
            ordinal: "second",
        }
    }

    /// Renders the log line for a `CustomerCreatedEvent`.
    pub fn message(&self, event: &DomainEvent) -> Result<String, EventError> {
        let payload: CustomerCreated = event.payload_as()?;
        Ok(format!(
            "This is the {} log of the event: {} (customer {}, {})",
            self.ordinal,
            event.event_name(),
            payload.customer_id,
            payload.name
        ))
    }
}

impl EventHandler for LogWhenCustomerIsCreated {
    fn name(&self) -> &str {
        self.name
    }

    fn handle(&self, event: &DomainEvent) -> HandlerResult {
        let message = self.message(event)?;
        tracing::info!(target: "customer_events", occurred_at = %event.occurred_at(), "{message}");
        Ok(())
    }
}

/// Logs the new address whenever a customer's address changes.
#[derive(Debug, Clone, Default)]
pub struct LogWhenCustomerAddressIsChanged;

impl LogWhenCustomerAddressIsChanged {
    /// Renders the log line for a `CustomerAddressChangedEvent`.
    pub fn message(&self, event: &DomainEvent) -> Result<String, EventError> {
        let payload: CustomerAddressChanged = event.payload_as()?;
        Ok(format!(
            "Customer address: {}, {} changed to: {}",
            payload.customer_id, payload.name, payload.address
        ))
    }
}

impl EventHandler for LogWhenCustomerAddressIsChanged {
    fn name(&self) -> &str {
        "LogWhenCustomerAddressIsChanged"
    }

    fn handle(&self, event: &DomainEvent) -> HandlerResult {
        let message = self.message(event)?;
        tracing::info!(target: "customer_events", occurred_at = %event.occurred_at(), "{message}");
        Ok(())
    }
}
