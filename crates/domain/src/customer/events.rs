//! Customer domain event payloads.

use events::EventPayload;
use serde::{Deserialize, Serialize};

use super::Address;
use crate::value_objects::CustomerId;

/// Raised when a customer is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreated {
    pub customer_id: CustomerId,
    pub name: String,
}

impl EventPayload for CustomerCreated {
    const EVENT_NAME: &'static str = "CustomerCreatedEvent";
}

/// Raised when a customer's address is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAddressChanged {
    pub customer_id: CustomerId,
    pub name: String,
    pub address: Address,
}

impl EventPayload for CustomerAddressChanged {
    const EVENT_NAME: &'static str = "CustomerAddressChangedEvent";
}
