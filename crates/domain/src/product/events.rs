//! Product domain event payloads.

use events::EventPayload;
use serde::{Deserialize, Serialize};

use crate::value_objects::{Money, ProductId};

/// Raised when a product is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
}

impl EventPayload for ProductCreated {
    const EVENT_NAME: &'static str = "ProductCreatedEvent";
}
