//! Order domain event payloads.

use events::EventPayload;
use serde::{Deserialize, Serialize};

use crate::value_objects::{CustomerId, Money, OrderId};

/// Raised when an order is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreated {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub item_count: usize,
    pub total: Money,
}

impl EventPayload for OrderCreated {
    const EVENT_NAME: &'static str = "OrderCreatedEvent";
}
