//! Order aggregate implementation.

use events::DomainEvent;

use super::{OrderCreated, OrderError, OrderItem};
use crate::aggregate::AggregateRoot;
use crate::value_objects::{CustomerId, Money, OrderId, OrderItemId};

/// Order aggregate root.
///
/// Owns its line items and always holds at least one. The total is derived
/// from the current items on every call and always fits in a `Money`.
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    items: Vec<OrderItem>,
    events: Vec<DomainEvent>,
}

impl Order {
    /// Creates an order and records an `OrderCreatedEvent`.
    pub fn new(
        id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let mut order = Self::restore(id.into(), customer_id.into(), items)?;
        let event = DomainEvent::from_payload(&OrderCreated {
            order_id: order.id.clone(),
            customer_id: order.customer_id.clone(),
            item_count: order.items.len(),
            total: order.total(),
        })?;
        order.events.push(event);
        Ok(order)
    }

    /// Rebuilds an order from stored state without recording events.
    pub fn restore(
        id: OrderId,
        customer_id: CustomerId,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let order = Self {
            id,
            customer_id,
            items,
            events: Vec::new(),
        };
        order.validate()?;
        Ok(order)
    }

    /// Checks the order invariants.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_blank() {
            return Err(OrderError::IdRequired);
        }
        if self.customer_id.is_blank() {
            return Err(OrderError::CustomerIdRequired);
        }
        if self.items.is_empty() {
            return Err(OrderError::NoItems);
        }
        Self::checked_total(&self.items).ok_or(OrderError::TotalOverflow)?;
        Ok(())
    }

    fn checked_total(items: &[OrderItem]) -> Option<Money> {
        items
            .iter()
            .try_fold(Money::zero(), |acc, item| acc.checked_add(item.line_total()))
    }
}

// Query methods
impl Order {
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Returns the items in insertion order.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the first item with the given id.
    pub fn get_item(&self, item_id: &OrderItemId) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.id() == item_id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(OrderItem::quantity).sum()
    }

    /// Sum of `price * quantity` over the current items.
    ///
    /// Exact: construction and `add_item` reject items that would overflow it.
    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

// Mutations
impl Order {
    /// Appends an item. Items sharing an id are kept side by side.
    ///
    /// Fails with `TotalOverflow`, leaving the order unchanged, if the new
    /// total would not fit.
    pub fn add_item(&mut self, item: OrderItem) -> Result<(), OrderError> {
        self.total()
            .checked_add(item.line_total())
            .ok_or(OrderError::TotalOverflow)?;
        self.items.push(item);
        Ok(())
    }

    /// Removes the first item with the given id and returns it.
    ///
    /// Fails with `ItemNotFound` if no item matches, and with `WouldBeEmpty`
    /// if it is the last item; the order is unchanged in both cases.
    pub fn remove_item(&mut self, item_id: &OrderItemId) -> Result<OrderItem, OrderError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id() == item_id)
            .ok_or_else(|| OrderError::ItemNotFound {
                item_id: item_id.to_string(),
            })?;

        if self.items.len() == 1 {
            return Err(OrderError::WouldBeEmpty {
                item_id: item_id.to_string(),
            });
        }

        Ok(self.items.remove(position))
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn aggregate_type() -> &'static str {
        "Order"
    }

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn pending_events(&self) -> &[DomainEvent] {
        &self.events
    }

    fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Compares observable state; pending events are ignored.
impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.customer_id == other.customer_id && self.items == other.items
    }
}

impl Eq for Order {}
