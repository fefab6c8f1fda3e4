//! Checkout: the Order aggregate and related types.

mod aggregate;
mod events;
mod factory;
mod order_item;
mod service;

pub use aggregate::Order;
pub use events::OrderCreated;
pub use factory::{OrderFactory, OrderItemProps, OrderProps};
pub use order_item::OrderItem;
pub use service::OrderService;

use ::events::EventError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order ID is required")]
    IdRequired,

    /// Customer ID is required.
    #[error("Customer ID is required")]
    CustomerIdRequired,

    /// Order has no items.
    #[error("Order must have at least one item")]
    NoItems,

    /// Invalid quantity.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// Invalid price.
    #[error("Invalid price: {price} (must not be negative)")]
    InvalidPrice { price: i64 },

    /// The line total `price * quantity` is not representable.
    #[error("Line total overflow: {price} cents x {quantity}")]
    LineTotalOverflow { price: i64, quantity: u32 },

    /// The order total is not representable.
    #[error("Order total overflow")]
    TotalOverflow,

    /// Item not found in order.
    #[error("Item not found: {item_id}")]
    ItemNotFound { item_id: String },

    /// Removing the item would leave the order without items.
    #[error("Cannot remove item {item_id}: an order must keep at least one item")]
    WouldBeEmpty { item_id: String },

    #[error("Event error: {0}")]
    Event(#[from] EventError),
}
