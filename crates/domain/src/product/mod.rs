//! Product aggregate and related types.

mod aggregate;
mod events;
mod factory;
mod handlers;

pub use aggregate::Product;
pub use events::ProductCreated;
pub use factory::ProductFactory;
pub use handlers::SendEmailWhenProductIsCreated;

use ::events::EventError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product ID is required")]
    IdRequired,

    #[error("Product name is required")]
    NameRequired,

    /// Invalid price.
    #[error("Invalid price: {price} (must not be negative)")]
    InvalidPrice { price: i64 },

    #[error("Event error: {0}")]
    Event(#[from] EventError),
}
