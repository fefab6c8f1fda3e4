//! Domain error types.

use events::{DispatchError, EventError};
use thiserror::Error;

use crate::checkout::OrderError;
use crate::customer::CustomerError;
use crate::product::ProductError;

/// Errors returned by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No aggregate with this id is stored.
    #[error("{aggregate_type} not found: {id}")]
    NotFound {
        aggregate_type: &'static str,
        id: String,
    },

    /// An aggregate with this id is already stored.
    #[error("{aggregate_type} already exists: {id}")]
    AlreadyExists {
        aggregate_type: &'static str,
        id: String,
    },

    /// A stored record could not be turned back into a valid aggregate.
    #[error("Corrupt {aggregate_type} record {id}: {reason}")]
    Corrupt {
        aggregate_type: &'static str,
        id: String,
        reason: String,
    },
}

/// Errors that can occur while running a use case against the domain.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Customer error: {0}")]
    Customer(#[from] CustomerError),

    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// A handler failed while the aggregate's events were published.
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("Event error: {0}")]
    Event(#[from] EventError),
}
