//! Customer aggregate and related types.

mod address;
mod aggregate;
mod events;
mod factory;
mod handlers;

pub use address::Address;
pub use aggregate::Customer;
pub use events::{CustomerAddressChanged, CustomerCreated};
pub use factory::CustomerFactory;
pub use handlers::{LogWhenCustomerAddressIsChanged, LogWhenCustomerIsCreated};

use ::events::EventError;
use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Error)]
pub enum CustomerError {
    /// Customer ID is required.
    #[error("Customer ID is required")]
    IdRequired,

    /// Customer name is required.
    #[error("Customer name is required")]
    NameRequired,

    /// An address field is missing or zero.
    #[error("Address {field} is required")]
    AddressFieldRequired { field: &'static str },

    /// Only customers with an address can be activated.
    #[error("Address is mandatory to activate a customer")]
    AddressRequiredToActivate,

    /// The event describing the change could not be recorded.
    #[error("Event error: {0}")]
    Event(#[from] EventError),
}
