//! Customer construction with generated ids.

use super::{Address, Customer, CustomerError};
use crate::value_objects::CustomerId;

pub struct CustomerFactory;

impl CustomerFactory {
    /// Creates a customer with a fresh id and no address.
    pub fn create(name: impl Into<String>) -> Result<Customer, CustomerError> {
        Customer::new(CustomerId::new(), name)
    }

    /// Creates a customer with a fresh id and sets its address.
    ///
    /// The returned customer has both the created and the address-changed
    /// events pending.
    pub fn create_with_address(
        name: impl Into<String>,
        address: Address,
    ) -> Result<Customer, CustomerError> {
        let mut customer = Self::create(name)?;
        customer.change_address(address)?;
        Ok(customer)
    }
}
