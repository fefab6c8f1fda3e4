//! Product construction with generated ids.

use super::{Product, ProductError};
use crate::value_objects::{Money, ProductId};

pub struct ProductFactory;

impl ProductFactory {
    /// Creates a product with a fresh id.
    pub fn create(name: impl Into<String>, price: Money) -> Result<Product, ProductError> {
        Product::new(ProductId::new(), name, price)
    }
}
