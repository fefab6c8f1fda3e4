//! Product aggregate implementation.

use events::DomainEvent;

use super::{ProductCreated, ProductError};
use crate::aggregate::AggregateRoot;
use crate::value_objects::{Money, ProductId};

/// Product aggregate root.
#[derive(Debug, Clone)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    events: Vec<DomainEvent>,
}

impl Product {
    /// Creates a product and records a `ProductCreatedEvent`.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Self, ProductError> {
        let mut product = Self::restore(id.into(), name.into(), price)?;
        let event = DomainEvent::from_payload(&ProductCreated {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
        })?;
        product.events.push(event);
        Ok(product)
    }

    /// Rebuilds a product from stored state without recording events.
    pub fn restore(id: ProductId, name: String, price: Money) -> Result<Self, ProductError> {
        if id.is_blank() {
            return Err(ProductError::IdRequired);
        }
        if name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        if price.is_negative() {
            return Err(ProductError::InvalidPrice {
                price: price.cents(),
            });
        }
        Ok(Self {
            id,
            name,
            price,
            events: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: Money) -> Result<(), ProductError> {
        if price.is_negative() {
            return Err(ProductError::InvalidPrice {
                price: price.cents(),
            });
        }
        self.price = price;
        Ok(())
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn aggregate_type() -> &'static str {
        "Product"
    }

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn pending_events(&self) -> &[DomainEvent] {
        &self.events
    }

    fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.price == other.price
    }
}

impl Eq for Product {}
