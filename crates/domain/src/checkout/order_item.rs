//! Order line item.

use super::OrderError;
use crate::value_objects::{Money, OrderItemId, ProductId};

/// A line of an order. Immutable: a changed line is removed and re-added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    id: OrderItemId,
    name: String,
    price: Money,
    product_id: ProductId,
    quantity: u32,
}

impl OrderItem {
    /// Creates a line item.
    ///
    /// The unit price must not be negative, the quantity must be positive and
    /// `price * quantity` must fit in a `Money`.
    pub fn new(
        id: impl Into<OrderItemId>,
        name: impl Into<String>,
        price: Money,
        product_id: impl Into<ProductId>,
        quantity: u32,
    ) -> Result<Self, OrderError> {
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity { quantity });
        }
        if price.is_negative() {
            return Err(OrderError::InvalidPrice {
                price: price.cents(),
            });
        }
        if price.checked_multiply(quantity).is_none() {
            return Err(OrderError::LineTotalOverflow {
                price: price.cents(),
                quantity,
            });
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        })
    }

    pub fn id(&self) -> &OrderItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the total price for this line (unit price * quantity).
    ///
    /// Exact: `new` rejects lines whose total does not fit.
    pub fn line_total(&self) -> Money {
        self.price.saturating_multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = OrderItem::new("248", "Order Item 2", Money::from_cents(8999), "24", 2).unwrap();
        assert_eq!(item.line_total(), Money::from_cents(17998));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let result = OrderItem::new("1", "Widget", Money::from_cents(100), "p1", 0);
        assert!(matches!(
            result,
            Err(OrderError::InvalidQuantity { quantity: 0 })
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = OrderItem::new("1", "Widget", Money::from_cents(-100), "p1", 1);
        assert!(matches!(result, Err(OrderError::InvalidPrice { price: -100 })));
    }

    #[test]
    fn test_zero_price_allowed() {
        let item = OrderItem::new("1", "Gift", Money::zero(), "p1", 3).unwrap();
        assert_eq!(item.line_total(), Money::zero());
    }

    #[test]
    fn test_unrepresentable_line_total_rejected() {
        let result = OrderItem::new("1", "Big", Money::from_cents(i64::MAX / 2), "p1", 3);
        assert!(matches!(
            result,
            Err(OrderError::LineTotalOverflow { quantity: 3, .. })
        ));

        let item = OrderItem::new("2", "Big", Money::from_cents(i64::MAX), "p1", 1).unwrap();
        assert_eq!(item.line_total(), Money::from_cents(i64::MAX));
    }
}
