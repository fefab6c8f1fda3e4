//! Order construction from plain properties.

use super::{Order, OrderError, OrderItem};
use crate::value_objects::{CustomerId, Money, OrderId, OrderItemId, ProductId};

/// Properties of one line item.
#[derive(Debug, Clone)]
pub struct OrderItemProps {
    pub id: OrderItemId,
    pub name: String,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: Money,
}

/// Properties of an order and its items.
#[derive(Debug, Clone)]
pub struct OrderProps {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub items: Vec<OrderItemProps>,
}

pub struct OrderFactory;

impl OrderFactory {
    /// Builds an order, validating every item and the order itself.
    pub fn create(props: OrderProps) -> Result<Order, OrderError> {
        let items = props
            .items
            .into_iter()
            .map(|item| {
                OrderItem::new(item.id, item.name, item.price, item.product_id, item.quantity)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Order::new(props.id, props.customer_id, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::AggregateRoot;

    fn props(items: Vec<OrderItemProps>) -> OrderProps {
        OrderProps {
            id: OrderId::new(),
            customer_id: CustomerId::new(),
            items,
        }
    }

    fn item_props(quantity: u32) -> OrderItemProps {
        OrderItemProps {
            id: OrderItemId::new(),
            name: "Product 1".to_string(),
            product_id: ProductId::new(),
            quantity,
            price: Money::from_cents(10000),
        }
    }

    #[test]
    fn test_create_order() {
        let props = props(vec![item_props(1)]);
        let expected_id = props.id.clone();
        let expected_customer = props.customer_id.clone();

        let order = OrderFactory::create(props).unwrap();

        assert_eq!(order.id(), &expected_id);
        assert_eq!(order.customer_id(), &expected_customer);
        assert_eq!(order.item_count(), 1);
        assert_eq!(order.items()[0].name(), "Product 1");
        assert_eq!(order.total(), Money::from_cents(10000));
    }

    #[test]
    fn test_invalid_item_rejected() {
        let result = OrderFactory::create(props(vec![item_props(1), item_props(0)]));
        assert!(matches!(result, Err(OrderError::InvalidQuantity { .. })));
    }

    #[test]
    fn test_no_items_rejected() {
        let result = OrderFactory::create(props(vec![]));
        assert!(matches!(result, Err(OrderError::NoItems)));
    }
}
