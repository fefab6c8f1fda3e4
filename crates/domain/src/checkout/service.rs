//! Order domain service.

use super::{Order, OrderError, OrderItem};
use crate::aggregate::AggregateRoot;
use crate::customer::Customer;
use crate::value_objects::{Money, OrderId};

/// Operations spanning several orders or an order and its customer.
pub struct OrderService;

impl OrderService {
    /// Sums the totals of the given orders, clamping at the largest `Money`.
    pub fn total(orders: &[Order]) -> Money {
        orders.iter().map(Order::total).sum()
    }

    /// Places a new order for the customer and credits reward points.
    ///
    /// The customer earns half the order total, in whole currency units.
    #[tracing::instrument(skip_all, fields(customer_id = %customer.id()))]
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> Result<Order, OrderError> {
        let order = Order::new(OrderId::new(), customer.id().clone(), items)?;

        let points = Self::reward_points_for(order.total());
        customer.add_reward_points(points);

        metrics::counter!("orders_placed_total").increment(1);
        tracing::info!(order_id = %order.id(), total = %order.total(), points, "order placed");

        Ok(order)
    }

    /// Reward points earned for an order total. Negative totals earn nothing.
    pub fn reward_points_for(total: Money) -> u64 {
        u64::try_from(total.cents() / 200).unwrap_or(0)
    }
}
