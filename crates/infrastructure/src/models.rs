//! Row models and their mapping to aggregates.

use domain::{
    Address, AggregateRoot, Customer, Money, Order, OrderItem, Product, RepositoryError,
};
use serde::{Deserialize, Serialize};

/// A stored representation of an aggregate.
pub trait Model: Clone + Send + Sync + 'static {
    /// The aggregate this model stores.
    type Aggregate: AggregateRoot + Send + Sync + 'static;

    /// Returns the primary key.
    fn id(&self) -> &str;

    /// Maps an aggregate to its row representation.
    fn from_aggregate(aggregate: &Self::Aggregate) -> Self;

    /// Rebuilds the aggregate, failing if the row breaks its invariants.
    fn into_aggregate(self) -> Result<Self::Aggregate, RepositoryError>;
}

fn corrupt<A: AggregateRoot>(id: &str, reason: impl ToString) -> RepositoryError {
    RepositoryError::Corrupt {
        aggregate_type: A::aggregate_type(),
        id: id.to_string(),
        reason: reason.to_string(),
    }
}

/// Customer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerModel {
    pub id: String,
    pub name: String,
    pub street: Option<String>,
    pub number: Option<u32>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
    pub active: bool,
    pub reward_points: u64,
}

impl Model for CustomerModel {
    type Aggregate = Customer;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_aggregate(customer: &Customer) -> Self {
        let address = customer.address();
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            street: address.map(|a| a.street().to_string()),
            number: address.map(Address::number),
            zipcode: address.map(|a| a.zip().to_string()),
            city: address.map(|a| a.city().to_string()),
            active: customer.is_active(),
            reward_points: customer.reward_points(),
        }
    }

    fn into_aggregate(self) -> Result<Customer, RepositoryError> {
        let address = match (self.street, self.number, self.zipcode, self.city) {
            (Some(street), Some(number), Some(zip), Some(city)) => Some(
                Address::new(street, number, zip, city)
                    .map_err(|e| corrupt::<Customer>(&self.id, e))?,
            ),
            (None, None, None, None) => None,
            _ => return Err(corrupt::<Customer>(&self.id, "partial address")),
        };

        Customer::restore(
            self.id.as_str().into(),
            self.name,
            address,
            self.active,
            self.reward_points,
        )
        .map_err(|e| corrupt::<Customer>(&self.id, e))
    }
}

/// Product row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductModel {
    pub id: String,
    pub name: String,
    pub price: Money,
}

impl Model for ProductModel {
    type Aggregate = Product;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_aggregate(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }

    fn into_aggregate(self) -> Result<Product, RepositoryError> {
        Product::restore(self.id.as_str().into(), self.name, self.price)
            .map_err(|e| corrupt::<Product>(&self.id, e))
    }
}

/// Order item row, keyed by its order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemModel {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
}

/// Order row with its item rows and the total computed at save time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderModel {
    pub id: String,
    pub customer_id: String,
    pub total: Money,
    pub items: Vec<OrderItemModel>,
}

impl Model for OrderModel {
    type Aggregate = Order;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_aggregate(order: &Order) -> Self {
        let order_id = order.id().to_string();
        Self {
            items: order
                .items()
                .iter()
                .map(|item| OrderItemModel {
                    id: item.id().to_string(),
                    order_id: order_id.clone(),
                    product_id: item.product_id().to_string(),
                    name: item.name().to_string(),
                    price: item.price(),
                    quantity: item.quantity(),
                })
                .collect(),
            id: order_id,
            customer_id: order.customer_id().to_string(),
            total: order.total(),
        }
    }

    fn into_aggregate(self) -> Result<Order, RepositoryError> {
        let id = self.id;
        let items = self
            .items
            .into_iter()
            .map(|row| OrderItem::new(row.id, row.name, row.price, row.product_id, row.quantity))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| corrupt::<Order>(&id, e))?;

        let order = Order::restore(id.as_str().into(), self.customer_id.into(), items)
            .map_err(|e| corrupt::<Order>(&id, e))?;

        if order.total() != self.total {
            return Err(corrupt::<Order>(
                &id,
                format!("stored total {} != item total {}", self.total, order.total()),
            ));
        }

        Ok(order)
    }
}
