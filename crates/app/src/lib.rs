//! Application wiring for the shop sample.
//!
//! Builds the event dispatcher, registers the configured handlers and exposes
//! the use cases. Each use case saves the aggregate first, then publishes the
//! events it recorded.

pub mod config;

use std::sync::Arc;

use domain::{
    Address, Customer, CustomerAddressChanged, CustomerCreated, CustomerFactory, CustomerId,
    DomainError, LogWhenCustomerAddressIsChanged, LogWhenCustomerIsCreated, Money, Order,
    OrderId, OrderItem, OrderItemId, OrderService, Product, ProductCreated, ProductFactory,
    ProductId, Repository, SendEmailWhenProductIsCreated, publish,
};
use events::{EventDispatcher, EventPayload};
use infrastructure::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

pub use config::{Config, LogFormat};

/// Installs the global tracing subscriber described by `config`.
pub fn init_tracing(config: &Config) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    }
}

/// Registers the side-effect handlers enabled by `config`.
pub fn register_handlers(dispatcher: &mut EventDispatcher, config: &Config) {
    if config.customer_log_handlers {
        dispatcher.register(
            CustomerCreated::EVENT_NAME,
            Arc::new(LogWhenCustomerIsCreated::first()),
        );
        dispatcher.register(
            CustomerCreated::EVENT_NAME,
            Arc::new(LogWhenCustomerIsCreated::second()),
        );
        dispatcher.register(
            CustomerAddressChanged::EVENT_NAME,
            Arc::new(LogWhenCustomerAddressIsChanged),
        );
    }

    dispatcher.register(
        ProductCreated::EVENT_NAME,
        Arc::new(SendEmailWhenProductIsCreated::new(
            config.notification_sender.clone(),
        )),
    );
}

/// The shop application: dispatcher plus repositories.
pub struct Application {
    dispatcher: EventDispatcher,
    customers: Arc<dyn Repository<Customer>>,
    products: Arc<dyn Repository<Product>>,
    orders: Arc<dyn Repository<Order>>,
}

impl Application {
    /// Creates an application from explicitly supplied collaborators.
    pub fn new(
        dispatcher: EventDispatcher,
        customers: Arc<dyn Repository<Customer>>,
        products: Arc<dyn Repository<Product>>,
        orders: Arc<dyn Repository<Order>>,
    ) -> Self {
        Self {
            dispatcher,
            customers,
            products,
            orders,
        }
    }

    /// Creates an application over in-memory repositories with the handlers
    /// enabled by `config`.
    pub fn in_memory(config: &Config) -> Self {
        let mut dispatcher = EventDispatcher::new();
        register_handlers(&mut dispatcher, config);
        Self::new(
            dispatcher,
            Arc::new(InMemoryCustomerRepository::new()),
            Arc::new(InMemoryProductRepository::new()),
            Arc::new(InMemoryOrderRepository::new()),
        )
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    /// Gives access to the registry, e.g. to subscribe extra handlers.
    pub fn dispatcher_mut(&mut self) -> &mut EventDispatcher {
        &mut self.dispatcher
    }

    pub fn customers(&self) -> &dyn Repository<Customer> {
        self.customers.as_ref()
    }

    pub fn products(&self) -> &dyn Repository<Product> {
        self.products.as_ref()
    }

    pub fn orders(&self) -> &dyn Repository<Order> {
        self.orders.as_ref()
    }
}

// Use cases
impl Application {
    /// Creates and stores a customer, optionally with an address.
    #[tracing::instrument(skip(self, address))]
    pub async fn register_customer(
        &self,
        name: &str,
        address: Option<Address>,
    ) -> Result<Customer, DomainError> {
        let mut customer = match address {
            Some(address) => CustomerFactory::create_with_address(name, address)?,
            None => CustomerFactory::create(name)?,
        };
        self.customers.create(&customer).await?;
        publish(&mut customer, &self.dispatcher)?;
        Ok(customer)
    }

    /// Replaces a stored customer's address.
    #[tracing::instrument(skip(self, address))]
    pub async fn change_customer_address(
        &self,
        customer_id: &CustomerId,
        address: Address,
    ) -> Result<Customer, DomainError> {
        let mut customer = self.customers.find(customer_id).await?;
        customer.change_address(address)?;
        self.customers.update(&customer).await?;
        publish(&mut customer, &self.dispatcher)?;
        Ok(customer)
    }

    /// Creates and stores a product.
    #[tracing::instrument(skip(self))]
    pub async fn create_product(&self, name: &str, price: Money) -> Result<Product, DomainError> {
        let mut product = ProductFactory::create(name, price)?;
        self.products.create(&product).await?;
        publish(&mut product, &self.dispatcher)?;
        Ok(product)
    }

    /// Places an order for `(product, quantity)` lines and credits the
    /// customer's reward points.
    #[tracing::instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn place_order(
        &self,
        customer_id: &CustomerId,
        lines: &[(ProductId, u32)],
    ) -> Result<Order, DomainError> {
        let mut customer = self.customers.find(customer_id).await?;

        let mut items = Vec::with_capacity(lines.len());
        for (product_id, quantity) in lines {
            items.push(self.order_item(product_id, *quantity).await?);
        }

        let mut order = OrderService::place_order(&mut customer, items)?;
        self.orders.create(&order).await?;
        self.customers.update(&customer).await?;
        publish(&mut order, &self.dispatcher)?;
        Ok(order)
    }

    /// Adds a line for `product_id` to a stored order.
    #[tracing::instrument(skip(self))]
    pub async fn add_order_item(
        &self,
        order_id: &OrderId,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Order, DomainError> {
        let mut order = self.orders.find(order_id).await?;
        order.add_item(self.order_item(product_id, quantity).await?)?;
        self.orders.update(&order).await?;
        Ok(order)
    }

    /// Removes a line from a stored order. The last line cannot be removed.
    #[tracing::instrument(skip(self))]
    pub async fn remove_order_item(
        &self,
        order_id: &OrderId,
        item_id: &OrderItemId,
    ) -> Result<Order, DomainError> {
        let mut order = self.orders.find(order_id).await?;
        order.remove_item(item_id)?;
        self.orders.update(&order).await?;
        Ok(order)
    }

    async fn order_item(
        &self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<OrderItem, DomainError> {
        let product = self.products.find(product_id).await?;
        Ok(OrderItem::new(
            OrderItemId::new(),
            product.name(),
            product.price(),
            product_id.clone(),
            quantity,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_handlers_follows_config() {
        let mut dispatcher = EventDispatcher::new();
        register_handlers(&mut dispatcher, &Config::default());

        assert_eq!(
            dispatcher.handlers_for(CustomerCreated::EVENT_NAME).map(<[_]>::len),
            Some(2)
        );
        assert_eq!(
            dispatcher.handlers_for(CustomerAddressChanged::EVENT_NAME).map(<[_]>::len),
            Some(1)
        );
        assert_eq!(
            dispatcher.handlers_for(ProductCreated::EVENT_NAME).map(<[_]>::len),
            Some(1)
        );
    }

    #[test]
    fn test_customer_handlers_can_be_disabled() {
        let config = Config {
            customer_log_handlers: false,
            ..Config::default()
        };
        let mut dispatcher = EventDispatcher::new();
        register_handlers(&mut dispatcher, &config);

        assert!(dispatcher.handlers_for(CustomerCreated::EVENT_NAME).is_none());
        assert!(dispatcher.handlers_for(ProductCreated::EVENT_NAME).is_some());
    }

    #[test]
    fn test_handler_order_matches_registration() {
        let mut dispatcher = EventDispatcher::new();
        register_handlers(&mut dispatcher, &Config::default());

        let names: Vec<&str> = dispatcher
            .handlers_for(CustomerCreated::EVENT_NAME)
            .unwrap()
            .iter()
            .map(|h| h.name())
            .collect();
        assert_eq!(
            names,
            vec!["LogWhenCustomerIsCreated1", "LogWhenCustomerIsCreated2"]
        );
    }
}
