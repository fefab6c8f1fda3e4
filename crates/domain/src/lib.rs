//! Domain layer of the shop sample.
//!
//! This crate provides:
//! - Customer, Product and Order aggregates with their invariants
//! - Typed domain event payloads and the handlers reacting to them
//! - Factories for building aggregates with generated ids
//! - The repository contract used by the infrastructure layer

pub mod aggregate;
pub mod checkout;
pub mod customer;
pub mod error;
pub mod product;
pub mod repository;
pub mod value_objects;

pub use aggregate::{AggregateRoot, publish};
pub use checkout::{
    Order, OrderCreated, OrderError, OrderFactory, OrderItem, OrderItemProps, OrderProps,
    OrderService,
};
pub use customer::{
    Address, Customer, CustomerAddressChanged, CustomerCreated, CustomerError, CustomerFactory,
    LogWhenCustomerAddressIsChanged, LogWhenCustomerIsCreated,
};
pub use error::{DomainError, RepositoryError};
pub use product::{
    Product, ProductCreated, ProductError, ProductFactory, SendEmailWhenProductIsCreated,
};
pub use repository::Repository;
pub use value_objects::{CustomerId, Money, OrderId, OrderItemId, ProductId};
