//! Repository implementations.
//!
//! Aggregates are stored as row models (the shape a relational store would
//! use) and rebuilt through each aggregate's `restore` constructor on read.

pub mod memory;
pub mod models;

pub use memory::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
    InMemoryRepository,
};
pub use models::{CustomerModel, Model, OrderItemModel, OrderModel, ProductModel};
