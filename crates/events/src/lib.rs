//! In-process publish/subscribe for domain events.
//!
//! This crate provides:
//! - [`DomainEvent`], an immutable record of something that happened
//! - [`EventPayload`] for typed payloads with a stable event name
//! - [`EventHandler`], the side-effect capability invoked on dispatch
//! - [`EventDispatcher`], the registry mapping event names to ordered handlers

pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handler;

pub use dispatcher::{EventDispatcher, SharedHandler};
pub use error::{DispatchError, EventError, Result};
pub use event::{DomainEvent, EventPayload};
pub use handler::{EventHandler, HandlerError, HandlerResult};
