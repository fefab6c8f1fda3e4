use thiserror::Error;

use crate::handler::HandlerError;

/// Errors raised while building or decoding a [`DomainEvent`](crate::DomainEvent).
#[derive(Debug, Error)]
pub enum EventError {
    /// The payload could not be converted to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The event was decoded as a payload belonging to another event kind.
    #[error("Event name mismatch: expected {expected}, found {actual}")]
    NameMismatch {
        expected: &'static str,
        actual: String,
    },
}

/// Errors surfaced by [`EventDispatcher::notify`](crate::EventDispatcher::notify).
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A handler failed; handlers registered after it were not invoked.
    #[error("Handler {handler} (position {position}) failed on {event_name}: {source}")]
    HandlerFailed {
        event_name: String,
        handler: String,
        position: usize,
        #[source]
        source: HandlerError,
    },
}

/// Result type for event construction and decoding.
pub type Result<T> = std::result::Result<T, EventError>;
