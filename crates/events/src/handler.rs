use crate::DomainEvent;

/// Error returned by a handler. Any error type converts into it with `?`.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Result of a single handler invocation.
pub type HandlerResult = std::result::Result<(), HandlerError>;

/// A side effect run when an event is dispatched.
///
/// Handlers run synchronously on the caller's thread, in registration order.
/// A failing handler stops the dispatch of that event to later handlers.
pub trait EventHandler: Send + Sync {
    /// Human-readable handler name, used in logs and dispatch errors.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Handles one event.
    fn handle(&self, event: &DomainEvent) -> HandlerResult;
}
