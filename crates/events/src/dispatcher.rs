//! Event dispatcher registry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{DispatchError, DomainEvent, EventHandler};

/// A handler reference shared between its owner and the dispatcher.
///
/// The dispatcher holds a clone of the `Arc`; it never creates or destroys
/// handlers. Identity for [`EventDispatcher::unregister`] is pointer identity.
pub type SharedHandler = Arc<dyn EventHandler>;

/// Maps event names to the ordered list of handlers subscribed to them.
///
/// The dispatcher is an ordinary value: construct it where the application is
/// wired and pass it to whoever publishes events. Registration takes
/// `&mut self`, dispatch takes `&self`, so the borrow checker serializes
/// mutation against dispatch.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<String, Vec<SharedHandler>>,
}

impl EventDispatcher {
    /// Creates an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `handler` to the list for `event_name`.
    ///
    /// Registering the same handler twice keeps both entries; it will then be
    /// invoked twice per dispatch.
    pub fn register(&mut self, event_name: impl Into<String>, handler: SharedHandler) {
        let event_name = event_name.into();
        tracing::debug!(event_name = %event_name, handler = handler.name(), "registering handler");
        self.handlers.entry(event_name).or_default().push(handler);
    }

    /// Removes every entry of `handler` registered under `event_name`.
    ///
    /// Unknown event names and handlers that were never registered are
    /// ignored. The (possibly empty) list for `event_name` stays in place.
    pub fn unregister(&mut self, event_name: &str, handler: &SharedHandler) {
        if let Some(list) = self.handlers.get_mut(event_name) {
            list.retain(|registered| !Arc::ptr_eq(registered, handler));
        }
    }

    /// Removes every registration for every event name.
    pub fn unregister_all(&mut self) {
        self.handlers.clear();
    }

    /// Returns the handlers registered for `event_name`, in registration order.
    ///
    /// `None` means the name has no list at all (never registered, or wiped by
    /// [`unregister_all`](Self::unregister_all)); `Some(&[])` means every
    /// handler was unregistered individually.
    pub fn handlers_for(&self, event_name: &str) -> Option<&[SharedHandler]> {
        self.handlers.get(event_name).map(Vec::as_slice)
    }

    /// Returns a snapshot of the registry.
    ///
    /// The snapshot holds its own clones of the handler references; changing
    /// it does not affect this dispatcher.
    pub fn event_handlers(&self) -> HashMap<String, Vec<SharedHandler>> {
        self.handlers.clone()
    }

    /// Returns true if no event name has a list.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invokes every handler registered for the event's name, in order.
    ///
    /// An event nobody listens to is not an error. The first handler error
    /// aborts the dispatch and is returned; later handlers are not invoked.
    /// Returns the number of handlers invoked.
    #[tracing::instrument(skip(self, event), fields(event_name = %event.event_name()))]
    pub fn notify(&self, event: &DomainEvent) -> Result<usize, DispatchError> {
        let Some(list) = self.handlers.get(event.event_name()) else {
            tracing::trace!("no handlers registered");
            return Ok(0);
        };

        for (position, handler) in list.iter().enumerate() {
            if let Err(source) = handler.handle(event) {
                tracing::warn!(handler = handler.name(), position, error = %source, "handler failed");
                metrics::counter!(
                    "domain_event_handler_failures_total",
                    "event_name" => event.event_name().to_string()
                )
                .increment(1);
                return Err(DispatchError::HandlerFailed {
                    event_name: event.event_name().to_string(),
                    handler: handler.name().to_string(),
                    position,
                    source,
                });
            }
        }

        metrics::counter!(
            "domain_events_dispatched_total",
            "event_name" => event.event_name().to_string()
        )
        .increment(1);
        tracing::debug!(handlers = list.len(), "event dispatched");

        Ok(list.len())
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (name, list) in &self.handlers {
            let names: Vec<&str> = list.iter().map(|h| h.name()).collect();
            map.entry(name, &names);
        }
        map.finish()
    }
}
