//! Aggregate root trait and event publication.

use events::{DispatchError, DomainEvent, EventDispatcher};

/// Trait for aggregate roots that record domain events.
///
/// An aggregate records an event whenever one of its lifecycle transitions
/// happens (creation, address change, ...). Recorded events stay pending until
/// the caller drains them with [`take_events`](AggregateRoot::take_events),
/// usually through [`publish`] once the new state has been saved.
pub trait AggregateRoot {
    /// The type of the aggregate's identifier.
    type Id: Clone + AsRef<str> + std::fmt::Display + Send + Sync;

    /// Returns the aggregate type name.
    fn aggregate_type() -> &'static str;

    /// Returns the aggregate's unique identifier.
    fn id(&self) -> &Self::Id;

    /// Returns the events recorded since the last drain, oldest first.
    fn pending_events(&self) -> &[DomainEvent];

    /// Removes and returns the pending events, oldest first.
    fn take_events(&mut self) -> Vec<DomainEvent>;
}

/// Drains the aggregate's pending events and notifies them in order.
///
/// Stops at the first handler failure. Events are drained before dispatch,
/// so events after the failing one are dropped rather than re-sent later.
/// Returns the number of events published.
#[tracing::instrument(skip_all, fields(aggregate_type = A::aggregate_type(), aggregate_id = %aggregate.id()))]
pub fn publish<A: AggregateRoot>(
    aggregate: &mut A,
    dispatcher: &EventDispatcher,
) -> Result<usize, DispatchError> {
    let events = aggregate.take_events();
    for event in &events {
        dispatcher.notify(event)?;
    }
    Ok(events.len())
}
