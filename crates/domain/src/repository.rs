//! Repository contract for aggregate persistence.

use async_trait::async_trait;

use crate::aggregate::AggregateRoot;
use crate::error::RepositoryError;

/// Persists and reconstructs aggregates.
///
/// Implementations must round-trip the observable state of an aggregate
/// (id, references, items, computed totals). Reconstructed aggregates carry
/// no pending events.
#[async_trait]
pub trait Repository<A>: Send + Sync
where
    A: AggregateRoot + Send + Sync + 'static,
{
    /// Stores a new aggregate. Fails if its id is already stored.
    async fn create(&self, entity: &A) -> Result<(), RepositoryError>;

    /// Replaces the stored state of an existing aggregate.
    async fn update(&self, entity: &A) -> Result<(), RepositoryError>;

    /// Loads an aggregate by id, failing with `NotFound` if it is absent.
    async fn find(&self, id: &A::Id) -> Result<A, RepositoryError>;

    /// Loads every stored aggregate, in creation order.
    async fn find_all(&self) -> Result<Vec<A>, RepositoryError>;
}
