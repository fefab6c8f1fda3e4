use std::sync::Arc;

use async_trait::async_trait;
use domain::{AggregateRoot, Repository, RepositoryError};
use tokio::sync::RwLock;

use crate::models::{CustomerModel, Model, OrderModel, ProductModel};

/// In-memory repository storing row models.
///
/// Rows are kept in creation order. Clones share the same storage.
#[derive(Clone)]
pub struct InMemoryRepository<M: Model> {
    rows: Arc<RwLock<Vec<M>>>,
}

pub type InMemoryCustomerRepository = InMemoryRepository<CustomerModel>;
pub type InMemoryProductRepository = InMemoryRepository<ProductModel>;
pub type InMemoryOrderRepository = InMemoryRepository<OrderModel>;

impl<M: Model> Default for InMemoryRepository<M> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<M: Model> InMemoryRepository<M> {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored rows.
    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Returns a copy of the stored rows.
    pub async fn records(&self) -> Vec<M> {
        self.rows.read().await.clone()
    }

    /// Returns the stored row with the given id.
    pub async fn record(&self, id: &str) -> Option<M> {
        self.rows
            .read()
            .await
            .iter()
            .find(|row| row.id() == id)
            .cloned()
    }

    /// Removes every row.
    pub async fn clear(&self) {
        self.rows.write().await.clear();
    }

    fn not_found(id: &str) -> RepositoryError {
        RepositoryError::NotFound {
            aggregate_type: <M::Aggregate as AggregateRoot>::aggregate_type(),
            id: id.to_string(),
        }
    }
}

#[async_trait]
impl<M: Model> Repository<M::Aggregate> for InMemoryRepository<M> {
    #[tracing::instrument(skip_all, fields(aggregate_type = <M::Aggregate as AggregateRoot>::aggregate_type(), id = %entity.id()))]
    async fn create(&self, entity: &M::Aggregate) -> Result<(), RepositoryError> {
        let row = M::from_aggregate(entity);
        let mut rows = self.rows.write().await;

        if rows.iter().any(|existing| existing.id() == row.id()) {
            return Err(RepositoryError::AlreadyExists {
                aggregate_type: <M::Aggregate as AggregateRoot>::aggregate_type(),
                id: row.id().to_string(),
            });
        }

        rows.push(row);
        tracing::debug!("row created");
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(aggregate_type = <M::Aggregate as AggregateRoot>::aggregate_type(), id = %entity.id()))]
    async fn update(&self, entity: &M::Aggregate) -> Result<(), RepositoryError> {
        let row = M::from_aggregate(entity);
        let mut rows = self.rows.write().await;

        let slot = rows
            .iter_mut()
            .find(|existing| existing.id() == row.id())
            .ok_or_else(|| Self::not_found(row.id()))?;
        *slot = row;

        tracing::debug!("row updated");
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(aggregate_type = <M::Aggregate as AggregateRoot>::aggregate_type(), id = %id))]
    async fn find(
        &self,
        id: &<M::Aggregate as AggregateRoot>::Id,
    ) -> Result<M::Aggregate, RepositoryError> {
        let key = id.as_ref();
        let row = self
            .record(key)
            .await
            .ok_or_else(|| Self::not_found(key))?;
        row.into_aggregate()
    }

    #[tracing::instrument(skip_all, fields(aggregate_type = <M::Aggregate as AggregateRoot>::aggregate_type()))]
    async fn find_all(&self) -> Result<Vec<M::Aggregate>, RepositoryError> {
        self.records()
            .await
            .into_iter()
            .map(Model::into_aggregate)
            .collect()
    }
}
