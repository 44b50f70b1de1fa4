//! Repository Layer - Core Traits
//!
//! Abstract interfaces for data access.

use async_trait::async_trait;

use crate::domain::{Entity, StoreResult};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Store a new entity, returning it as persisted
    async fn create(&self, entity: &T) -> StoreResult<T>;

    /// List all entities in stored order
    async fn list(&self) -> StoreResult<Vec<T>>;

    /// Replace an existing entity; `StoreError::NotFound` if its id is unknown
    async fn update(&self, entity: &T) -> StoreResult<T>;

    /// Delete entity by ID; `StoreError::NotFound` if it is unknown
    async fn delete(&self, id: &T::Id) -> StoreResult<()>;
}
