//! Storage trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::StorageEntity;

/// Generic storage trait for CRUD operations on any entity type.
///
/// Implementations must keep insertion order: `list` returns entities in the
/// order they were first saved, and saving an existing key keeps its place.
#[async_trait]
pub trait Storage<E>: Send + Sync + Debug
where
    E: StorageEntity + 'static,
{
    /// Retrieves an entity by its key
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    /// Retrieves all entities in insertion order
    async fn list(&self) -> Result<Vec<E>, DomainError>;

    /// Stores an entity, replacing the one with the same key in place
    async fn save(&self, entity: E) -> Result<E, DomainError>;

    /// Deletes an entity by its key, returns true if deleted
    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError>;

    /// Checks if an entity exists by its key
    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError>;
}
