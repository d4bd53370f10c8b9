//! In-memory storage implementation

use std::fmt::Debug;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::storage::{Storage, StorageEntity, StorageKey};

/// Thread-safe in-memory storage implementation
///
/// Entities are kept in insertion order. Data is lost when the process
/// terminates.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    entities: RwLock<Vec<E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }

    /// Creates storage pre-populated with entities, in the given order.
    /// A later entity replaces an earlier one with the same key.
    pub fn with_entities(entities: Vec<E>) -> Self {
        let mut stored: Vec<E> = Vec::with_capacity(entities.len());

        for entity in entities {
            match position(&stored, entity.key()) {
                Some(index) => stored[index] = entity,
                None => stored.push(entity),
            }
        }

        Self {
            entities: RwLock::new(stored),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<E>>, DomainError> {
        self.entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<E>>, DomainError> {
        self.entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))
    }
}

fn position<E: StorageEntity>(entities: &[E], key: &E::Key) -> Option<usize> {
    entities
        .iter()
        .position(|entity| entity.key().as_str() == key.as_str())
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        let entities = self.read()?;
        Ok(position(&entities, key).map(|index| entities[index].clone()))
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        Ok(self.read()?.clone())
    }

    async fn save(&self, entity: E) -> Result<E, DomainError> {
        let mut entities = self.write()?;

        match position(&entities, entity.key()) {
            Some(index) => entities[index] = entity.clone(),
            None => entities.push(entity.clone()),
        }

        Ok(entity)
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        let mut entities = self.write()?;

        match position(&entities, key) {
            Some(index) => {
                entities.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(position(&self.read()?, key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    struct TestId(String);

    impl StorageKey for TestId {
        fn as_str(&self) -> &str {
            &self.0
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestEntity {
        id: TestId,
        name: String,
        value: i32,
    }

    impl StorageEntity for TestEntity {
        type Key = TestId;

        fn key(&self) -> &Self::Key {
            &self.id
        }
    }

    fn entity(id: &str, name: &str, value: i32) -> TestEntity {
        TestEntity {
            id: TestId(id.to_string()),
            name: name.to_string(),
            value,
        }
    }

    fn key(id: &str) -> TestId {
        TestId(id.to_string())
    }

    fn names(list: &[TestEntity]) -> Vec<&str> {
        list.iter().map(|e| e.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();
        let e = entity("1", "Test", 42);

        storage.save(e.clone()).await.unwrap();

        assert_eq!(storage.get(&key("1")).await.unwrap(), Some(e));
        assert!(storage.exists(&key("1")).await.unwrap());
        assert_eq!(storage.get(&key("2")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_keeps_position() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        storage.save(entity("1", "A", 1)).await.unwrap();
        storage.save(entity("2", "B", 2)).await.unwrap();
        storage.save(entity("3", "C", 3)).await.unwrap();

        storage.save(entity("2", "Updated", 100)).await.unwrap();

        let list = storage.list().await.unwrap();
        assert_eq!(names(&list), vec!["A", "Updated", "C"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        storage.save(entity("1", "Test", 42)).await.unwrap();
        assert!(storage.delete(&key("1")).await.unwrap());
        assert!(!storage.exists(&key("1")).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        assert!(!storage.delete(&key("1")).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        storage.save(entity("3", "C", 3)).await.unwrap();
        storage.save(entity("1", "A", 1)).await.unwrap();
        storage.save(entity("2", "B", 2)).await.unwrap();

        let list = storage.list().await.unwrap();
        assert_eq!(names(&list), vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_with_entities() {
        let entities = vec![entity("1", "A", 1), entity("2", "B", 2), entity("1", "A2", 3)];
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::with_entities(entities);

        let list = storage.list().await.unwrap();
        assert_eq!(names(&list), vec!["A2", "B"]);
    }
}
