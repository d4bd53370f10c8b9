//! Storage-backed user repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::storage::Storage;
use crate::domain::user::{User, UserId, UserName, UserRepository};

/// Storage-backed implementation of UserRepository
#[derive(Debug)]
pub struct StorageUserRepository {
    storage: Arc<dyn Storage<User>>,
}

impl StorageUserRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<User>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl UserRepository for StorageUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        self.storage.save(user.clone()).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.storage.get(id).await
    }

    async fn find_by_name(&self, name: &UserName) -> Result<Option<User>, DomainError> {
        let users = self.storage.list().await?;
        Ok(users.into_iter().find(|user| user.name() == name))
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        self.storage.list().await
    }

    async fn exists(&self, user: &User) -> Result<bool, DomainError> {
        self.storage.exists(user.id()).await
    }

    async fn delete(&self, user: &User) -> Result<(), DomainError> {
        if !self.storage.delete(user.id()).await? {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                user.id()
            )));
        }

        Ok(())
    }
}
