//! Storage-backed circle repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::circle::{Circle, CircleId, CircleName, CircleRepository};
use crate::domain::storage::Storage;

/// Storage-backed implementation of CircleRepository
#[derive(Debug)]
pub struct StorageCircleRepository {
    storage: Arc<dyn Storage<Circle>>,
}

impl StorageCircleRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<Circle>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl CircleRepository for StorageCircleRepository {
    async fn save(&self, circle: &Circle) -> Result<(), DomainError> {
        self.storage.save(circle.clone()).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &CircleId) -> Result<Option<Circle>, DomainError> {
        self.storage.get(id).await
    }

    async fn find_by_name(&self, name: &CircleName) -> Result<Option<Circle>, DomainError> {
        let circles = self.storage.list().await?;
        Ok(circles.into_iter().find(|circle| circle.name() == name))
    }

    async fn find_all(&self) -> Result<Vec<Circle>, DomainError> {
        self.storage.list().await
    }
}
