//! Circle domain service

use std::sync::Arc;

use super::entity::Circle;
use super::repository::CircleRepository;
use crate::domain::DomainError;

/// Domain rules about circles that do not belong to a single aggregate
#[derive(Clone)]
pub struct CircleService {
    repository: Arc<dyn CircleRepository>,
}

impl CircleService {
    pub fn new(repository: Arc<dyn CircleRepository>) -> Self {
        Self { repository }
    }

    /// Check whether a circle with the same name is already stored
    pub async fn exists(&self, circle: &Circle) -> Result<bool, DomainError> {
        let duplicated = self.repository.find_by_name(circle.name()).await?;
        Ok(duplicated.is_some())
    }
}

impl std::fmt::Debug for CircleService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircleService").finish_non_exhaustive()
    }
}
