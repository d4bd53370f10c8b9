//! Circle repository and factory ports

use async_trait::async_trait;

use super::entity::{Circle, CircleId, CircleName};
use crate::domain::DomainError;
use crate::domain::user::User;

#[cfg(test)]
use mockall::automock;

/// Repository trait for circle storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CircleRepository: Send + Sync {
    /// Insert the circle, or replace the stored circle with the same id
    async fn save(&self, circle: &Circle) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &CircleId) -> Result<Option<Circle>, DomainError>;

    async fn find_by_name(&self, name: &CircleName) -> Result<Option<Circle>, DomainError>;

    /// All circles in storage order
    async fn find_all(&self) -> Result<Vec<Circle>, DomainError>;
}

/// Factory creating new circles with a freshly assigned id
#[async_trait]
pub trait CircleFactory: Send + Sync {
    async fn create(&self, name: CircleName, owner: &User) -> Result<Circle, DomainError>;
}
