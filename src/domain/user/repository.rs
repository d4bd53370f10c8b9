//! User repository and factory ports

use async_trait::async_trait;

use super::entity::{User, UserId, UserName};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository trait for user storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user, or replace the stored user with the same id
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by id
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find the first user with the given name
    async fn find_by_name(&self, name: &UserName) -> Result<Option<User>, DomainError>;

    /// All users in storage order
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Check whether a user with the same id is stored
    async fn exists(&self, user: &User) -> Result<bool, DomainError>;

    /// Delete the user with the same id; NotFound when it is not stored
    async fn delete(&self, user: &User) -> Result<(), DomainError>;
}

/// Factory creating new users with a freshly assigned id
#[async_trait]
pub trait UserFactory: Send + Sync {
    async fn create(&self, name: UserName) -> Result<User, DomainError>;
}
