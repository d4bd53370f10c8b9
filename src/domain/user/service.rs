//! User domain service

use std::sync::Arc;

use super::entity::User;
use super::repository::UserRepository;
use crate::domain::DomainError;

/// Domain rules about users that do not belong to a single aggregate
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Check whether another user already uses this user's name
    pub async fn exists(&self, user: &User) -> Result<bool, DomainError> {
        let duplicated = self.repository.find_by_name(user.name()).await?;
        Ok(duplicated.is_some_and(|other| other.id() != user.id()))
    }
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{MockUserRepository, UserId, UserName};

    fn user(id: &str, name: &str) -> User {
        User::new(UserId::new(id).unwrap(), UserName::new(name).unwrap())
    }

    #[tokio::test]
    async fn test_exists_when_name_taken_by_other_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_name()
            .returning(|_| Ok(Some(user("1", "alice"))));

        let service = UserService::new(Arc::new(repo));
        assert!(service.exists(&user("2", "alice")).await.unwrap());
    }

    #[tokio::test]
    async fn test_not_exists_when_name_free() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_name().returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repo));
        assert!(!service.exists(&user("2", "alice")).await.unwrap());
    }

    #[tokio::test]
    async fn test_own_name_is_not_a_duplicate() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_name()
            .returning(|_| Ok(Some(user("1", "alice"))));

        let service = UserService::new(Arc::new(repo));
        assert!(!service.exists(&user("1", "alice")).await.unwrap());
    }

    #[tokio::test]
    async fn test_storage_error_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_name()
            .returning(|_| Err(DomainError::storage("unavailable")));

        let service = UserService::new(Arc::new(repo));
        assert!(service.exists(&user("1", "alice")).await.is_err());
    }
}
