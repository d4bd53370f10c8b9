//! Sequential user factory

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::DomainError;
use crate::domain::storage::Storage;
use crate::domain::user::{User, UserFactory, UserId, UserName};

/// Assigns numeric ids one past the largest id found in storage
#[derive(Debug)]
pub struct SequentialUserFactory {
    storage: Arc<dyn Storage<User>>,
}

impl SequentialUserFactory {
    pub fn new(storage: Arc<dyn Storage<User>>) -> Self {
        Self { storage }
    }

    /// Next id for the users currently in storage
    pub async fn assign_id(&self) -> Result<String, DomainError> {
        let users = self.storage.list().await?;
        Ok(next_user_id(users.iter().map(|user| user.id().as_str())))
    }
}

/// Scans `ids` in order and returns the largest numeric id plus one.
///
/// The scan stops at the first id that is not an integer; ids after it are
/// not considered. At `i64::MAX` the result saturates and repeats a stored
/// id, which registration then rejects as a conflict.
fn next_user_id<'a>(ids: impl IntoIterator<Item = &'a str>) -> String {
    let mut max: i64 = 0;

    for id in ids {
        let Ok(value) = id.parse::<i64>() else {
            debug!(id = %id, "Non-numeric user id, stopping id scan");
            break;
        };

        max = max.max(value);
    }

    max.saturating_add(1).to_string()
}

#[async_trait]
impl UserFactory for SequentialUserFactory {
    async fn create(&self, name: UserName) -> Result<User, DomainError> {
        let id = self.assign_id().await?;
        let id = UserId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        Ok(User::new(id, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserType;
    use crate::infrastructure::storage::InMemoryStorage;

    fn user(id: &str, name: &str) -> User {
        User::new(UserId::new(id).unwrap(), UserName::new(name).unwrap())
    }

    fn factory_with(users: Vec<User>) -> SequentialUserFactory {
        SequentialUserFactory::new(Arc::new(InMemoryStorage::with_entities(users)))
    }

    #[tokio::test]
    async fn test_create() {
        let factory = factory_with(vec![user("1", "test_user1"), user("2", "test_user2")]);

        let created = factory
            .create(UserName::new("test_user3").unwrap())
            .await
            .unwrap();

        assert_eq!(created, user("3", "test_user3"));
        assert_eq!(created.user_type(), UserType::Normal);
    }

    #[tokio::test]
    async fn test_assign_id_contiguous() {
        let factory = factory_with(vec![user("1", "test_user1"), user("2", "test_user2")]);
        assert_eq!(factory.assign_id().await.unwrap(), "3");
    }

    #[tokio::test]
    async fn test_assign_id_empty_storage() {
        let factory = factory_with(Vec::new());
        assert_eq!(factory.assign_id().await.unwrap(), "1");
    }

    #[tokio::test]
    async fn test_assign_id_not_contiguous() {
        let factory = factory_with(vec![user("1", "test_user1"), user("4", "test_user2")]);
        assert_eq!(factory.assign_id().await.unwrap(), "5");
    }

    #[tokio::test]
    async fn test_assign_id_unordered() {
        let factory = factory_with(vec![user("7", "test_user1"), user("3", "test_user2")]);
        assert_eq!(factory.assign_id().await.unwrap(), "8");
    }

    #[test]
    fn test_next_id_saturates_at_max() {
        let max = i64::MAX.to_string();
        assert_eq!(next_user_id([max.as_str()]), max);
    }

    #[test]
    fn test_scan_stops_at_non_numeric_id() {
        assert_eq!(next_user_id(["1", "abc", "7"]), "2");
        assert_eq!(next_user_id(["abc", "7"]), "1");
    }
}
