//! Circle factory assigning random ids

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::circle::{Circle, CircleFactory, CircleId, CircleName};
use crate::domain::user::User;

/// Creates circles with a UUID v4 id and the current time as creation date
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidCircleFactory;

impl UuidCircleFactory {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CircleFactory for UuidCircleFactory {
    async fn create(&self, name: CircleName, owner: &User) -> Result<Circle, DomainError> {
        let id = CircleId::new(Uuid::new_v4().to_string())
            .map_err(|e| DomainError::invalid_id(e.to_string()))?;

        Ok(Circle::new(id, name, owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{UserId, UserName};

    #[tokio::test]
    async fn test_create() {
        let owner = User::new(UserId::new("1").unwrap(), UserName::new("user1").unwrap());
        let factory = UuidCircleFactory::new();

        let first = factory
            .create(CircleName::new("book club").unwrap(), &owner)
            .await
            .unwrap();
        let second = factory
            .create(CircleName::new("book club").unwrap(), &owner)
            .await
            .unwrap();

        assert_eq!(first.owner(), owner.id());
        assert_eq!(first.name().as_str(), "book club");
        assert_eq!(first.count_members(), 1);
        assert!(Uuid::parse_str(first.id().as_str()).is_ok());
        assert_ne!(first.id(), second.id());
    }
}
