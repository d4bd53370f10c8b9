//! Circle Hub
//!
//! User registration, circles with tier-dependent member caps and circle
//! recommendations, served over HTTP.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::circle::{Circle, CircleService};
use domain::user::{User, UserId, UserName, UserRepository, UserService, UserType};
use infrastructure::circle::{
    CircleApplicationService, StorageCircleRepository, UuidCircleFactory,
};
use infrastructure::storage::InMemoryStorage;
use infrastructure::user::{SequentialUserFactory, StorageUserRepository, UserApplicationService};
use tracing::info;

/// Create the application state with every service wired to in-memory storage
pub fn create_app_state(config: &AppConfig) -> AppState {
    let users = if config.storage.seed_demo_data {
        let users = demo_users();
        info!(count = users.len(), "Seeding demo users");
        users
    } else {
        Vec::new()
    };

    let user_storage = Arc::new(InMemoryStorage::<User>::with_entities(users));
    let circle_storage = Arc::new(InMemoryStorage::<Circle>::new());

    let user_repository: Arc<dyn UserRepository> =
        Arc::new(StorageUserRepository::new(user_storage.clone()));
    let circle_repository = Arc::new(StorageCircleRepository::new(circle_storage));

    let user_service = UserApplicationService::new(
        UserService::new(user_repository.clone()),
        Arc::new(SequentialUserFactory::new(user_storage)),
        user_repository.clone(),
    );

    let circle_service = CircleApplicationService::new(
        Arc::new(UuidCircleFactory::new()),
        circle_repository.clone(),
        CircleService::new(circle_repository),
        user_repository,
    );

    AppState::new(Arc::new(user_service), Arc::new(circle_service))
}

fn demo_users() -> Vec<User> {
    [
        ("1", "user1", UserType::Normal),
        ("2", "user2", UserType::Premium),
    ]
    .into_iter()
    .filter_map(|(id, name, user_type)| {
        let id = UserId::new(id).ok()?;
        let name = UserName::new(name).ok()?;
        Some(User::new(id, name).with_user_type(user_type))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::user::UserGetCommand;

    #[test]
    fn test_demo_users() {
        let users = demo_users();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].to_string(), "1 user1 normal");
        assert_eq!(users[1].to_string(), "2 user2 premium");
    }

    #[tokio::test]
    async fn test_create_app_state_seeds_on_request() {
        let state = create_app_state(&AppConfig::default());
        let result = state
            .user_service
            .get(UserGetCommand {
                user_id: "2".to_string(),
            })
            .await
            .unwrap();
        assert!(result.user.is_premium());

        let mut config = AppConfig::default();
        config.storage.seed_demo_data = false;
        let state = create_app_state(&config);
        assert!(state.user_service.get_all().await.unwrap().users.is_empty());
    }
}
