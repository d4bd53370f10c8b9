//! User application service
//!
//! Each public method is one use case: load the aggregate, apply the domain
//! rules, save. Failures are returned as `DomainError` with the reason the
//! caller shows to the user.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::DomainError;
use crate::domain::user::{User, UserFactory, UserId, UserName, UserRepository, UserService};

const USER_NOT_FOUND: &str = "user not found";
const USER_ALREADY_EXISTS: &str = "user already exists";
const NAME_IS_EMPTY: &str = "name is empty";
const COULD_NOT_DELETE_USER: &str = "could not delete user";

/// Command for fetching a single user
#[derive(Debug, Clone)]
pub struct UserGetCommand {
    pub user_id: String,
}

#[derive(Debug, Clone)]
pub struct UserGetResult {
    pub user: User,
}

#[derive(Debug, Clone)]
pub struct UserGetAllResult {
    pub users: Vec<User>,
}

/// Command for registering a new user
#[derive(Debug, Clone)]
pub struct UserRegisterCommand {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct UserRegisterResult {
    pub id: String,
}

/// Command for renaming a user
#[derive(Debug, Clone)]
pub struct UserUpdateCommand {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct UserDeleteCommand {
    pub id: String,
}

/// Command for moving a user between tiers
#[derive(Debug, Clone)]
pub struct UserTierCommand {
    pub id: String,
}

/// Application service for user use cases
#[derive(Clone)]
pub struct UserApplicationService {
    user_service: UserService,
    user_factory: Arc<dyn UserFactory>,
    user_repository: Arc<dyn UserRepository>,
}

impl UserApplicationService {
    pub fn new(
        user_service: UserService,
        user_factory: Arc<dyn UserFactory>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            user_service,
            user_factory,
            user_repository,
        }
    }

    /// Get a user by id
    pub async fn get(&self, command: UserGetCommand) -> Result<UserGetResult, DomainError> {
        let user = self.require(&command.user_id).await?;
        Ok(UserGetResult { user })
    }

    /// Every stored user in repository order
    pub async fn get_all(&self) -> Result<UserGetAllResult, DomainError> {
        let users = self.user_repository.find_all().await?;
        Ok(UserGetAllResult { users })
    }

    /// Register a new user. User names and ids are unique.
    pub async fn register(
        &self,
        command: UserRegisterCommand,
    ) -> Result<UserRegisterResult, DomainError> {
        info!(name = %command.name, "Registering user");

        // TX starts
        let name = UserName::new(command.name).map_err(|e| DomainError::validation(e.to_string()))?;
        let user = self.user_factory.create(name).await?;

        if self.user_service.exists(&user).await? {
            debug!(name = %user.name(), "User name already taken");
            return Err(DomainError::conflict(USER_ALREADY_EXISTS));
        }

        if self.user_repository.exists(&user).await? {
            debug!(id = %user.id(), "Assigned user id already taken");
            return Err(DomainError::conflict(USER_ALREADY_EXISTS));
        }

        self.user_repository.save(&user).await?;
        // TX ends

        info!(id = %user.id(), "User registered");
        Ok(UserRegisterResult {
            id: user.id().to_string(),
        })
    }

    /// Rename a user
    pub async fn update(&self, command: UserUpdateCommand) -> Result<(), DomainError> {
        info!(id = %command.id, "Updating user");

        // TX starts
        let mut user = self.require(&command.id).await?;

        let name = if command.name.is_empty() {
            None
        } else {
            Some(UserName::new(command.name).map_err(|e| DomainError::validation(e.to_string()))?)
        };

        if !user.change_name(name) {
            return Err(DomainError::validation(NAME_IS_EMPTY));
        }

        if self.user_service.exists(&user).await? {
            debug!(name = %user.name(), "User name already taken");
            return Err(DomainError::conflict(USER_ALREADY_EXISTS));
        }

        self.user_repository.save(&user).await
        // TX ends
    }

    /// Delete a user
    pub async fn delete(&self, command: UserDeleteCommand) -> Result<(), DomainError> {
        info!(id = %command.id, "Deleting user");

        // TX starts
        let user = self.require(&command.id).await?;

        self.user_repository.delete(&user).await.map_err(|e| {
            warn!(id = %user.id(), error = %e, "Failed to delete user");
            DomainError::internal(COULD_NOT_DELETE_USER)
        })
        // TX ends
    }

    /// Move a user to the premium tier
    pub async fn upgrade(&self, command: UserTierCommand) -> Result<(), DomainError> {
        info!(id = %command.id, "Upgrading user");

        let mut user = self.require(&command.id).await?;
        user.upgrade();
        self.user_repository.save(&user).await
    }

    /// Move a user back to the normal tier
    pub async fn downgrade(&self, command: UserTierCommand) -> Result<(), DomainError> {
        info!(id = %command.id, "Downgrading user");

        let mut user = self.require(&command.id).await?;
        user.downgrade();
        self.user_repository.save(&user).await
    }

    async fn require(&self, id: &str) -> Result<User, DomainError> {
        let Ok(id) = UserId::new(id) else {
            return Err(DomainError::not_found(USER_NOT_FOUND));
        };

        self.user_repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))
    }
}

impl std::fmt::Debug for UserApplicationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserApplicationService").finish_non_exhaustive()
    }
}
