//! User aggregate and its value objects

use serde::{Deserialize, Serialize};

use super::validation::{UserValidationError, validate_user_id, validate_user_name};
use crate::domain::storage::{StorageEntity, StorageKey};

/// User identifier - any non-empty string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        validate_user_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for UserId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Display name of a user - at least 3 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Create a new UserName after validation
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        validate_user_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Membership tier of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    #[default]
    Normal,
    Premium,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Premium => write!(f, "premium"),
        }
    }
}

/// User aggregate root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: UserName,
    user_type: UserType,
}

impl User {
    /// Create a new user with the default tier
    pub fn new(id: UserId, name: UserName) -> Self {
        Self {
            id,
            name,
            user_type: UserType::default(),
        }
    }

    /// Set the tier (builder pattern)
    pub fn with_user_type(mut self, user_type: UserType) -> Self {
        self.user_type = user_type;
        self
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    pub fn is_premium(&self) -> bool {
        matches!(self.user_type, UserType::Premium)
    }

    // Mutators

    /// Replace the name. Returns false and keeps the current name when no
    /// name is given.
    pub fn change_name(&mut self, name: Option<UserName>) -> bool {
        match name {
            Some(name) => {
                self.name = name;
                true
            }
            None => false,
        }
    }

    pub fn upgrade(&mut self) {
        self.user_type = UserType::Premium;
    }

    pub fn downgrade(&mut self) {
        self.user_type = UserType::Normal;
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.id, self.name, self.user_type)
    }
}

impl StorageEntity for User {
    type Key = UserId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
