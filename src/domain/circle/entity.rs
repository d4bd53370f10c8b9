//! Circle aggregate and its value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{CircleValidationError, validate_circle_id, validate_circle_name};
use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::user::{User, UserId};

/// Circle identifier - any non-empty string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CircleId(String);

impl CircleId {
    /// Create a new CircleId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, CircleValidationError> {
        let id = id.into();
        validate_circle_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CircleId {
    type Error = CircleValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CircleId> for String {
    fn from(id: CircleId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CircleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for CircleId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Circle name - 3 to 20 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CircleName(String);

impl CircleName {
    /// Create a new CircleName after validation
    pub fn new(name: impl Into<String>) -> Result<Self, CircleValidationError> {
        let name = name.into();
        validate_circle_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CircleName {
    type Error = CircleValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CircleName> for String {
    fn from(name: CircleName) -> Self {
        name.0
    }
}

impl std::fmt::Display for CircleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Circle aggregate root
///
/// The owner is not part of `members` but always counts as one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    id: CircleId,
    name: CircleName,
    owner: UserId,
    members: Vec<UserId>,
    created_at: DateTime<Utc>,
}

impl Circle {
    /// Baseline capacity, owner included
    pub const MEMBER_LIMIT: usize = 30;

    /// Create a new circle owned by `owner`, with no other members
    pub fn new(id: CircleId, name: CircleName, owner: &User) -> Self {
        Self {
            id,
            name,
            owner: owner.id().clone(),
            members: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Rebuild a circle from previously stored state
    pub fn restore(
        id: CircleId,
        name: CircleName,
        owner: UserId,
        members: Vec<UserId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            owner,
            members,
            created_at,
        }
    }

    // Getters

    pub fn id(&self) -> &CircleId {
        &self.id
    }

    pub fn name(&self) -> &CircleName {
        &self.name
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn members(&self) -> &[UserId] {
        &self.members
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of members including the owner
    pub fn count_members(&self) -> usize {
        self.members.len() + 1
    }

    pub fn is_full(&self) -> bool {
        self.count_members() >= Self::MEMBER_LIMIT
    }

    // Mutators

    /// Add `member` to the circle. Returns false when the circle is full.
    pub fn join(&mut self, member: &User) -> bool {
        if self.is_full() {
            return false;
        }

        self.members.push(member.id().clone());
        true
    }
}

impl StorageEntity for Circle {
    type Key = CircleId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
