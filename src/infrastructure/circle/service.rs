//! Circle application service
//!
//! `create` and `join` report business rejections (unknown user, bad name,
//! full circle, ...) as `Ok(false)`. Only storage faults are returned as
//! errors.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::DomainError;
use crate::domain::circle::{
    Circle, CircleFactory, CircleFullSpecification, CircleId, CircleName,
    CircleRecommendSpecification, CircleRepository, CircleService,
};
use crate::domain::user::{User, UserId, UserRepository};
use crate::infrastructure::observability::{UseCaseOutcome, record_use_case};

const CIRCLE_NOT_FOUND: &str = "circle not found";
const RECOMMEND_LIMIT: usize = 10;

/// Command for creating a circle owned by `user_id`
#[derive(Debug, Clone)]
pub struct CircleCreateCommand {
    pub user_id: String,
    pub name: String,
}

/// Command for adding `user_id` to a circle
#[derive(Debug, Clone)]
pub struct CircleJoinCommand {
    pub user_id: String,
    pub circle_id: String,
}

#[derive(Debug, Clone)]
pub struct CircleGetCommand {
    pub circle_id: String,
}

#[derive(Debug, Clone)]
pub struct CircleGetResult {
    pub circle: Circle,
}

#[derive(Debug, Clone)]
pub struct CircleGetAllResult {
    pub circles: Vec<Circle>,
}

#[derive(Debug, Clone)]
pub struct CircleGetRecommendResult {
    pub circles: Vec<Circle>,
}

/// Application service for circle use cases
#[derive(Clone)]
pub struct CircleApplicationService {
    circle_factory: Arc<dyn CircleFactory>,
    circle_repository: Arc<dyn CircleRepository>,
    circle_service: CircleService,
    user_repository: Arc<dyn UserRepository>,
}

impl CircleApplicationService {
    pub fn new(
        circle_factory: Arc<dyn CircleFactory>,
        circle_repository: Arc<dyn CircleRepository>,
        circle_service: CircleService,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            circle_factory,
            circle_repository,
            circle_service,
            user_repository,
        }
    }

    /// Create a circle. Returns false when the owner is unknown, the name is
    /// invalid or the name is already taken.
    pub async fn create(&self, command: CircleCreateCommand) -> Result<bool, DomainError> {
        Ok(self.create_with_id(command).await?.is_some())
    }

    /// Same as [`Self::create`], returning the id of the new circle instead
    /// of a flag
    pub async fn create_with_id(
        &self,
        command: CircleCreateCommand,
    ) -> Result<Option<CircleId>, DomainError> {
        info!(user_id = %command.user_id, name = %command.name, "Creating circle");

        let result = self.try_create(command).await;
        let outcome = UseCaseOutcome::from_result(&result.as_ref().map(Option::is_some));
        record_use_case("circle_create", outcome);
        result
    }

    async fn try_create(
        &self,
        command: CircleCreateCommand,
    ) -> Result<Option<CircleId>, DomainError> {
        // TX starts
        let Some(owner) = self.find_user(&command.user_id).await? else {
            debug!(user_id = %command.user_id, "Circle owner not found");
            return Ok(None);
        };

        let name = match CircleName::new(command.name) {
            Ok(name) => name,
            Err(e) => {
                debug!(error = %e, "Invalid circle name");
                return Ok(None);
            }
        };

        let circle = self.circle_factory.create(name, &owner).await?;
        if self.circle_service.exists(&circle).await? {
            debug!(name = %circle.name(), "Circle name already taken");
            return Ok(None);
        }

        self.circle_repository.save(&circle).await.inspect_err(|e| {
            warn!(circle_id = %circle.id(), error = %e, "Failed to save circle");
        })?;
        // TX ends

        info!(circle_id = %circle.id(), "Circle created");
        Ok(Some(circle.id().clone()))
    }

    /// Add a user to a circle. Returns false when the user, the circle or
    /// the circle's owner is unknown, or when the circle is full.
    pub async fn join(&self, command: CircleJoinCommand) -> Result<bool, DomainError> {
        info!(user_id = %command.user_id, circle_id = %command.circle_id, "Joining circle");

        let result = self.try_join(command).await;
        record_use_case("circle_join", UseCaseOutcome::from_result(&result));
        result
    }

    async fn try_join(&self, command: CircleJoinCommand) -> Result<bool, DomainError> {
        // TX starts
        let Some(member) = self.find_user(&command.user_id).await? else {
            debug!(user_id = %command.user_id, "Joining user not found");
            return Ok(false);
        };

        let Some(mut circle) = self.find_circle(&command.circle_id).await? else {
            debug!(circle_id = %command.circle_id, "Circle not found");
            return Ok(false);
        };

        let full = CircleFullSpecification::new(self.user_repository.clone());
        match full.is_satisfied_by(&circle).await {
            Ok(false) => {}
            Ok(true) => {
                debug!(circle_id = %circle.id(), "Circle is full for its owner's tier");
                return Ok(false);
            }
            Err(DomainError::NotFound { message }) => {
                debug!(circle_id = %circle.id(), reason = %message, "Circle owner not found");
                return Ok(false);
            }
            Err(e) => return Err(e),
        }

        if !circle.join(&member) {
            debug!(circle_id = %circle.id(), "Circle reached its member limit");
            return Ok(false);
        }

        self.circle_repository.save(&circle).await.inspect_err(|e| {
            warn!(circle_id = %circle.id(), error = %e, "Failed to save circle");
        })?;
        // TX ends

        Ok(true)
    }

    /// Circles worth recommending right now
    pub async fn get_recommend(&self) -> Result<CircleGetRecommendResult, DomainError> {
        self.get_recommend_at(Utc::now()).await
    }

    /// Up to ten recommendable circles at `reference`, in repository order
    pub async fn get_recommend_at(
        &self,
        reference: DateTime<Utc>,
    ) -> Result<CircleGetRecommendResult, DomainError> {
        let spec = CircleRecommendSpecification::new(reference);

        let circles = self
            .circle_repository
            .find_all()
            .await?
            .into_iter()
            .filter(|circle| spec.is_satisfied_by(circle))
            .take(RECOMMEND_LIMIT)
            .collect::<Vec<_>>();

        debug!(count = circles.len(), "Recommended circles");
        Ok(CircleGetRecommendResult { circles })
    }

    pub async fn get(&self, command: CircleGetCommand) -> Result<CircleGetResult, DomainError> {
        let circle = self
            .find_circle(&command.circle_id)
            .await?
            .ok_or_else(|| DomainError::not_found(CIRCLE_NOT_FOUND))?;

        Ok(CircleGetResult { circle })
    }

    pub async fn get_all(&self) -> Result<CircleGetAllResult, DomainError> {
        let circles = self.circle_repository.find_all().await?;
        Ok(CircleGetAllResult { circles })
    }

    async fn find_user(&self, id: &str) -> Result<Option<User>, DomainError> {
        match UserId::new(id) {
            Ok(id) => self.user_repository.find_by_id(&id).await,
            Err(_) => Ok(None),
        }
    }

    async fn find_circle(&self, id: &str) -> Result<Option<Circle>, DomainError> {
        match CircleId::new(id) {
            Ok(id) => self.circle_repository.find_by_id(&id).await,
            Err(_) => Ok(None),
        }
    }
}

impl std::fmt::Debug for CircleApplicationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircleApplicationService")
            .finish_non_exhaustive()
    }
}
