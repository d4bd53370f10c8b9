//! Business rules over circles that need outside data to evaluate

use std::sync::Arc;

use chrono::{DateTime, Months, Utc};

use super::entity::Circle;
use crate::domain::DomainError;
use crate::domain::user::UserRepository;

const NORMAL_OWNER_MEMBER_LIMIT: usize = 30;
const PREMIUM_OWNER_MEMBER_LIMIT: usize = 50;
const RECOMMEND_MIN_MEMBERS: usize = 10;
const RECOMMEND_MIN_AGE_MONTHS: u32 = 1;

/// Satisfied when a circle has reached the capacity allowed by its owner's tier
#[derive(Clone)]
pub struct CircleFullSpecification {
    users: Arc<dyn UserRepository>,
}

impl CircleFullSpecification {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn is_satisfied_by(&self, circle: &Circle) -> Result<bool, DomainError> {
        let owner = self
            .users
            .find_by_id(circle.owner())
            .await?
            .ok_or_else(|| DomainError::not_found("circle owner not found"))?;

        let upper_limit = if owner.is_premium() {
            PREMIUM_OWNER_MEMBER_LIMIT
        } else {
            NORMAL_OWNER_MEMBER_LIMIT
        };

        Ok(circle.count_members() >= upper_limit)
    }
}

impl std::fmt::Debug for CircleFullSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircleFullSpecification").finish_non_exhaustive()
    }
}

/// Satisfied by circles worth recommending at `reference`: at least ten
/// members and created more than a month before.
#[derive(Debug, Clone, Copy)]
pub struct CircleRecommendSpecification {
    reference: DateTime<Utc>,
}

impl CircleRecommendSpecification {
    pub fn new(reference: DateTime<Utc>) -> Self {
        Self { reference }
    }

    pub fn is_satisfied_by(&self, circle: &Circle) -> bool {
        if circle.count_members() < RECOMMEND_MIN_MEMBERS {
            return false;
        }

        self.reference
            .checked_sub_months(Months::new(RECOMMEND_MIN_AGE_MONTHS))
            .is_some_and(|threshold| circle.created_at() < threshold)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::domain::circle::{CircleId, CircleName};
    use crate::domain::user::{MockUserRepository, User, UserId, UserName, UserType};

    fn circle(members: usize, created_at: DateTime<Utc>) -> Circle {
        let members = (0..members)
            .map(|i| UserId::new(format!("m{}", i)).unwrap())
            .collect();

        Circle::restore(
            CircleId::new("c-1").unwrap(),
            CircleName::new("book club").unwrap(),
            UserId::new("1").unwrap(),
            members,
            created_at,
        )
    }

    fn owner_repository(user_type: UserType) -> Arc<dyn UserRepository> {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(move |id| {
            Ok(Some(
                User::new(id.clone(), UserName::new("owner").unwrap()).with_user_type(user_type),
            ))
        });
        Arc::new(repo)
    }

    #[tokio::test]
    async fn test_full_for_normal_owner_at_30() {
        let spec = CircleFullSpecification::new(owner_repository(UserType::Normal));

        assert!(!spec.is_satisfied_by(&circle(28, Utc::now())).await.unwrap());
        assert!(spec.is_satisfied_by(&circle(29, Utc::now())).await.unwrap());
    }

    #[tokio::test]
    async fn test_full_for_premium_owner_at_50() {
        let spec = CircleFullSpecification::new(owner_repository(UserType::Premium));

        assert!(!spec.is_satisfied_by(&circle(29, Utc::now())).await.unwrap());
        assert!(!spec.is_satisfied_by(&circle(48, Utc::now())).await.unwrap());
        assert!(spec.is_satisfied_by(&circle(49, Utc::now())).await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_owner_is_reported() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let spec = CircleFullSpecification::new(Arc::new(repo));

        let result = spec.is_satisfied_by(&circle(0, Utc::now())).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[test]
    fn test_recommend_requires_ten_members() {
        let reference = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let spec = CircleRecommendSpecification::new(reference);
        let long_ago = reference - Duration::days(365);

        // 8 members + owner = 9
        assert!(!spec.is_satisfied_by(&circle(8, long_ago)));
        assert!(spec.is_satisfied_by(&circle(9, long_ago)));
    }

    #[test]
    fn test_recommend_requires_one_month_age() {
        let reference = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let spec = CircleRecommendSpecification::new(reference);
        let one_month_before = Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap();

        assert!(!spec.is_satisfied_by(&circle(20, reference)));
        assert!(!spec.is_satisfied_by(&circle(20, one_month_before)));
        assert!(spec.is_satisfied_by(&circle(20, one_month_before - Duration::seconds(1))));
    }
}
